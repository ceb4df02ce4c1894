//! Interactive menu loop over generic console handles.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::facade::{CompareChoice, FlightAnalysis, MenuChoice};
use crate::error::{FlightError, Result};
use crate::render::Renderer;

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked the exit entry.
    Exit,
    /// Input ran out before an exit was chosen.
    EndOfInput,
}

/// Menu-driven session: prompts on `output`, reads answers from `input`, and
/// hands every chart to `renderer`.
pub struct Session<'a, I, O, R> {
    analysis: FlightAnalysis<'a>,
    input: I,
    output: O,
    renderer: R,
}

impl<'a, I, O, R> Session<'a, I, O, R>
where
    I: BufRead,
    O: Write,
    R: Renderer,
{
    pub fn new(analysis: FlightAnalysis<'a>, input: I, output: O, renderer: R) -> Self {
        Self {
            analysis,
            input,
            output,
            renderer,
        }
    }

    /// Run until the user exits or input is exhausted.
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            self.show_menu()?;
            let Some(answer) = self.prompt("Enter your choice (1-4): ")? else {
                debug!("input closed at main menu");
                return Ok(SessionEnd::EndOfInput);
            };

            match answer.parse::<MenuChoice>() {
                Ok(MenuChoice::TimeSeries) => {
                    let request = self.analysis.time_series();
                    self.renderer.render(&request)?;
                }
                Ok(MenuChoice::MonthlyData) => {
                    let request = self.analysis.monthly_heatmap();
                    self.renderer.render(&request)?;
                }
                Ok(MenuChoice::Compare) => {
                    if !self.compare()? {
                        return Ok(SessionEnd::EndOfInput);
                    }
                }
                Ok(MenuChoice::Exit) => {
                    self.say("Exiting program...")?;
                    info!("session ended by user");
                    return Ok(SessionEnd::Exit);
                }
                Err(reason) => {
                    debug!(%reason, "rejected menu input");
                    self.say("Invalid choice. Please try again.")?;
                }
            }
        }
    }

    /// Returns `false` if input ran out inside the sub-menu.
    fn compare(&mut self) -> Result<bool> {
        self.say("\nCompare Options:")?;
        self.say(&format!("1. {}", CompareChoice::Years))?;
        self.say(&format!("2. {}", CompareChoice::Months))?;

        let Some(answer) = self.prompt("Enter your choice (1-2): ")? else {
            return Ok(false);
        };

        let choice = match answer.parse::<CompareChoice>() {
            Ok(choice) => choice,
            Err(reason) => {
                debug!(%reason, "rejected compare input");
                self.say("Invalid choice.")?;
                return Ok(true);
            }
        };

        let question = match choice {
            CompareChoice::Years => "Enter years to compare (comma separated): ",
            CompareChoice::Months => "Enter months to compare (comma separated): ",
        };
        let Some(list) = self.prompt(question)? else {
            return Ok(false);
        };

        let request = self.analysis.compare(choice, &list);
        self.renderer.render(&request)?;
        Ok(true)
    }

    fn show_menu(&mut self) -> Result<()> {
        self.say("\nFLIGHTS DATA ANALYSIS")?;
        for choice in MenuChoice::ALL {
            self.say(&format!("{}. {}", choice.number(), choice))?;
        }
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(FlightError::Console)
    }

    /// Print `question` and read one line; `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question).map_err(FlightError::Console)?;
        self.output.flush().map_err(FlightError::Console)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(FlightError::Console)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Give back the owned handles.
    pub fn into_parts(self) -> (I, O, R) {
        (self.input, self.output, self.renderer)
    }
}
