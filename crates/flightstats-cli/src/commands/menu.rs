//! Menu command - the interactive analysis session.

use std::io;
use std::path::PathBuf;

use colored::Colorize;
use flightstats::{FlightAnalysis, Session, SessionEnd};

use super::Options;

pub fn run(file: PathBuf, options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let data = super::load_data(&file, options)?;

    let renderer = super::make_renderer(options.renderer);
    let stdin = io::stdin();
    let end = Session::new(FlightAnalysis::new(&data), stdin.lock(), io::stdout(), renderer).run()?;

    if end == SessionEnd::EndOfInput && options.verbose {
        println!();
        println!("{}", "Input closed, leaving menu.".yellow());
    }

    Ok(())
}
