//! Compare command - total passengers for chosen years or months.

use std::path::PathBuf;

use colored::Colorize;
use flightstats::{CompareChoice, FlightAnalysis, RenderRequest};

use super::Options;
use crate::cli::RendererChoice;

pub fn run(
    file: PathBuf,
    years: Option<String>,
    months: Option<String>,
    options: &Options,
) -> Result<(), Box<dyn std::error::Error>> {
    let (choice, list) = match (years, months) {
        (Some(list), None) => (CompareChoice::Years, list),
        (None, Some(list)) => (CompareChoice::Months, list),
        _ => return Err("Pass exactly one of --years or --months".into()),
    };

    let data = super::load_data(&file, options)?;
    let request = FlightAnalysis::new(&data).compare(choice, &list);

    if let RenderRequest::Bar { bars, .. } = &request {
        if bars.is_empty() {
            return Err(format!("Nothing to compare in '{}'", list).into());
        }
        if options.renderer == RendererChoice::Text {
            let missing: Vec<&str> = bars
                .iter()
                .filter(|(_, total)| **total == 0)
                .map(|(label, _)| label.as_str())
                .collect();
            if !missing.is_empty() {
                println!(
                    "{} no passengers recorded for {}",
                    "Note:".yellow().bold(),
                    missing.join(", ")
                );
            }
        }
    }

    let mut renderer = super::make_renderer(options.renderer);
    renderer.render(&request)?;

    Ok(())
}
