//! CLI command implementations.

pub mod compare;
pub mod heatmap;
pub mod menu;
pub mod series;
pub mod summary;

use std::io;
use std::path::Path;

use colored::Colorize;
use flightstats::{FlightData, LoaderConfig, Renderer};

use crate::cli::RendererChoice;
use crate::render::{JsonRenderer, TerminalRenderer};

/// Settings shared by every command, taken from the global flags.
#[derive(Debug, Clone)]
pub struct Options {
    pub delimiter: Option<u8>,
    pub renderer: RendererChoice,
    pub verbose: bool,
}

/// Load the flights file, failing early with a readable message.
pub fn load_data(file: &Path, options: &Options) -> Result<FlightData, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let mut config = LoaderConfig::default();
    if let Some(d) = options.delimiter {
        config = config.with_delimiter(d);
    }

    let data = FlightData::load_with_config(file, config)?;
    tracing::info!(
        file = %data.source().file,
        rows = data.len(),
        "flights file loaded"
    );

    // Keep stdout clean for JSON consumers.
    if options.verbose && options.renderer == RendererChoice::Text {
        println!(
            "{} {} ({} rows, {})",
            "Loaded".green().bold(),
            file.display().to_string().white(),
            data.len().to_string().white().bold(),
            data.source().format
        );
    }

    Ok(data)
}

/// Build the renderer selected on the command line, writing to stdout.
pub fn make_renderer(choice: RendererChoice) -> Box<dyn Renderer> {
    match choice {
        RendererChoice::Text => Box::new(TerminalRenderer::new(io::stdout())),
        RendererChoice::Json => Box::new(JsonRenderer::new(io::stdout())),
    }
}
