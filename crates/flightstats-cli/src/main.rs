//! flightstats CLI - explore monthly flight passenger counts.

mod cli;
mod commands;
mod logging;
mod render;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let options = commands::Options {
        delimiter: cli.delimiter,
        renderer: cli.renderer,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Menu { file } => commands::menu::run(file, &options),

        Commands::Series { file } => commands::series::run(file, &options),

        Commands::Heatmap { file } => commands::heatmap::run(file, &options),

        Commands::Compare {
            file,
            years,
            months,
        } => commands::compare::run(file, years, months, &options),

        Commands::Summary { file, json } => commands::summary::run(file, json, &options),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
