//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// flightstats: explore monthly flight passenger counts
#[derive(Parser)]
#[command(name = "flightstats")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Field delimiter (tab, comma, semicolon, pipe); auto-detected if omitted
    #[arg(short, long, global = true, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// How charts are displayed
    #[arg(long, global = true, default_value = "text")]
    pub renderer: RendererChoice,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu: time series, heatmap and comparisons
    Menu {
        /// Path to the flights file (CSV/TSV)
        #[arg(value_name = "FILE", default_value = "flights.csv")]
        file: PathBuf,
    },

    /// Show passengers by month, one line per year
    Series {
        /// Path to the flights file (CSV/TSV)
        #[arg(value_name = "FILE", default_value = "flights.csv")]
        file: PathBuf,
    },

    /// Show the month × year passengers heatmap
    Heatmap {
        /// Path to the flights file (CSV/TSV)
        #[arg(value_name = "FILE", default_value = "flights.csv")]
        file: PathBuf,
    },

    /// Compare total passengers across years or months
    Compare {
        /// Path to the flights file (CSV/TSV)
        #[arg(value_name = "FILE", default_value = "flights.csv")]
        file: PathBuf,

        /// Comma-separated years, matched exactly (e.g. "1949,1950")
        #[arg(long, conflicts_with = "months", required_unless_present = "months")]
        years: Option<String>,

        /// Comma-separated months, matched ignoring case (e.g. "jan,jul")
        #[arg(long, conflicts_with = "years")]
        months: Option<String>,
    },

    /// Print source details, unique years/months and yearly totals
    Summary {
        /// Path to the flights file (CSV/TSV)
        #[arg(value_name = "FILE", default_value = "flights.csv")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse a delimiter name or single character.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "semicolon" | ";" => Ok(b';'),
        "pipe" | "|" => Ok(b'|'),
        other if other.len() == 1 && other.is_ascii() => Ok(other.as_bytes()[0]),
        other => Err(format!(
            "Invalid delimiter: '{}'. Use a single ASCII character or tab, comma, semicolon, pipe.",
            other
        )),
    }
}

/// Renderer used for charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RendererChoice {
    /// Coloured text charts on the terminal
    #[default]
    Text,
    /// One JSON document per chart on stdout
    Json,
}

impl std::str::FromStr for RendererChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "terminal" => Ok(RendererChoice::Text),
            "json" => Ok(RendererChoice::Json),
            _ => Err(format!("Unknown renderer: {}. Use text or json.", s)),
        }
    }
}

impl std::fmt::Display for RendererChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RendererChoice::Text => write!(f, "text"),
            RendererChoice::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter(":"), Ok(b':'));
        assert!(parse_delimiter("ab").is_err());
    }

    #[test]
    fn test_compare_requires_a_list() {
        assert!(Cli::try_parse_from(["flightstats", "compare", "f.csv"]).is_err());
        assert!(
            Cli::try_parse_from(["flightstats", "compare", "--years", "1", "--months", "Jan"])
                .is_err()
        );

        let cli = Cli::try_parse_from(["flightstats", "compare", "--months", "jan,feb"]).unwrap();
        match cli.command {
            Commands::Compare { file, years, months } => {
                assert_eq!(file, PathBuf::from("flights.csv"));
                assert_eq!(years, None);
                assert_eq!(months.as_deref(), Some("jan,feb"));
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "flightstats",
            "series",
            "data.tsv",
            "--renderer",
            "json",
            "-d",
            "tab",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.renderer, RendererChoice::Json);
        assert_eq!(cli.delimiter, Some(b'\t'));
        assert!(cli.verbose);
    }
}
