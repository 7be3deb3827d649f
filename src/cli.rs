use crate::config::is_valid_threshold;
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blamemap")]
#[command(
    about = "Line ownership by author, extension and directory from git blame",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count blamed lines per author, extension and directory
    Analyze {
        /// Git repository directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// File extensions to include (default: common programming languages)
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        extensions: Option<Vec<String>>,

        /// Hide directories holding this share of total lines or less
        #[arg(long = "threshold", value_parser = parse_threshold)]
        significance_threshold: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Plain output without colors
        #[arg(long)]
        plain: bool,

        /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .parse()
        .map_err(|e| format!("invalid threshold '{value}': {e}"))?;
    if is_valid_threshold(threshold) {
        Ok(threshold)
    } else {
        Err(format!("threshold must be in [0, 1), got {threshold}"))
    }
}
