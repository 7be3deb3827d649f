use anyhow::Result;
use blamemap::cli::{Cli, Commands};
use blamemap::commands::AnalyzeConfig;
use blamemap::formatting::FormattingConfig;
use clap::Parser;
use log::LevelFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            extensions,
            significance_threshold,
            format,
            output,
            plain,
            verbosity,
        } => {
            init_logging(verbosity);

            let file_config = blamemap::config::load_config();
            let config = AnalyzeConfig::resolve(
                &file_config,
                path,
                extensions,
                significance_threshold,
                format,
                output,
                create_formatting_config(plain),
            );
            blamemap::commands::handle_analyze(config)
        }
        Commands::Init { force } => {
            init_logging(0);
            blamemap::commands::init_config(force)
        }
    }
}

// Pure function to map -v count to a log level
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// RUST_LOG, when set, overrides the -v level
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
