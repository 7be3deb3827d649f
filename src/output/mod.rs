//! Report writers.
//!
//! Writers only read an [`Analysis`]; all counting has already happened.

pub mod json;
pub mod terminal;

pub use json::JsonWriter;
pub use terminal::{format_count, format_percentage, TerminalWriter};

use crate::analyzer::Analysis;
use crate::formatting::FormattingConfig;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tree report
    #[default]
    Terminal,
    /// Machine-readable JSON
    Json,
}

pub trait OutputWriter {
    fn write_analysis(&mut self, analysis: &Analysis) -> anyhow::Result<()>;
}

/// `part` as a percentage of `whole`; 0.0 when `whole` is 0
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    formatting: FormattingConfig,
    significance_threshold: f64,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(
            writer,
            formatting.style(),
            significance_threshold,
        )),
        OutputFormat::Json => Box::new(JsonWriter::new(writer, significance_threshold)),
    }
}

/// Write the "nothing to report" notice in `format`
pub fn write_empty_result(
    format: OutputFormat,
    writer: &mut dyn Write,
    message: &str,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Terminal => writeln!(writer, "{message}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &serde_json::json!({ "message": message }))?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
