use crate::analyzer::{analyze_repository, Analysis};
use crate::config::BlamemapConfig;
use crate::formatting::FormattingConfig;
use crate::git::{ExtensionFilter, GitRepository, DEFAULT_EXTENSIONS};
use crate::output::{create_writer, write_empty_result, OutputFormat};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const NO_TRACKED_FILES_MESSAGE: &str = "No tracked code files found";

/// Fully resolved settings for one `analyze` run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub extensions: Vec<String>,
    pub significance_threshold: f64,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

impl AnalyzeConfig {
    /// CLI values win over `.blamemap.toml`, which wins over built-in defaults
    pub fn resolve(
        file_config: &BlamemapConfig,
        path: PathBuf,
        extensions: Option<Vec<String>>,
        significance_threshold: Option<f64>,
        format: Option<OutputFormat>,
        output: Option<PathBuf>,
        formatting: FormattingConfig,
    ) -> Self {
        let extensions = extensions
            .filter(|exts| !exts.is_empty())
            .or_else(|| file_config.extensions().map(<[String]>::to_vec))
            .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect());

        Self {
            path,
            extensions,
            significance_threshold: significance_threshold
                .unwrap_or_else(|| file_config.significance_threshold()),
            format: format.unwrap_or_else(|| file_config.default_format()),
            output,
            formatting,
        }
    }
}

/// Run the analysis, or `None` when there is nothing to report
/// (not a repository, or no tracked file matches).
pub fn run_analysis(config: &AnalyzeConfig) -> Result<Option<Analysis>> {
    let repo = match GitRepository::open(&config.path) {
        Ok(repo) => repo,
        Err(e) if e.is_empty_result() => {
            log::warn!("{}", e);
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open {}", config.path.display()))
        }
    };

    let filter = ExtensionFilter::new(config.extensions.iter().cloned());
    match analyze_repository(&repo, &filter) {
        Ok(analysis) => Ok(Some(analysis)),
        Err(e) if e.is_empty_result() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn open_destination(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Styling for the chosen destination; report files are always plain text
pub fn report_formatting(formatting: FormattingConfig, output: Option<&Path>) -> FormattingConfig {
    match output {
        Some(_) => FormattingConfig::plain(),
        None => formatting,
    }
}

fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Directory '{}' does not exist", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("'{}' is not a directory", path.display());
    }
    Ok(())
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    ensure_directory(&config.path)?;

    let analysis = run_analysis(&config)?;
    let output = config.output.as_deref();
    let mut destination = open_destination(output)?;

    match analysis {
        Some(analysis) => {
            let mut writer = create_writer(
                config.format,
                destination,
                report_formatting(config.formatting, output),
                config.significance_threshold,
            );
            writer.write_analysis(&analysis)?;
        }
        None => write_empty_result(config.format, &mut destination, NO_TRACKED_FILES_MESSAGE)?,
    }

    if let Some(path) = output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}
