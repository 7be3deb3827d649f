use crate::output::OutputFormat;
use crate::stats::DEFAULT_SIGNIFICANCE_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Root configuration structure for blamemap (`.blamemap.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BlamemapConfig {
    /// What to analyse and what to display
    #[serde(default)]
    pub analysis: Option<AnalysisSettings>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalysisSettings {
    /// File suffixes to include, e.g. `[".rs", ".py"]`
    #[serde(default)]
    pub extensions: Option<Vec<String>>,

    /// Minimum share of total lines (exclusive) for a directory to be shown
    #[serde(default)]
    pub significance_threshold: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
}

/// A threshold is usable when it is a finite fraction in `[0, 1)`
pub fn is_valid_threshold(threshold: f64) -> bool {
    threshold.is_finite() && (0.0..1.0).contains(&threshold)
}

impl BlamemapConfig {
    pub fn extensions(&self) -> Option<&[String]> {
        self.analysis
            .as_ref()
            .and_then(|analysis| analysis.extensions.as_deref())
    }

    pub fn significance_threshold(&self) -> f64 {
        self.analysis
            .as_ref()
            .and_then(|analysis| analysis.significance_threshold)
            .unwrap_or(DEFAULT_SIGNIFICANCE_THRESHOLD)
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|output| output.default_format)
            .unwrap_or_default()
    }

    /// Check value ranges, returning a description of the first problem
    pub fn validate(&self) -> Result<(), String> {
        if let Some(threshold) = self
            .analysis
            .as_ref()
            .and_then(|analysis| analysis.significance_threshold)
        {
            if !is_valid_threshold(threshold) {
                return Err(format!(
                    "significance_threshold must be in [0, 1), got {threshold}"
                ));
            }
        }

        if let Some(extensions) = self.extensions() {
            if extensions.iter().any(|ext| ext.is_empty()) {
                return Err("extensions must not contain empty strings".to_string());
            }
        }

        Ok(())
    }
}
