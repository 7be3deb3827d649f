//! Single pass over the tracked files: blame, parse, aggregate.
//!
//! Files are processed one at a time in index order. A file whose blame
//! cannot be retrieved is recorded as skipped: it counts toward
//! `files_analyzed` but contributes nothing to the tables or the tree.

use crate::core::{Error, Result};
use crate::git::{parse_line_porcelain, AuthorshipRecord, ExtensionFilter, SourceControl};
use crate::stats::{DirectoryTree, StatisticsAggregator};

/// A tracked file that produced no blame data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Everything the reports are rendered from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// Tracked files considered, including skipped ones
    pub files_analyzed: usize,
    pub skipped_files: Vec<SkippedFile>,
    pub stats: StatisticsAggregator,
    pub tree: DirectoryTree,
}

impl Analysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one file to both the aggregator and the tree
    pub fn add_file(&mut self, path: &str, record: &AuthorshipRecord) {
        self.files_analyzed += 1;
        self.stats.add_file(path, record);
        self.tree.add_file(path, record.total_lines());
    }

    pub fn skip_file(&mut self, path: &str, reason: impl Into<String>) {
        self.files_analyzed += 1;
        self.skipped_files.push(SkippedFile {
            path: path.to_string(),
            reason: reason.into(),
        });
    }

    pub fn total_lines(&self) -> usize {
        self.stats.total_lines()
    }
}

/// Blame and aggregate `files` in order
pub fn analyze_files<S>(source: &S, files: &[String]) -> Analysis
where
    S: SourceControl + ?Sized,
{
    let mut analysis = Analysis::new();

    for path in files {
        match source.blame(path) {
            Ok(output) => {
                let record = parse_line_porcelain(&output);
                log::debug!(
                    "{}: {} lines from {} authors",
                    path,
                    record.total_lines(),
                    record.author_count()
                );
                analysis.add_file(path, &record);
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", path, e);
                analysis.skip_file(path, e.to_string());
            }
        }
    }

    analysis
}

/// List tracked files, keep those matching `filter`, and analyse them.
///
/// Fails with [`Error::NoTrackedFiles`] when the list cannot be produced or
/// nothing matches the filter.
pub fn analyze_repository<S>(source: &S, filter: &ExtensionFilter) -> Result<Analysis>
where
    S: SourceControl + ?Sized,
{
    let tracked = match source.tracked_files() {
        Ok(files) => files,
        Err(e) => {
            log::warn!("Unable to list tracked files: {}", e);
            return Err(Error::NoTrackedFiles);
        }
    };

    let files = filter.apply(tracked);
    if files.is_empty() {
        return Err(Error::NoTrackedFiles);
    }
    log::info!("Analyzing {} tracked files", files.len());

    Ok(analyze_files(source, &files))
}
