use super::OrderedTable;
use crate::git::AuthorshipRecord;
use serde::Serialize;

/// Files and lines seen for one extension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionStats {
    pub file_count: usize,
    pub line_count: usize,
}

/// Folds per-file authorship records into the four aggregate tables:
/// grand total, per extension, per author, and per author per extension.
///
/// Every table only ever grows. Calling [`add_file`](Self::add_file) twice
/// for the same path counts that file twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticsAggregator {
    total_lines: usize,
    extensions: OrderedTable<String, ExtensionStats>,
    authors: OrderedTable<String, usize>,
    author_extensions: OrderedTable<String, OrderedTable<String, usize>>,
}

/// Extension of the final path segment, from its last `.` inclusive.
///
/// Returns `""` when the file name has no dot.
pub fn extension_of(path: &str) -> &str {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name
        .rfind('.')
        .map(|dot| &file_name[dot..])
        .unwrap_or("")
}

impl StatisticsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: &str, record: &AuthorshipRecord) {
        let ext = extension_of(path);
        let file_lines = record.total_lines();

        self.total_lines += file_lines;

        let ext_stats = self.extensions.entry(ext);
        ext_stats.file_count += 1;
        ext_stats.line_count += file_lines;

        for (author, lines) in record.iter() {
            *self.authors.entry(author) += lines;
            *self.author_extensions.entry(author).entry(ext) += lines;
        }
    }

    /// Fold another aggregator's tables into this one.
    ///
    /// Keys new to `self` are appended in `other`'s encounter order.
    pub fn merge(&mut self, other: &StatisticsAggregator) {
        self.total_lines += other.total_lines;

        for (ext, stats) in other.extensions.iter() {
            let mine = self.extensions.entry(ext.as_str());
            mine.file_count += stats.file_count;
            mine.line_count += stats.line_count;
        }
        for (author, lines) in other.authors.iter() {
            *self.authors.entry(author.as_str()) += lines;
        }
        for (author, per_ext) in other.author_extensions.iter() {
            let mine = self.author_extensions.entry(author.as_str());
            for (ext, lines) in per_ext.iter() {
                *mine.entry(ext.as_str()) += lines;
            }
        }
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn extensions(&self) -> &OrderedTable<String, ExtensionStats> {
        &self.extensions
    }

    pub fn authors(&self) -> &OrderedTable<String, usize> {
        &self.authors
    }

    pub fn extension_stats(&self, ext: &str) -> ExtensionStats {
        self.extensions.get(ext).copied().unwrap_or_default()
    }

    pub fn author_lines(&self, author: &str) -> usize {
        self.authors.get(author).copied().unwrap_or(0)
    }

    /// One author's lines per extension, in the order they first wrote each
    pub fn author_extensions(&self, author: &str) -> Option<&OrderedTable<String, usize>> {
        self.author_extensions.get(author)
    }

    /// Extensions sorted by descending line count
    pub fn sorted_extensions(&self) -> Vec<(&str, ExtensionStats)> {
        self.extensions
            .sorted_desc_by(|stats| stats.line_count)
            .into_iter()
            .map(|(ext, stats)| (ext.as_str(), *stats))
            .collect()
    }

    /// Authors sorted by descending line count
    pub fn sorted_authors(&self) -> Vec<(&str, usize)> {
        self.authors
            .sorted_desc_by(|lines| *lines)
            .into_iter()
            .map(|(author, lines)| (author.as_str(), *lines))
            .collect()
    }

    /// One author's extensions sorted by that author's descending line count
    pub fn sorted_author_extensions(&self, author: &str) -> Vec<(&str, usize)> {
        self.author_extensions(author)
            .map(|per_ext| {
                per_ext
                    .sorted_desc_by(|lines| *lines)
                    .into_iter()
                    .map(|(ext, lines)| (ext.as_str(), *lines))
                    .collect()
            })
            .unwrap_or_default()
    }
}
