use super::{percent, OutputWriter};
use crate::analyzer::Analysis;
use crate::stats::DirectoryNode;
use serde::Serialize;
use std::io::Write;

/// Serialised form of an [`Analysis`], with every listing already sorted
/// and the directory tree already pruned.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub total_lines: usize,
    pub files_analyzed: usize,
    pub skipped_files: Vec<SkippedEntry<'a>>,
    pub significance_threshold: f64,
    pub extensions: Vec<ExtensionEntry<'a>>,
    pub authors: Vec<AuthorEntry<'a>>,
    pub directories: Vec<DirectoryEntry<'a>>,
}

/// A tracked file left out of every table, with the blame failure
#[derive(Debug, Serialize)]
pub struct SkippedEntry<'a> {
    pub path: &'a str,
    pub reason: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ExtensionEntry<'a> {
    pub extension: &'a str,
    pub file_count: usize,
    pub line_count: usize,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct AuthorEntry<'a> {
    pub author: &'a str,
    pub line_count: usize,
    pub percentage: f64,
    pub extensions: Vec<AuthorExtensionEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct AuthorExtensionEntry<'a> {
    pub extension: &'a str,
    pub line_count: usize,
    pub share_of_author: f64,
    pub share_of_extension: f64,
}

#[derive(Debug, Serialize)]
pub struct DirectoryEntry<'a> {
    pub name: &'a str,
    pub file_count: usize,
    pub line_count: usize,
    pub percentage: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DirectoryEntry<'a>>,
}

impl<'a> JsonReport<'a> {
    pub fn from_analysis(analysis: &'a Analysis, significance_threshold: f64) -> Self {
        let total = analysis.total_lines();
        let stats = &analysis.stats;

        let extensions = stats
            .sorted_extensions()
            .into_iter()
            .map(|(extension, ext)| ExtensionEntry {
                extension,
                file_count: ext.file_count,
                line_count: ext.line_count,
                percentage: percent(ext.line_count, total),
            })
            .collect();

        let authors = stats
            .sorted_authors()
            .into_iter()
            .map(|(author, lines)| AuthorEntry {
                author,
                line_count: lines,
                percentage: percent(lines, total),
                extensions: stats
                    .sorted_author_extensions(author)
                    .into_iter()
                    .map(|(extension, ext_lines)| AuthorExtensionEntry {
                        extension,
                        line_count: ext_lines,
                        share_of_author: percent(ext_lines, lines),
                        share_of_extension: percent(
                            ext_lines,
                            stats.extension_stats(extension).line_count,
                        ),
                    })
                    .collect(),
            })
            .collect();

        Self {
            total_lines: total,
            files_analyzed: analysis.files_analyzed,
            skipped_files: analysis
                .skipped_files
                .iter()
                .map(|skipped| SkippedEntry {
                    path: &skipped.path,
                    reason: &skipped.reason,
                })
                .collect(),
            significance_threshold,
            extensions,
            authors,
            directories: directory_entries(
                analysis.tree.root(),
                analysis.tree.total_lines(),
                significance_threshold,
            ),
        }
    }
}

fn directory_entries(
    node: &DirectoryNode,
    total_lines: usize,
    threshold: f64,
) -> Vec<DirectoryEntry<'_>> {
    node.significant_children(total_lines, threshold)
        .into_iter()
        .map(|(name, child)| DirectoryEntry {
            name,
            file_count: child.file_count(),
            line_count: child.line_count(),
            percentage: percent(child.line_count(), total_lines),
            children: directory_entries(child, total_lines, threshold),
        })
        .collect()
}

pub struct JsonWriter<W: Write> {
    writer: W,
    significance_threshold: f64,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, significance_threshold: f64) -> Self {
        Self {
            writer,
            significance_threshold,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_analysis(&mut self, analysis: &Analysis) -> anyhow::Result<()> {
        let report = JsonReport::from_analysis(analysis, self.significance_threshold);
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::AuthorshipRecord;
    use crate::stats::DEFAULT_SIGNIFICANCE_THRESHOLD;

    fn sample() -> Analysis {
        let mut analysis = Analysis::new();
        let alice: AuthorshipRecord = vec![("Alice", 10)].into_iter().collect();
        let bob: AuthorshipRecord = vec![("Bob", 5)].into_iter().collect();
        analysis.add_file("a.py", &alice);
        analysis.add_file("sub/b.py", &bob);
        analysis.skip_file("sub/logo.py", "binary");
        analysis
    }

    fn render(analysis: &Analysis) -> serde_json::Value {
        let mut writer = JsonWriter::new(Vec::new(), DEFAULT_SIGNIFICANCE_THRESHOLD);
        writer.write_analysis(analysis).unwrap();
        serde_json::from_slice(&writer.into_inner()).unwrap()
    }

    #[test]
    fn test_json_summary_and_tables() {
        let json = render(&sample());

        assert_eq!(json["total_lines"], 15);
        assert_eq!(json["files_analyzed"], 3);
        assert_eq!(json["skipped_files"][0]["path"], "sub/logo.py");
        assert_eq!(json["skipped_files"][0]["reason"], "binary");
        assert_eq!(json["extensions"][0]["extension"], ".py");
        assert_eq!(json["extensions"][0]["file_count"], 2);
        assert_eq!(json["authors"][0]["author"], "Alice");
        assert_eq!(json["authors"][1]["author"], "Bob");
        assert_eq!(json["authors"][1]["extensions"][0]["share_of_author"], 100.0);
    }

    #[test]
    fn test_json_directories_are_pruned_tree() {
        let json = render(&sample());

        let dirs = json["directories"].as_array().unwrap();
        assert_eq!(dirs.len(), 1);
        assert_eq!(dirs[0]["name"], "sub");
        assert_eq!(dirs[0]["line_count"], 5);
        assert!(dirs[0].get("children").is_none());
    }

    #[test]
    fn test_json_empty_analysis() {
        let json = render(&Analysis::new());
        assert_eq!(json["total_lines"], 0);
        assert!(json["directories"].as_array().unwrap().is_empty());
    }
}
