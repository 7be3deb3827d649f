use super::{percent, OutputWriter};
use crate::analyzer::Analysis;
use crate::formatting::ReportStyle;
use crate::stats::DirectoryNode;
use std::io::{self, Write};

const BRANCH: &str = "├── ";
const LAST: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Percentage of `part` over `whole` with one decimal, e.g. `" 33.3%"`.
///
/// Always `"0.0%"` when `whole` is 0.
pub fn format_percentage(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.0%".to_string();
    }
    format!("{:5.1}%", percent(part, whole))
}

/// Format a count with thousands separators
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn connectors(is_last: bool) -> (&'static str, &'static str) {
    if is_last {
        (LAST, SPACE)
    } else {
        (BRANCH, PIPE)
    }
}

/// Text report in fixed section order: summary, extensions, authors,
/// per-author extensions, directories.
pub struct TerminalWriter<W: Write> {
    writer: W,
    style: Box<dyn ReportStyle>,
    significance_threshold: f64,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, style: Box<dyn ReportStyle>, significance_threshold: f64) -> Self {
        Self {
            writer,
            style,
            significance_threshold,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_summary(&mut self, analysis: &Analysis) -> io::Result<()> {
        let skipped = analysis.skipped_files.len();

        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.style.section("Repository Analysis"))?;
        writeln!(
            self.writer,
            "{BRANCH}Total Lines: {}",
            format_count(analysis.total_lines())
        )?;
        let (files_connector, _) = connectors(skipped == 0);
        writeln!(
            self.writer,
            "{files_connector}Files Analyzed: {}",
            format_count(analysis.files_analyzed)
        )?;
        if skipped > 0 {
            writeln!(
                self.writer,
                "{LAST}{}",
                self.style
                    .notice(&format!("Files Skipped (no blame data): {}", format_count(skipped)))
            )?;
        }
        Ok(())
    }

    fn write_extensions(&mut self, analysis: &Analysis) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.style.section("Breakdown by extension:"))?;
        for (ext, stats) in analysis.stats.sorted_extensions() {
            writeln!(
                self.writer,
                "{:<8}:{:>7} lines in {:>4} files",
                ext,
                format_count(stats.line_count),
                format_count(stats.file_count)
            )?;
        }
        Ok(())
    }

    fn write_authors(&mut self, analysis: &Analysis) -> io::Result<()> {
        let total = analysis.total_lines();

        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.style.section("Breakdown by author:"))?;
        for (author, lines) in analysis.stats.sorted_authors() {
            writeln!(
                self.writer,
                "{:<30}:{:>7} lines ({})",
                author,
                format_count(lines),
                format_percentage(lines, total)
            )?;
        }
        Ok(())
    }

    fn write_contributors(&mut self, analysis: &Analysis) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}",
            self.style
                .section("Detailed extension breakdown for contributors:")
        )?;

        let authors = analysis.stats.sorted_authors();
        let author_count = authors.len();
        for (i, (author, author_total)) in authors.into_iter().enumerate() {
            let (connector, ext_prefix) = connectors(i + 1 == author_count);
            writeln!(self.writer, "{connector}{}", self.style.name(author))?;

            let extensions = analysis.stats.sorted_author_extensions(author);
            let ext_count = extensions.len();
            for (j, (ext, lines)) in extensions.into_iter().enumerate() {
                let (ext_connector, _) = connectors(j + 1 == ext_count);
                let ext_total = analysis.stats.extension_stats(ext).line_count;
                writeln!(
                    self.writer,
                    "{ext_prefix}{ext_connector}{:<8}{:>8} lines | {:>6} of author | {:>6} of extension",
                    ext,
                    format_count(lines),
                    format_percentage(lines, author_total),
                    format_percentage(lines, ext_total)
                )?;
            }
        }
        Ok(())
    }

    fn write_directories(&mut self, analysis: &Analysis) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.style.section("Directory Breakdown:"))?;
        self.write_directory_level(analysis.tree.root(), "", analysis.tree.total_lines())
    }

    /// Depth-first; `total_lines` stays the grand total at every depth.
    fn write_directory_level(
        &mut self,
        node: &DirectoryNode,
        prefix: &str,
        total_lines: usize,
    ) -> io::Result<()> {
        let visible = node.significant_children(total_lines, self.significance_threshold);
        let count = visible.len();

        for (i, (name, child)) in visible.into_iter().enumerate() {
            let (connector, extension) = connectors(i + 1 == count);
            let child_prefix = format!("{prefix}{extension}");
            let has_subdirs = !child
                .significant_children(total_lines, self.significance_threshold)
                .is_empty();
            let (stats_connector, _) = connectors(!has_subdirs);

            writeln!(
                self.writer,
                "{prefix}{connector}{}",
                self.style.name(&format!("{name}/"))
            )?;
            let stats_line = format!(
                "{} lines ({} of total) in {} files",
                format_count(child.line_count()),
                format_percentage(child.line_count(), total_lines),
                format_count(child.file_count())
            );
            writeln!(
                self.writer,
                "{child_prefix}{stats_connector}{}",
                self.style.detail(&stats_line)
            )?;

            self.write_directory_level(child, &child_prefix, total_lines)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_analysis(&mut self, analysis: &Analysis) -> anyhow::Result<()> {
        self.write_summary(analysis)?;
        self.write_extensions(analysis)?;
        self.write_authors(analysis)?;
        self.write_contributors(analysis)?;
        self.write_directories(analysis)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::PlainStyle;
    use crate::git::AuthorshipRecord;
    use crate::stats::DEFAULT_SIGNIFICANCE_THRESHOLD;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn render(analysis: &Analysis) -> String {
        let mut writer = TerminalWriter::new(
            Vec::new(),
            Box::new(PlainStyle),
            DEFAULT_SIGNIFICANCE_THRESHOLD,
        );
        writer.write_analysis(analysis).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    fn record(pairs: &[(&str, usize)]) -> AuthorshipRecord {
        pairs.iter().map(|&(a, n)| (a, n)).collect()
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0, 0), "0.0%");
        assert_eq!(format_percentage(7, 0), "0.0%");
        assert_eq!(format_percentage(1, 3), " 33.3%");
        assert_eq!(format_percentage(10, 15), " 66.7%");
        assert_eq!(format_percentage(5, 5), "100.0%");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_two_file_report() {
        let mut analysis = Analysis::new();
        analysis.add_file("a.py", &record(&[("Alice", 10)]));
        analysis.add_file("sub/b.py", &record(&[("Bob", 5)]));

        let expected = indoc! {"

            Repository Analysis
            ├── Total Lines: 15
            └── Files Analyzed: 2

            Breakdown by extension:
            .py     :     15 lines in    2 files

            Breakdown by author:
            Alice                         :     10 lines ( 66.7%)
            Bob                           :      5 lines ( 33.3%)

            Detailed extension breakdown for contributors:
            ├── Alice
            │   └── .py           10 lines | 100.0% of author |  66.7% of extension
            └── Bob
                └── .py            5 lines | 100.0% of author |  33.3% of extension

            Directory Breakdown:
            └── sub/
                └── 5 lines ( 33.3% of total) in 1 files
        "};

        assert_eq!(render(&analysis), expected);
    }

    #[test]
    fn test_nested_directories_and_pruning() {
        let mut analysis = Analysis::new();
        analysis.add_file("src/core/a.rs", &record(&[("Alice", 600)]));
        analysis.add_file("src/main.rs", &record(&[("Alice", 290)]));
        analysis.add_file("tests/t.rs", &record(&[("Bob", 100)]));
        analysis.add_file("docs/tiny.rs", &record(&[("Bob", 10)]));

        let report = render(&analysis);
        let tree = report
            .split("Directory Breakdown:\n")
            .nth(1)
            .unwrap();

        let expected = indoc! {"
            ├── src/
            │   ├── 890 lines ( 89.0% of total) in 2 files
            │   └── core/
            │       └── 600 lines ( 60.0% of total) in 1 files
            └── tests/
                └── 100 lines ( 10.0% of total) in 1 files
        "};
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_zero_line_analysis_renders_without_directories() {
        let mut analysis = Analysis::new();
        analysis.add_file("pkg/empty.rs", &AuthorshipRecord::new());

        let report = render(&analysis);

        assert!(report.contains("Total Lines: 0"));
        assert!(report.ends_with("Directory Breakdown:\n"));
    }

    #[test]
    fn test_skipped_files_are_reported() {
        let mut analysis = Analysis::new();
        analysis.add_file("a.rs", &record(&[("Alice", 1)]));
        analysis.skip_file("b.rs", "binary");

        let report = render(&analysis);

        assert!(report.contains("├── Files Analyzed: 2"));
        assert!(report.contains("└── Files Skipped (no blame data): 1"));
    }

    #[test]
    fn test_author_ties_keep_encounter_order() {
        let mut analysis = Analysis::new();
        analysis.add_file("x.rs", &record(&[("A", 100)]));
        analysis.add_file("y.rs", &record(&[("C", 50)]));
        analysis.add_file("z.rs", &record(&[("B", 100)]));

        let report = render(&analysis);
        let section = report
            .split("Breakdown by author:\n")
            .nth(1)
            .unwrap();
        let order: Vec<&str> = section
            .lines()
            .take(3)
            .map(|line| line.split(':').next().unwrap().trim())
            .collect();

        assert_eq!(order, vec!["A", "B", "C"]);
    }
}
