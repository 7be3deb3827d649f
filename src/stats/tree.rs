//! Directory tree with cumulative line and file counts.
//!
//! Counts are added at every directory on a file's path as the file is
//! inserted, so each node already holds the rollup of everything beneath it
//! and no bottom-up pass is needed.

use super::OrderedTable;

/// Share of total lines a directory must exceed to be displayed
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    file_count: usize,
    line_count: usize,
    children: OrderedTable<String, DirectoryNode>,
}

impl DirectoryNode {
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn children(&self) -> &OrderedTable<String, DirectoryNode> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&DirectoryNode> {
        self.children.get(name)
    }

    /// Look up a nested directory by `/`-separated path
    pub fn find(&self, path: &str) -> Option<&DirectoryNode> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| node.child(segment))
    }

    fn record(&mut self, lines: usize) {
        self.file_count += 1;
        self.line_count += lines;
    }

    fn merge(&mut self, other: &DirectoryNode) {
        self.file_count += other.file_count;
        self.line_count += other.line_count;
        for (name, child) in other.children.iter() {
            self.children.entry(name.as_str()).merge(child);
        }
    }

    /// Children worth displaying against `total_lines`, largest first.
    ///
    /// `total_lines` is the grand total of the whole tree, not of this node.
    pub fn significant_children(
        &self,
        total_lines: usize,
        threshold: f64,
    ) -> Vec<(&str, &DirectoryNode)> {
        self.children
            .sorted_desc_by(|node| node.line_count)
            .into_iter()
            .filter(|(_, node)| is_significant(node.line_count, total_lines, threshold))
            .map(|(name, node)| (name.as_str(), node))
            .collect()
    }
}

/// `lines / total_lines > threshold`, false for an empty total
pub fn is_significant(lines: usize, total_lines: usize, threshold: f64) -> bool {
    total_lines > 0 && (lines as f64 / total_lines as f64) > threshold
}

/// Rooted directory tree. The root stands for the repository itself and
/// holds the grand totals; it is never displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    root: DirectoryNode,
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file's lines to the root and to every directory on its path.
    ///
    /// The final segment is the file name and gets no node, so a file at the
    /// repository root only touches the root.
    pub fn add_file(&mut self, path: &str, lines: usize) {
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        segments.pop();

        let mut node = &mut self.root;
        node.record(lines);
        for segment in segments {
            node = node.children.entry(segment);
            node.record(lines);
        }
    }

    pub fn merge(&mut self, other: &DirectoryTree) {
        self.root.merge(&other.root);
    }

    pub fn root(&self) -> &DirectoryNode {
        &self.root
    }

    pub fn total_lines(&self) -> usize {
        self.root.line_count
    }

    pub fn total_files(&self) -> usize {
        self.root.file_count
    }

    pub fn is_empty(&self) -> bool {
        self.root.file_count == 0
    }
}
