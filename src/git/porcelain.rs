//! Parser for `git blame --line-porcelain` output
//!
//! Pure functions only; fetching the text is the job of
//! [`crate::git::SourceControl`].
//!
//! # Line Porcelain Format
//!
//! ```text
//! <40-char-hash> <orig-line> <final-line> [<num-lines>]
//! author <author-name>
//! author-mail <author-email>
//! author-time <unix-timestamp>
//! author-tz <timezone>
//! committer <committer-name>
//! ...
//! summary <first-line-of-commit-message>
//! filename <filename>
//! \t<actual-line-content>
//! ```
//!
//! Unlike plain `--porcelain`, the line variant repeats the full metadata
//! block (including `author`) for every content line, so each line's author
//! can be read straight off its own block.

use crate::stats::OrderedTable;

const COMMIT_HASH_LEN: usize = 40;
const AUTHOR_PREFIX: &str = "author ";

/// Per-file mapping from author name to the number of lines they own.
///
/// Authors are kept in the order they first appear in the blame output.
/// Names are opaque: `"alice"` and `"Alice "` are different authors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorshipRecord {
    authors: OrderedTable<String, usize>,
}

impl AuthorshipRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute one more line to `author`
    pub fn add_line(&mut self, author: &str) {
        *self.authors.entry(author) += 1;
    }

    /// Lines owned by `author` in this file
    pub fn lines_for(&self, author: &str) -> usize {
        self.authors.get(author).copied().unwrap_or(0)
    }

    /// Total attributed lines; equals the file's content line count
    pub fn total_lines(&self) -> usize {
        self.authors.values().sum()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// `(author, lines)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.authors
            .iter()
            .map(|(author, lines)| (author.as_str(), *lines))
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for AuthorshipRecord {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self {
            authors: iter
                .into_iter()
                .map(|(author, lines)| (author.into(), lines))
                .collect(),
        }
    }
}

/// Check if a line is a commit header (starts with 40 lowercase hex characters)
fn is_commit_header(line: &str) -> bool {
    line.len() >= COMMIT_HASH_LEN
        && line
            .bytes()
            .take(COMMIT_HASH_LEN)
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Parse `git blame --line-porcelain` output into an [`AuthorshipRecord`].
///
/// Each commit header opens a metadata block; the first `author ` line after
/// it is credited with one line and closes the block. Author lines with no
/// open block, empty author names and every unrecognised line are ignored,
/// so malformed input can lose lines but never double-count them.
pub fn parse_line_porcelain(blame_output: &str) -> AuthorshipRecord {
    let mut record = AuthorshipRecord::new();
    let mut current_commit: Option<&str> = None;

    for line in blame_output.lines() {
        if let Some(author) = line.strip_prefix(AUTHOR_PREFIX) {
            if current_commit.take().is_some() && !author.is_empty() {
                record.add_line(author);
            }
        } else if is_commit_header(line) {
            current_commit = Some(&line[..COMMIT_HASH_LEN]);
        }
    }

    record
}
