/// Extensions analysed when neither the CLI nor `.blamemap.toml` names any
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".java", ".cpp", ".c", ".h", ".hpp", ".cs", ".php", ".rb", ".tsx", ".jsx",
    ".ts", ".rs",
];

/// Keeps tracked paths ending with one of the configured suffixes.
///
/// Matching is a plain suffix test, so `"rs"` would also match `"src/rs"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()))
    }
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn matches(&self, path: &str) -> bool {
        self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }

    /// Filter `paths`, preserving their order
    pub fn apply(&self, paths: Vec<String>) -> Vec<String> {
        paths.into_iter().filter(|path| self.matches(path)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_matches_common_languages() {
        let filter = ExtensionFilter::default();
        assert!(filter.matches("src/main.rs"));
        assert!(filter.matches("web/app.tsx"));
        assert!(!filter.matches("README.md"));
        assert!(!filter.matches("Makefile"));
    }

    #[test]
    fn test_apply_preserves_order() {
        let filter = ExtensionFilter::new([".py", ".rs"]);
        let kept = filter.apply(vec![
            "b.rs".to_string(),
            "notes.txt".to_string(),
            "a.py".to_string(),
        ]);
        assert_eq!(kept, vec!["b.rs", "a.py"]);
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        let filter = ExtensionFilter::new(Vec::<String>::new());
        assert!(!filter.matches("a.py"));
    }
}
