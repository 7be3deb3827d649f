//! Git collaborators: tracked-file listing and per-file blame retrieval.
//!
//! The index is read through libgit2 (equivalent to `git ls-files`), while
//! blame text comes from `git blame --line-porcelain`, which is the exact
//! format [`crate::git::parse_line_porcelain`] consumes.

use crate::core::{Error, Result};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Source of tracked files and their raw blame text.
///
/// Paths are `/`-separated and relative to the analysis root.
pub trait SourceControl {
    /// Tracked files under the analysis root, in index order
    fn tracked_files(&self) -> Result<Vec<String>>;

    /// Raw `--line-porcelain` blame output for one tracked file
    fn blame(&self, path: &str) -> Result<String>;
}

/// A git work tree, analysed from `root` downwards.
///
/// `root` may be any directory inside the work tree; listed paths are then
/// relative to it, like running `git ls-files` from that directory.
#[derive(Debug, Clone)]
pub struct GitRepository {
    workdir: PathBuf,
    root: PathBuf,
    prefix: String,
}

impl GitRepository {
    /// Discover the repository containing `path`
    pub fn open(path: &Path) -> Result<Self> {
        let root = path.canonicalize()?;
        let repo = Repository::discover(&root).map_err(|e| Error::NotARepository {
            path: root.clone(),
            source: Some(e),
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| Error::NotARepository {
                path: root.clone(),
                source: None,
            })?
            .canonicalize()?;

        let prefix = index_prefix(&workdir, &root);
        log::debug!(
            "Opened repository at {} (analysis prefix: {:?})",
            workdir.display(),
            prefix
        );

        Ok(Self {
            workdir,
            root,
            prefix,
        })
    }

    /// Work tree root of the repository
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Directory the analysis is scoped to
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn open_repo(&self) -> Result<Repository> {
        Ok(Repository::open(&self.workdir)?)
    }
}

impl SourceControl for GitRepository {
    fn tracked_files(&self) -> Result<Vec<String>> {
        let repo = self.open_repo()?;
        let index = repo.index()?;

        let mut files: Vec<String> = index
            .iter()
            .map(|entry| String::from_utf8_lossy(&entry.path).into_owned())
            .filter_map(|path| path.strip_prefix(&self.prefix).map(str::to_string))
            .collect();
        // Unmerged paths appear once per conflict stage
        files.dedup();

        Ok(files)
    }

    fn blame(&self, path: &str) -> Result<String> {
        let output = Command::new("git")
            .args(["blame", "--line-porcelain", "--", path])
            .current_dir(&self.root)
            .output()
            .map_err(|e| Error::blame_unavailable(path, format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::blame_unavailable(path, stderr.trim()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Index-path prefix selecting entries under `root`, e.g. `"src/"`
fn index_prefix(workdir: &Path, root: &Path) -> String {
    root.strip_prefix(workdir)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .map(|relative| {
            let segments: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            format!("{}/", segments.join("/"))
        })
        .unwrap_or_default()
}
