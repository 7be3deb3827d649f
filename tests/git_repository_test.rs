use blamemap::commands::{run_analysis, AnalyzeConfig};
use blamemap::config::BlamemapConfig;
use blamemap::formatting::FormattingConfig;
use blamemap::{parse_line_porcelain, GitRepository, SourceControl};
use git2::{Repository, Signature};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a repository with `files` written, staged and committed by `author`
fn commit_files(dir: &Path, files: &[(&str, &str)], author: &str) -> Repository {
    let repo = Repository::open(dir).unwrap_or_else(|_| Repository::init(dir).unwrap());

    let mut index = repo.index().unwrap();
    for (path, content) in files {
        let full = dir.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(&full, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    {
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = Signature::now(author, &format!("{}@example.com", author.to_lowercase()))
            .unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, "add files", &tree, &parents)
            .unwrap();
    }
    repo
}

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

#[test]
fn test_open_outside_repository_is_empty_result() {
    let dir = TempDir::new().unwrap();
    let err = GitRepository::open(dir.path()).unwrap_err();
    assert!(err.is_empty_result());
}

#[test]
fn test_tracked_files_lists_index_paths() {
    let dir = TempDir::new().unwrap();
    commit_files(
        dir.path(),
        &[("a.py", "x\n"), ("sub/b.rs", "y\n"), ("README.md", "z\n")],
        "Alice",
    );
    fs::write(dir.path().join("untracked.rs"), "nope\n").unwrap();

    let repo = GitRepository::open(dir.path()).unwrap();
    let mut files = repo.tracked_files().unwrap();
    files.sort();

    assert_eq!(files, vec!["README.md", "a.py", "sub/b.rs"]);
}

#[test]
fn test_tracked_files_relative_to_subdirectory() {
    let dir = TempDir::new().unwrap();
    commit_files(
        dir.path(),
        &[("top.rs", "x\n"), ("src/core/a.rs", "y\n"), ("src/b.rs", "z\n")],
        "Alice",
    );

    let repo = GitRepository::open(&dir.path().join("src")).unwrap();
    let mut files = repo.tracked_files().unwrap();
    files.sort();

    assert_eq!(files, vec!["b.rs", "core/a.rs"]);
    assert_eq!(repo.workdir(), dir.path().canonicalize().unwrap());
}

#[test]
fn test_blame_attributes_lines_to_committers() {
    if !git_available() {
        return;
    }

    let dir = TempDir::new().unwrap();
    commit_files(dir.path(), &[("lib.rs", "fn a() {}\nfn b() {}\n")], "Alice");
    commit_files(
        dir.path(),
        &[("lib.rs", "fn a() {}\nfn b() {}\nfn c() {}\n")],
        "Bob",
    );

    let repo = GitRepository::open(dir.path()).unwrap();
    let record = parse_line_porcelain(&repo.blame("lib.rs").unwrap());

    assert_eq!(record.total_lines(), 3);
    assert_eq!(record.lines_for("Alice"), 2);
    assert_eq!(record.lines_for("Bob"), 1);
}

#[test]
fn test_blame_of_unknown_path_fails() {
    if !git_available() {
        return;
    }

    let dir = TempDir::new().unwrap();
    commit_files(dir.path(), &[("lib.rs", "x\n")], "Alice");

    let repo = GitRepository::open(dir.path()).unwrap();
    assert!(repo.blame("missing.rs").is_err());
}

#[test]
fn test_run_analysis_on_real_repository() {
    if !git_available() {
        return;
    }

    let dir = TempDir::new().unwrap();
    commit_files(
        dir.path(),
        &[("src/main.rs", "a\nb\nc\n"), ("notes.txt", "ignored\n")],
        "Alice",
    );

    let config = AnalyzeConfig::resolve(
        &BlamemapConfig::default(),
        dir.path().to_path_buf(),
        None,
        None,
        None,
        None,
        FormattingConfig::plain(),
    );
    let analysis = run_analysis(&config).unwrap().unwrap();

    assert_eq!(analysis.files_analyzed, 1);
    assert_eq!(analysis.total_lines(), 3);
    assert_eq!(analysis.stats.author_lines("Alice"), 3);
    assert_eq!(analysis.tree.root().find("src").unwrap().line_count(), 3);
}

#[test]
fn test_run_analysis_outside_repository_is_none() {
    let dir = TempDir::new().unwrap();
    let config = AnalyzeConfig::resolve(
        &BlamemapConfig::default(),
        dir.path().to_path_buf(),
        None,
        None,
        None,
        None,
        FormattingConfig::plain(),
    );

    assert!(run_analysis(&config).unwrap().is_none());
}
