// Export modules for library usage
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod git;
pub mod io;
pub mod output;
pub mod stats;

// Re-export commonly used types
pub use crate::analyzer::{analyze_files, analyze_repository, Analysis, SkippedFile};

pub use crate::core::{Error, Result};

pub use crate::git::{
    parse_line_porcelain, AuthorshipRecord, ExtensionFilter, GitRepository, SourceControl,
};

pub use crate::stats::{
    extension_of, DirectoryNode, DirectoryTree, ExtensionStats, StatisticsAggregator,
};

pub use crate::output::{
    create_writer, format_percentage, write_empty_result, OutputFormat, OutputWriter,
};
