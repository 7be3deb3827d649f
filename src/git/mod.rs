//! Git-facing collaborators and the blame porcelain parser.

pub mod filter;
pub mod porcelain;
pub mod repository;

pub use filter::{ExtensionFilter, DEFAULT_EXTENSIONS};
pub use porcelain::{parse_line_porcelain, AuthorshipRecord};
pub use repository::{GitRepository, SourceControl};
