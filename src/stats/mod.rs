//! Aggregation core: the four statistics tables and the directory tree.
//!
//! Nothing in here performs I/O or returns errors.

pub mod aggregator;
pub mod table;
pub mod tree;

pub use aggregator::{extension_of, ExtensionStats, StatisticsAggregator};
pub use table::OrderedTable;
pub use tree::{is_significant, DirectoryNode, DirectoryTree, DEFAULT_SIGNIFICANCE_THRESHOLD};
