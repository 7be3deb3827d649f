//! CLI command implementations.
//!
//! - **analyze**: blame every tracked file and report line ownership
//! - **init**: write a default `.blamemap.toml`

pub mod analyze;
pub mod init;

pub use analyze::{
    handle_analyze, report_formatting, run_analysis, AnalyzeConfig, NO_TRACKED_FILES_MESSAGE,
};
pub use init::{init_config, init_config_in};
