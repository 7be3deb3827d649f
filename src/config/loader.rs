use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::BlamemapConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".blamemap.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<BlamemapConfig> {
    let config = toml::from_str::<BlamemapConfig>(contents).map_err(|e| {
        Error::configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;

    config
        .validate()
        .map_err(|e| Error::configuration(format!("Invalid {}: {}", CONFIG_FILE_NAME, e)))?;

    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BlamemapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Using settings from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}; falling back to built-in defaults", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Ignoring unreadable {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest valid `.blamemap.toml` at or above `start`, or the defaults
pub fn load_config_from(start: &Path) -> BlamemapConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No {} within {} levels of {}; using built-in defaults",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH,
                start.display()
            );
            BlamemapConfig::default()
        })
}

pub fn load_config() -> BlamemapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Cannot resolve working directory ({}); using built-in defaults",
                e
            );
            BlamemapConfig::default()
        }
    }
}
