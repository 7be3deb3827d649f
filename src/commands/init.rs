use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# Blamemap Configuration

[analysis]
# Tracked files ending with one of these suffixes are analysed
extensions = [".py", ".js", ".java", ".cpp", ".c", ".h", ".hpp", ".cs", ".php", ".rb", ".tsx", ".jsx", ".ts", ".rs"]

# Directories holding this share of total lines or less are hidden
significance_threshold = 0.01

[output]
default_format = "terminal"
"#;

/// Write the default config into `dir`, returning its path
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}
