use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config;

pub fn package_dir() -> Result<PathBuf> {
    if let Ok(dev_root) = std::env::var("DAYZ_DEV_PLUGIN_ROOT") {
        return Ok(PathBuf::from(dev_root));
    }
    let exe = std::env::current_exe().context("current_exe")?;
    Ok(exe.parent().context("exe has no parent")?.to_path_buf())
}

pub fn claude_config_dir() -> Result<PathBuf> {
    if let Ok(custom) = std::env::var("CLAUDE_CONFIG_DIR") {
        let custom = custom.trim();
        if !custom.is_empty() {
            return Ok(PathBuf::from(custom));
        }
    }
    let home = dirs::home_dir().context("home directory could not be determined")?;
    Ok(home.join(".claude"))
}

pub fn skills_dir(claude_dir: &Path) -> PathBuf {
    claude_dir.join("skills").join(config::PLUGIN_NAME)
}

pub fn marketplace_dir(claude_dir: &Path) -> PathBuf {
    claude_dir
        .join("plugins")
        .join("marketplaces")
        .join(config::PLUGIN_NAME)
}
