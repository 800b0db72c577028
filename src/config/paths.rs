//! Configuration paths
//!
//! Utilities for resolving configuration file paths.

use std::path::PathBuf;

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    // Check for explicit override
    if let Ok(dir) = std::env::var("SKILLS_API_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    dirs::config_dir()
        .map(|d| d.join("skills-api"))
        .unwrap_or_else(|| PathBuf::from(".skills-api"))
}

/// Get the main configuration file path
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SKILLS_API_CONFIG") {
        return PathBuf::from(path);
    }

    config_dir().join("config.toml")
}
