// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, JclError, Result};
use std::path::{Path, PathBuf};

use super::schema::JclConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["jclint.toml", ".jclint.toml", ".config/jclint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir).or_else(find_user_config_file)
}

/// Find the configuration file starting from a specific directory and
/// walking up to the filesystem root.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find a per-user configuration file.
fn find_user_config_file() -> Option<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    let config_dir = dirs::config_dir()?;
    let user_config = config_dir.join("jclint").join("config.toml");
    user_config.is_file().then_some(user_config)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<JclConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using built-in policy");
            Ok(JclConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<JclConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(JclError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        JclError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<JclConfig> {
    toml::from_str(content).map_err(|e| {
        JclError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}
