//! Demo configuration loading from `roster.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::domain::AppError;

/// Config file consulted when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

/// Root of `roster.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterConfig {
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Edits applied to the clone during `roster demo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Names appended to the clone.
    #[serde(default)]
    pub append: Vec<String>,
    /// Names removed from the clone, every occurrence.
    #[serde(default)]
    pub remove: Vec<String>,
}

impl RosterConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(pos) = self.demo.append.iter().position(|name| name.trim().is_empty()) {
            return Err(AppError::config_error(format!(
                "demo.append[{}] must not be blank",
                pos
            )));
        }
        Ok(())
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<RosterConfig, AppError> {
    let config: RosterConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, `roster.toml` in `dir` is read
/// when present and defaults are used otherwise.
pub fn load_config(path: Option<&Path>, dir: &Path) -> Result<RosterConfig, AppError> {
    let config_path: PathBuf = match path {
        Some(explicit) => {
            if !explicit.is_file() {
                return Err(AppError::ConfigMissing(explicit.to_path_buf()));
            }
            explicit.to_path_buf()
        }
        None => {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                debug!("no {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.display());
                return Ok(RosterConfig::default());
            }
            candidate
        }
    };

    debug!("reading config from {}", config_path.display());
    let content = fs::read_to_string(&config_path)?;
    parse_config_content(&content)
}
