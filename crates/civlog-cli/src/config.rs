use anyhow::{Context, Result};
use civlog_types::ColumnMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::args::OutputFormat;

pub const CONFIG_ENV: &str = "CIVLOG_CONFIG";
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Resolve the config file location based on priority:
/// 1. Explicit `--config` path
/// 2. `CIVLOG_CONFIG` environment variable
/// 3. `<user config dir>/civlog/config.toml`
///
/// Returns the path and whether it was asked for explicitly.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<(PathBuf, bool)> {
    if let Some(path) = explicit {
        return Some((path.to_path_buf(), true));
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        return Some((PathBuf::from(env_path), false));
    }

    dirs::config_dir().map(|dir| (dir.join("civlog").join("config.toml"), false))
}

/// `config.toml`. Every key is optional.
///
/// ```toml
/// page_size = 10
/// format = "json"
///
/// [columns]
/// crew = 6
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rows per visible window while closing pages
    pub page_size: usize,
    /// Output format when `--format` is not given
    pub format: Option<OutputFormat>,
    /// Column layout of the export; unspecified fields keep the SACI default
    pub columns: ColumnMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            format: None,
            columns: ColumnMap::default(),
        }
    }
}

impl Config {
    /// Load from the resolved location. A missing file means defaults, unless
    /// it was named explicitly.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit) {
            Some((path, true)) if !path.exists() => {
                anyhow::bail!("Config file not found: {}", path.display())
            }
            Some((path, _)) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.validate()?;

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        Ok(())
    }
}
