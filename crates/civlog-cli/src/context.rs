use anyhow::{Context, Result};
use civlog_providers::{LoadedExport, load_export_file_with};
use std::path::Path;

use crate::args::OutputFormat;
use crate::config::Config;

/// Everything a handler needs besides its own arguments
pub struct ExecutionContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl ExecutionContext {
    /// `--format` wins over the config file
    pub fn new(config: Config, format: Option<OutputFormat>) -> Self {
        let format = format.or(config.format).unwrap_or_default();
        Self { config, format }
    }

    pub fn load(&self, file: &Path) -> Result<LoadedExport> {
        load_export_file_with(file, &self.config.columns)
            .with_context(|| format!("Failed to load export {}", file.display()))
    }
}
