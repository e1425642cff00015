//! TestWorld pattern for CLI integration tests.
//!
//! Provides:
//! - An isolated temp directory per test
//! - Export files written into it
//! - CLI execution with an isolated config location

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::fixtures::ExportBuilder;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use civlog_testing::{ExportBuilder, TestWorld};
///
/// let world = TestWorld::new()
///     .with_export("voos.csv", &ExportBuilder::twelve_row_scenario());
///
/// let result = world.run(&["show", "voos.csv", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut env_vars = HashMap::new();
        // Never pick up the developer's own config file
        env_vars.insert(
            "CIVLOG_CONFIG".to_string(),
            temp_dir
                .path()
                .join("config.toml")
                .to_string_lossy()
                .to_string(),
        );

        Self { temp_dir, env_vars }
    }

    /// Absolute path of a file inside the world.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Set an environment variable for CLI runs.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write an export file; `.xlt` names get the markup rendering.
    pub fn with_export(self, name: &str, export: &ExportBuilder) -> Self {
        let bytes = if name.to_ascii_lowercase().ends_with(".xlt") {
            export.xlt_bytes()
        } else {
            export.csv_bytes()
        };
        std::fs::write(self.path(name), bytes).expect("Failed to write export");
        self
    }

    /// Write the config file the CLI will read.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.path("config.toml"), toml).expect("Failed to write config");
        self
    }

    /// Apply the world's directory and environment to a command.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run the `civlog` binary with `args` inside the world.
    ///
    /// # Note
    /// Uses `Command::cargo_bin()`, which requires the binary to be built
    /// (cargo test does this for the CLI crate's integration tests).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("civlog")
            .map_err(|e| anyhow::anyhow!("Failed to find civlog binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
