//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use bookdash_types::BookRating;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{DatasetBuilder, sample_records};

/// Isolated working directory for running the `bookdash` binary.
///
/// The binary runs with the temp directory as its CWD, so the default
/// `dataviz.csv` and `book.png` resolve inside it, and `BOOKDASH_CONFIG`
/// points at `config.toml` there so no user config leaks in.
///
/// # Example
/// ```no_run
/// use bookdash_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_dataset().with_image();
/// let result = world.run(&["--format", "json", "dashboard"]).unwrap();
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
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn data_path(&self) -> PathBuf {
        self.root().join("dataviz.csv")
    }

    pub fn image_path(&self) -> PathBuf {
        self.root().join("book.png")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("config.toml")
    }

    pub fn with_dataset(self, dataset: DatasetBuilder) -> Self {
        dataset
            .write_to(&self.data_path())
            .expect("Failed to write dataset");
        self
    }

    pub fn with_records(self, records: impl IntoIterator<Item = BookRating>) -> Self {
        self.with_dataset(DatasetBuilder::new().records(records))
    }

    pub fn with_sample_dataset(self) -> Self {
        self.with_records(sample_records())
    }

    /// Place a placeholder image at the default location.
    pub fn with_image(self) -> Self {
        std::fs::write(self.image_path(), b"\x89PNG\r\n\x1a\n").expect("Failed to write image");
        self
    }

    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.root())
            .env("BOOKDASH_CONFIG", self.config_path())
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("bookdash")
            .map_err(|e| anyhow::anyhow!("Failed to find bookdash binary: {}", e))?;

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
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
