//! Test helpers for integration tests
//!
//! Writes fixture tables to a scratch directory and builds the runner
//! configuration pointing at them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use scores_common::AppConfig;
use scores_engine::RawTable;
use tempfile::TempDir;

/// Exported tables written to disk for one test
///
/// The directory is removed when the value is dropped.
pub struct TableFiles {
    dir: TempDir,
}

impl TableFiles {
    /// Write the three source tables into a fresh directory
    pub fn write(config: &RawTable, users: &RawTable, reactions: &RawTable) -> Result<Self> {
        let files = Self {
            dir: tempfile::Builder::new().prefix("reaction-scores-").tempdir()?,
        };
        files.put("config.json", config)?;
        files.put("users.json", users)?;
        files.put("reactions.json", reactions)?;
        Ok(files)
    }

    /// Overwrite one of the tables with raw text
    pub fn put_raw(&self, name: &str, content: &str) -> Result<()> {
        fs::write(self.path(name), content)?;
        Ok(())
    }

    fn put(&self, name: &str, table: &RawTable) -> Result<()> {
        self.put_raw(name, &serde_json::to_string(table)?)
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir().join(name)
    }

    /// Runner configuration reading these files
    pub fn config(&self, channel: &str, output: &str) -> Result<AppConfig> {
        let vars = [
            ("SCORES_CHANNEL_ID", channel.to_string()),
            ("SCORES_CONFIG_TABLE", path_text(&self.path("config.json"))),
            ("SCORES_USERS_TABLE", path_text(&self.path("users.json"))),
            ("SCORES_REACTIONS_TABLE", path_text(&self.path("reactions.json"))),
            ("SCORES_OUTPUT", output.to_string()),
        ];
        let config = AppConfig::from_lookup(|key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.clone())
        })?;
        Ok(config)
    }
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
