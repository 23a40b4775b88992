//! Output sink for a run's artifacts
//!
//! Every run produces two artifacts under the configured output directory:
//! `output.json` (the full story array) and `output.db` (the relational
//! archive). [`OutputWriter`] creates the directory, then runs the
//! serialization steps sequentially with shared error propagation, so a JSON
//! failure skips the SQLite step.

use crate::Result;
use crate::serialize;
use crate::types::StoryThread;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// JSON document written for every run
const JSON_FILE: &str = "output.json";

/// SQLite archive written for every run
const DB_FILE: &str = "output.db";

/// Writes a run's artifacts under one output directory
pub struct OutputWriter {
    out_dir: PathBuf,
}

impl OutputWriter {
    /// Create a writer rooted at `out_dir`
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    /// Write every artifact for `stories`
    ///
    /// Creates the output directory first (recursive, idempotent), then
    /// writes the JSON document and the SQLite archive in that order.
    pub async fn write_all(&self, stories: &[StoryThread]) -> Result<()> {
        tokio::fs::create_dir_all(&self.out_dir).await?;
        info!(out_dir = %self.out_dir.display(), stories = stories.len(), "writing run artifacts");

        self.write_artifact("json", JSON_FILE, stories).await?;
        self.write_artifact("sqlite", DB_FILE, stories).await?;

        Ok(())
    }

    /// Write one artifact through the strategy selected by name
    async fn write_artifact(
        &self,
        format: &str,
        file_name: &str,
        stories: &[StoryThread],
    ) -> Result<()> {
        let dest = self.out_dir.join(file_name);
        debug!(path = %dest.display(), format, "writing artifact");

        let serializer = serialize::create(format)?;
        serializer.serialize(stories, &dest).await?;

        info!(path = %dest.display(), format, "artifact written");
        Ok(())
    }
}
