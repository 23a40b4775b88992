//! JSON serialization strategy.

use crate::Result;
use crate::types::StoryThread;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;
use tracing::debug;

use super::Serializer;

/// Pretty-printing JSON serializer
///
/// Writes the story sequence as one JSON array indented with four spaces,
/// overwriting any existing content at `dest`. An empty sequence is valid
/// and writes `[]`.
pub struct JsonSerializer;

#[async_trait]
impl Serializer for JsonSerializer {
    async fn serialize(&self, stories: &[StoryThread], dest: &Path) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        stories.serialize(&mut serializer)?;

        tokio::fs::write(dest, buf).await?;

        debug!(path = %dest.display(), stories = stories.len(), "wrote JSON document");
        Ok(())
    }
}
