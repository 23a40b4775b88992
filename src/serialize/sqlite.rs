//! SQLite serialization strategy.

use crate::db::Database;
use crate::types::StoryThread;
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, info};

use super::Serializer;

/// Relational SQLite serializer
///
/// Maps the nested story graph onto the flat archive schema through
/// [`Database`]. The input sequence is validated before any connection is
/// opened, so an empty run never creates the database file. Inserts are
/// append-only and a single failed insert aborts the remaining stories.
pub struct SqliteSerializer;

#[async_trait]
impl Serializer for SqliteSerializer {
    async fn serialize(&self, stories: &[StoryThread], dest: &Path) -> Result<()> {
        if stories.is_empty() {
            return Err(Error::Validation(
                "SQLite serialization requires a non-empty array of objects".to_string(),
            ));
        }

        info!(path = %dest.display(), "starting SQLite serialization");

        let db = Database::new(dest);
        db.init_schema().await?;

        for story in stories {
            db.store_story(story).await?;
        }

        debug!(path = %dest.display(), stories = stories.len(), "wrote SQLite archive");
        Ok(())
    }
}
