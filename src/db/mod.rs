//! Relational archive for hn-hiring
//!
//! Persists story threads into a three-table SQLite schema:
//! - `Audits` — one row per archived entity, recording capture time and author
//! - `Posts` — one row per story
//! - `Comments` — one row per resolved comment, referencing either its post
//!   (first level) or its parent comment (deeper levels)
//!
//! Writes are append-only; re-archiving a story adds fresh rows.
//!
//! ## Submodules
//!
//! Methods on [`Database`] are organized by concern:
//! - [`schema`] — connection setup and schema creation
//! - [`store`] — story and comment tree persistence

use std::path::{Path, PathBuf};

mod schema;
mod store;

/// Handle to a SQLite archive file
///
/// Holds only the path. Every story is written over its own short-lived
/// connection opened on demand, so the handle itself is cheap to clone and
/// never pins a file descriptor.
#[derive(Clone, Debug)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Create a handle for the archive at `path`
    ///
    /// The file itself is created on first connection.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the underlying archive file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
