//! Serialization strategies for archived story threads
//!
//! Every strategy implements the [`Serializer`] trait and is selected by
//! name through [`create`] (or by [`Format`] through [`for_format`]):
//!
//! - [`JsonSerializer`] — pretty-printed JSON document, one array of stories
//! - [`CsvSerializer`] — flat records only, headers from the first record
//! - [`SqliteSerializer`] — normalized relational rows with audit metadata
//!
//! Adding a format means adding a [`Format`] variant, a strategy type, and a
//! match arm in [`for_format`].

mod csv;
mod json;
mod sqlite;


// Re-exports
pub use csv::CsvSerializer;
pub use json::JsonSerializer;
pub use sqlite::SqliteSerializer;

use crate::types::StoryThread;
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::Path;
use std::str::FromStr;

/// Output format selected by name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON document
    Json,
    /// Flat comma-separated records
    Csv,
    /// Relational SQLite archive
    Sqlite,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            "sqlite" => Ok(Format::Sqlite),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Format::Json => "json",
            Format::Csv => "csv",
            Format::Sqlite => "sqlite",
        };
        write!(f, "{}", name)
    }
}

/// Trait for story thread serialization strategies
///
/// Implementations take the full resolved story sequence and write it to
/// `dest` in their format. Strategies validate their input before touching
/// the destination, so a failed call never leaves a partially created file
/// behind (a partially written one is possible for multi-statement formats
/// like SQLite).
///
/// # Examples
///
/// ```no_run
/// use hn_hiring::serialize;
/// use std::path::Path;
///
/// # async fn example(stories: &[hn_hiring::StoryThread]) -> hn_hiring::Result<()> {
/// let serializer = serialize::create("json")?;
/// serializer.serialize(stories, Path::new("output.json")).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Serializer: Send + Sync {
    /// Write `stories` to `dest` in this strategy's format
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input fails the strategy's validation rules (empty input for
    ///   CSV and SQLite, nested or non-uniform records for CSV)
    /// - The destination cannot be written
    async fn serialize(&self, stories: &[StoryThread], dest: &Path) -> Result<()>;
}

/// Return the strategy for an already-parsed format
pub fn for_format(format: Format) -> Box<dyn Serializer> {
    match format {
        Format::Json => Box::new(JsonSerializer),
        Format::Csv => Box::new(CsvSerializer),
        Format::Sqlite => Box::new(SqliteSerializer),
    }
}

/// Select a serialization strategy by name
///
/// Recognized names are `"json"`, `"csv"`, and `"sqlite"`. Any other name
/// fails with [`Error::UnsupportedFormat`] carrying the requested name; the
/// error is logged here before being returned.
pub fn create(name: &str) -> Result<Box<dyn Serializer>> {
    match name.parse::<Format>() {
        Ok(format) => Ok(for_format(format)),
        Err(error) => {
            tracing::error!(%error, "serializer selection failed");
            Err(error)
        }
    }
}
