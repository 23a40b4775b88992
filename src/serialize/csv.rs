//! CSV serialization strategy.

use crate::types::StoryThread;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use super::Serializer;

/// Flat-record CSV serializer
///
/// Handles records whose fields are all scalar. Input is validated before
/// any file I/O: the sequence must be non-empty, no field may hold an array
/// or object, and every record must expose the same columns as the first.
/// Headers come from the first record; values containing commas, quotes, or
/// newlines are double-quote escaped.
pub struct CsvSerializer;

impl CsvSerializer {
    /// Render one scalar field, quoting and doubling embedded quotes
    fn render_field(value: &Value) -> String {
        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        };

        if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
            format!("\"{}\"", raw.replace('"', "\"\""))
        } else {
            raw
        }
    }
}

#[async_trait]
impl Serializer for CsvSerializer {
    async fn serialize(&self, stories: &[StoryThread], dest: &Path) -> Result<()> {
        if stories.is_empty() {
            return Err(Error::Validation(
                "CSV serialization requires a non-empty array of objects".to_string(),
            ));
        }

        let records = stories
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<Value>, _>>()?;

        // StoryThread serializes to an object, so the first record is one
        let mut columns: Vec<&String> = Vec::new();
        if let Some(Value::Object(first)) = records.first() {
            columns = first.keys().collect();
        }

        let mut rows = vec![
            columns
                .iter()
                .map(|name| name.as_str())
                .collect::<Vec<_>>()
                .join(","),
        ];

        for record in &records {
            let Value::Object(fields) = record else {
                return Err(Error::Validation(
                    "CSV serialization requires object records".to_string(),
                ));
            };

            for (name, value) in fields {
                if value.is_array() || value.is_object() {
                    return Err(Error::Validation(format!(
                        "CSV serialization supports flat records only; field '{}' is nested",
                        name
                    )));
                }
            }

            if !fields.keys().eq(columns.iter().copied()) {
                return Err(Error::Validation(
                    "CSV serialization requires records with uniform columns".to_string(),
                ));
            }

            let row = columns
                .iter()
                .map(|name| {
                    fields
                        .get(*name)
                        .map(Self::render_field)
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>()
                .join(",");
            rows.push(row);
        }

        tokio::fs::write(dest, rows.join("\n")).await?;

        debug!(path = %dest.display(), records = records.len(), "wrote CSV document");
        Ok(())
    }
}
