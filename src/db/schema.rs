//! Connection setup and schema creation.

use crate::error::DatabaseError;
use crate::{Error, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};
use std::str::FromStr;

use super::Database;

impl Database {
    /// Open a fresh connection to the archive file
    ///
    /// Creates the file if it does not exist and enables foreign key
    /// enforcement for the session.
    pub(crate) async fn connect(&self) -> Result<SqliteConnection> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", self.path.display()))
            .map_err(|e| {
                Error::Database(DatabaseError::ConnectionFailed(format!(
                    "Failed to parse database path: {}",
                    e
                )))
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        SqliteConnection::connect_with(&options).await.map_err(|e| {
            Error::Database(DatabaseError::ConnectionFailed(format!(
                "Failed to connect to database: {}",
                e
            )))
        })
    }

    /// Create the archive tables if they do not exist yet
    ///
    /// Idempotent; safe to run against an archive that already holds rows.
    pub async fn init_schema(&self) -> Result<()> {
        let mut conn = self.connect().await?;

        let outcome = Self::create_tables(&mut conn).await;

        if let Err(error) = conn.close().await {
            tracing::warn!(%error, "failed to close schema connection");
        }

        if outcome.is_ok() {
            tracing::debug!(path = %self.path.display(), "archive schema ready");
        }
        outcome
    }

    async fn create_tables(conn: &mut SqliteConnection) -> Result<()> {
        // "by" is a reserved word in SQLite and must stay quoted
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS Audits (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                time INTEGER NOT NULL,
                "by" TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::SchemaFailed(format!(
                "Failed to create Audits table: {}",
                e
            )))
        })?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS Posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                score INTEGER NOT NULL,
                hn_id INTEGER NOT NULL,
                descendants INTEGER,
                audit_id INTEGER NOT NULL,
                FOREIGN KEY (audit_id) REFERENCES Audits(id)
            )
            "#,
        )
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::SchemaFailed(format!(
                "Failed to create Posts table: {}",
                e
            )))
        })?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS Comments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                hn_id INTEGER NOT NULL,
                score INTEGER,
                title TEXT,
                type TEXT NOT NULL,
                text TEXT,
                post_parent_id INTEGER,
                comment_parent_id INTEGER,
                audit_id INTEGER NOT NULL,
                FOREIGN KEY (audit_id) REFERENCES Audits(id)
            )
            "#,
        )
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::SchemaFailed(format!(
                "Failed to create Comments table: {}",
                e
            )))
        })?;

        Ok(())
    }
}
