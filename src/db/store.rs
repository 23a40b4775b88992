//! Story and comment tree persistence.

use crate::error::DatabaseError;
use crate::types::{Comment, StoryThread};
use crate::{Error, Result};
use futures::FutureExt;
use futures::future::BoxFuture;
use sqlx::{Connection, SqliteConnection};

use super::Database;

impl Database {
    /// Persist one story thread
    ///
    /// Opens a dedicated connection, writes the story's audit and post rows,
    /// then the comment tree depth-first, and closes the connection before
    /// returning. Every archived entity gets its own audit row; nothing is
    /// deduplicated against earlier runs.
    pub async fn store_story(&self, story: &StoryThread) -> Result<()> {
        let mut conn = self.connect().await?;

        let outcome = Self::insert_story_tree(&mut conn, story).await;

        if let Err(error) = conn.close().await {
            tracing::warn!(%error, "failed to close story connection");
        }

        outcome
    }

    /// Write a story's audit, post, and comment rows on one connection
    async fn insert_story_tree(conn: &mut SqliteConnection, story: &StoryThread) -> Result<()> {
        let audit_id = Self::insert_audit(conn, story.time, story.by.as_deref()).await?;
        let post_id = Self::insert_post(conn, story, audit_id).await?;

        Self::insert_comments(conn, &story.comments, Some(post_id)).await?;

        tracing::debug!(story_id = story.id, post_id, "story thread archived");
        Ok(())
    }

    /// Insert an audit row, returning its generated id
    ///
    /// Capture time defaults to the current instant and the author to
    /// "unknown" when the source item omitted them.
    async fn insert_audit(
        conn: &mut SqliteConnection,
        time: Option<i64>,
        by: Option<&str>,
    ) -> Result<i64> {
        let time = time.unwrap_or_else(|| chrono::Utc::now().timestamp());
        let by = by.unwrap_or("unknown");

        let result = sqlx::query(r#"INSERT INTO Audits (time, "by") VALUES (?, ?)"#)
            .bind(time)
            .bind(by)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                Error::Database(DatabaseError::InsertFailed(format!(
                    "Failed to insert audit: {}",
                    e
                )))
            })?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a post row, returning its generated id
    async fn insert_post(
        conn: &mut SqliteConnection,
        story: &StoryThread,
        audit_id: i64,
    ) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO Posts (title, score, hn_id, descendants, audit_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&story.title)
        .bind(story.score)
        .bind(story.id as i64)
        .bind(story.descendants)
        .bind(audit_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::InsertFailed(format!(
                "Failed to insert post: {}",
                e
            )))
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Insert one comment level, recursing into each comment's children
    ///
    /// `post_id` is set only for the level hanging directly off the post.
    /// Deeper levels reference their parent comment through its Hacker News
    /// id instead, so exactly one of the two parent columns is populated per
    /// row.
    fn insert_comments<'a>(
        conn: &'a mut SqliteConnection,
        comments: &'a [Comment],
        post_id: Option<i64>,
    ) -> BoxFuture<'a, Result<()>> {
        async move {
            for comment in comments {
                let audit_id =
                    Self::insert_audit(&mut *conn, comment.time, comment.by.as_deref()).await?;
                Self::insert_comment(&mut *conn, comment, post_id, audit_id).await?;
                Self::insert_comments(&mut *conn, &comment.children, None).await?;
            }
            Ok(())
        }
        .boxed()
    }

    /// Insert a single comment row
    async fn insert_comment(
        conn: &mut SqliteConnection,
        comment: &Comment,
        post_id: Option<i64>,
        audit_id: i64,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO Comments (
                hn_id, score, title, type, text,
                post_parent_id, comment_parent_id, audit_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(comment.id as i64)
        .bind(comment.score)
        .bind(&comment.title)
        .bind(&comment.kind)
        .bind(&comment.text)
        .bind(post_id)
        .bind(comment.parent.map(|id| id as i64))
        .bind(audit_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::InsertFailed(format!(
                "Failed to insert comment: {}",
                e
            )))
        })?;

        Ok(())
    }
}
