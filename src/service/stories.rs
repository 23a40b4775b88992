//! Story selection and assembly.

use crate::types::{Item, StoryThread};
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, error};

use super::HiringService;

impl HiringService {
    /// Assemble the newest story submissions of `username` into story
    /// threads with fully resolved comments
    ///
    /// Submission ids are sorted descending (ids grow monotonically, so
    /// newest first) and at most the configured limit is fetched. Non-story
    /// submissions are dropped after the fetch. A missing user aborts the
    /// run; a missing comment only excludes that comment from its thread.
    pub async fn stories_with_comments(&self, username: &str) -> Result<Vec<StoryThread>> {
        let user = self.client.user(username).await?.ok_or_else(|| {
            error!(username, "user not found");
            Error::UserNotFound(username.to_string())
        })?;

        let mut submissions = user.submitted;
        submissions.sort_unstable_by(|a, b| b.cmp(a));
        if let Some(limit) = self.limit {
            submissions.truncate(limit);
        }
        debug!(
            username,
            submissions = submissions.len(),
            "selected newest submissions"
        );

        let items = self.client.items(&submissions).await;

        let mut lookup = HashMap::new();
        for mut story in items.into_iter().filter(Item::is_story) {
            let comments = match story.kids.take() {
                Some(ids) if !ids.is_empty() => self.resolve_thread(ids, None).await,
                _ => Vec::new(),
            };

            let thread = StoryThread::from_story(story, comments);
            lookup.insert(thread.id, thread);
        }

        debug!(stories = lookup.len(), "assembled story threads");
        Ok(lookup.into_values().collect())
    }
}
