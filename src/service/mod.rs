//! Story assembly and recursive comment aggregation
//!
//! [`HiringService`] turns the flat item-by-id API into self-contained
//! [`StoryThread`](crate::types::StoryThread) units. It selects the newest
//! story submissions of a user, then resolves each story's comment tree:
//! sibling comments at the same depth are fetched concurrently, each branch
//! completes depth-first, and missing comments are dropped without failing
//! their siblings.

mod comments;
mod stories;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

use crate::client::HnClient;

/// Account whose submission list carries the monthly hiring threads
pub const HIRING_USER: &str = "whoishiring";

/// Submissions examined per run unless a limit is supplied
const DEFAULT_SUBMISSION_LIMIT: usize = 2;

/// Assembles hiring stories with fully resolved comment threads
#[derive(Clone, Debug)]
pub struct HiringService {
    client: HnClient,
    limit: Option<usize>,
}

impl HiringService {
    /// Create a service examining the default number of submissions
    pub fn new(client: HnClient) -> Self {
        Self::with_limit(client, Some(DEFAULT_SUBMISSION_LIMIT))
    }

    /// Create a service examining up to `limit` submissions, or every
    /// submission when `None`
    pub fn with_limit(client: HnClient, limit: Option<usize>) -> Self {
        Self { client, limit }
    }
}
