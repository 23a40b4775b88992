//! Recursive comment tree resolution.

use crate::types::Comment;
use futures::FutureExt;
use futures::future::{BoxFuture, join_all};
use tracing::{debug, warn};

use super::HiringService;

impl HiringService {
    /// Resolve one sibling batch of comment ids into owned comments
    ///
    /// Every id in the batch is requested before any response is awaited;
    /// each branch then resolves its own subtree depth-first. `parent` is
    /// the id of the comment the batch hangs off (`None` directly under a
    /// story) and overrides whatever parent id the wire items carry. The
    /// returned order is not guaranteed to match the input ids.
    pub(crate) fn resolve_thread(
        &self,
        ids: Vec<u64>,
        parent: Option<u64>,
    ) -> BoxFuture<'_, Vec<Comment>> {
        async move {
            debug!(batch = ids.len(), ?parent, "resolving comment batch");

            join_all(ids.into_iter().map(|id| self.resolve_comment(id, parent)))
                .await
                .into_iter()
                .flatten()
                .collect()
        }
        .boxed()
    }

    /// Fetch one comment and recursively resolve its children
    ///
    /// Returns `None` when the item is missing or the fetch fails, so the
    /// batch drops this branch without failing its siblings.
    async fn resolve_comment(&self, id: u64, parent: Option<u64>) -> Option<Comment> {
        match self.client.item(id).await {
            Ok(Some(mut item)) => {
                let children = match item.kids.take() {
                    Some(kids) if !kids.is_empty() => self.resolve_thread(kids, Some(id)).await,
                    _ => Vec::new(),
                };

                Some(Comment::from_item(item, parent, children))
            }
            Ok(None) => {
                warn!(id, "comment not found, skipping");
                None
            }
            Err(error) => {
                warn!(id, %error, "failed to fetch comment, skipping");
                None
            }
        }
    }
}
