//! Core types for hn-hiring
//!
//! Two layers live here: the raw wire shapes returned by the Hacker News
//! v0 API ([`Item`], [`User`]) and the resolved entities the pipeline
//! assembles from them ([`Comment`], [`StoryThread`]). Resolved entities own
//! their children outright and carry no raw child-id lists, so a fully
//! assembled thread never references an item that was not fetched.

use serde::{Deserialize, Serialize};

/// Raw Hacker News item as returned by `/v0/item/{id}.json`
///
/// The API omits fields freely, so everything except `id` is optional.
/// Stories, comments, jobs, and polls all share this one shape and are told
/// apart by `kind`.
#[derive(Clone, Debug, Deserialize)]
pub struct Item {
    /// The item's unique id
    pub id: u64,

    /// Username of the item's author
    #[serde(default)]
    pub by: Option<String>,

    /// Total comment count (stories and polls only)
    #[serde(default)]
    pub descendants: Option<i64>,

    /// Ids of the item's direct children, in ranked display order
    #[serde(default)]
    pub kids: Option<Vec<u64>>,

    /// The item's parent id (comments and poll options only)
    #[serde(default)]
    pub parent: Option<u64>,

    /// The item's score
    #[serde(default)]
    pub score: Option<i64>,

    /// Comment, story, or poll text (HTML)
    #[serde(default)]
    pub text: Option<String>,

    /// Creation time, Unix epoch seconds
    #[serde(default)]
    pub time: Option<i64>,

    /// The item's title (stories, jobs, and polls only)
    #[serde(default)]
    pub title: Option<String>,

    /// One of "story", "comment", "job", "poll", or "pollopt"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// The story's URL
    #[serde(default)]
    pub url: Option<String>,
}

impl Item {
    /// Returns true if the item is a story
    pub fn is_story(&self) -> bool {
        self.kind.as_deref() == Some("story")
    }
}

/// Hacker News user profile as returned by `/v0/user/{name}.json`
#[derive(Clone, Debug, Deserialize)]
pub struct User {
    /// The user's unique username, case-sensitive
    pub id: String,

    /// Account creation time, Unix epoch seconds
    #[serde(default)]
    pub created: Option<i64>,

    /// The user's karma
    #[serde(default)]
    pub karma: Option<i64>,

    /// The user's self-description (HTML)
    #[serde(default)]
    pub about: Option<String>,

    /// Ids of the user's submissions, newest first per the API
    #[serde(default)]
    pub submitted: Vec<u64>,
}

/// A fully resolved comment with its subtree
///
/// Built exactly once per fetched item via [`Comment::from_item`]. The
/// `parent` id is supplied by the aggregator (the id of the comment this one
/// was reached through), not taken from the wire item, whose `parent` field
/// may point at the enclosing story instead. `None` means the comment hangs
/// directly off the story.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    /// The comment's Hacker News item id
    pub id: u64,

    /// Username of the comment's author
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub by: Option<String>,

    /// Creation time, Unix epoch seconds
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time: Option<i64>,

    /// Item kind, normally "comment"
    #[serde(rename = "type")]
    pub kind: String,

    /// The comment text (HTML)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,

    /// The comment's score, rarely exposed by the API
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub score: Option<i64>,

    /// Title, unset for ordinary comments
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,

    /// Id of the parent comment, or `None` directly under the story
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent: Option<u64>,

    /// Fully resolved replies, omitted from JSON when empty
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Comment>,
}

impl Comment {
    /// Build a resolved comment from a wire item, the aggregator-supplied
    /// parent id, and its already-resolved children
    pub fn from_item(item: Item, parent: Option<u64>, children: Vec<Comment>) -> Self {
        Self {
            id: item.id,
            by: item.by,
            time: item.time,
            kind: item.kind.unwrap_or_else(|| "comment".to_string()),
            text: item.text,
            score: item.score,
            title: item.title,
            parent,
            children,
        }
    }
}

/// A story together with its fully resolved comment thread
///
/// The unit the pipeline produces and the serializers consume. The raw
/// story's `kids` list is consumed during assembly; only owned `comments`
/// remain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoryThread {
    /// The story's Hacker News item id
    pub id: u64,

    /// The story title, empty when the API omits it
    pub title: String,

    /// The story URL, unset for text posts like hiring threads
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,

    /// The story's score
    pub score: i64,

    /// Username of the story's author
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub by: Option<String>,

    /// Creation time, Unix epoch seconds
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time: Option<i64>,

    /// Total comment count as reported by the API
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub descendants: Option<i64>,

    /// Fully resolved top-level comments, omitted from JSON when empty
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub comments: Vec<Comment>,
}

impl StoryThread {
    /// Build a story unit from a wire item and its resolved comment thread
    pub fn from_story(item: Item, comments: Vec<Comment>) -> Self {
        Self {
            id: item.id,
            title: item.title.unwrap_or_default(),
            url: item.url,
            score: item.score.unwrap_or(0),
            by: item.by,
            time: item.time,
            descendants: item.descendants,
            comments,
        }
    }
}
