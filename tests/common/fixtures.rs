//! Canned HN API payloads and wiremock mounting helpers

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount a user document with the given submission ids
pub async fn mount_user(server: &MockServer, name: &str, submitted: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/user/{}.json", name)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": name,
            "created": 1173923446,
            "karma": 1,
            "submitted": submitted,
        })))
        .mount(server)
        .await;
}

/// Mount the API's not-found shape for a user name
pub async fn mount_missing_user(server: &MockServer, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/user/{}.json", name)))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(server)
        .await;
}

/// Mount an item document under `/item/{id}.json`
pub async fn mount_item(server: &MockServer, id: u64, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/item/{}.json", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount the API's not-found shape for an id (the literal `null` body)
pub async fn mount_missing_item(server: &MockServer, id: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/item/{}.json", id)))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(server)
        .await;
}

/// A hiring story item with the given child comment ids
pub fn story_item(id: u64, kids: Value) -> Value {
    json!({
        "id": id,
        "type": "story",
        "title": "Ask HN: Who is hiring? (August 2026)",
        "score": 312,
        "descendants": 2,
        "kids": kids,
        "time": 1_700_000_000,
        "by": "whoishiring",
    })
}

/// A comment item with the given wire parent and child ids
///
/// The `kids` key is only present when the id list is non-empty, matching
/// how the API shapes leaf comments.
pub fn comment_item(id: u64, parent: u64, kids: &[u64]) -> Value {
    let mut item = json!({
        "id": id,
        "type": "comment",
        "text": format!("Acme Corp | Remote | Rust ({})", id),
        "parent": parent,
        "time": 1_700_000_000 + id,
        "by": format!("commenter{}", id),
    });
    if !kids.is_empty() {
        item["kids"] = json!(kids);
    }
    item
}
