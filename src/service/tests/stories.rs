use crate::client::HnClient;
use crate::service::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_user(server: &MockServer, name: &str, submitted: serde_json::Value) {
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

async fn mock_item(server: &MockServer, id: u64, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/item/{}.json", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_newest_submissions_fetched_first_and_non_stories_dropped() {
    let server = MockServer::start().await;
    mock_user(&server, "whoishiring", json!([5, 3, 9])).await;

    // Highest id first: 9 then 5; 9 is a job and must be filtered out
    mock_item(
        &server,
        9,
        json!({
            "id": 9,
            "type": "job",
            "title": "Acme Corp is hiring a Rust engineer",
            "time": 1173923446,
            "by": "whoishiring"
        }),
    )
    .await;
    mock_item(
        &server,
        5,
        json!({
            "id": 5,
            "type": "story",
            "title": "Ask HN: Who is hiring? (August 2026)",
            "score": 312,
            "time": 1173923446,
            "by": "whoishiring"
        }),
    )
    .await;

    // The third-newest submission sits past the default limit
    Mock::given(method("GET"))
        .and(path("/item/3.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "type": "story"})))
        .expect(0)
        .mount(&server)
        .await;

    let service = HiringService::new(HnClient::with_base_url(server.uri()));
    let stories = service.stories_with_comments("whoishiring").await.unwrap();

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].id, 5);
    assert_eq!(stories[0].title, "Ask HN: Who is hiring? (August 2026)");
    assert!(stories[0].comments.is_empty());
}

#[tokio::test]
async fn test_missing_user_aborts_the_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/ghost.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let service = HiringService::new(HnClient::with_base_url(server.uri()));
    let result = service.stories_with_comments("ghost").await;

    match result.unwrap_err() {
        crate::Error::UserNotFound(name) => assert_eq!(name, "ghost"),
        other => panic!("Expected UserNotFound error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_user_fetch_failure_aborts_the_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/whoishiring.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = HiringService::new(HnClient::with_base_url(server.uri()));
    let result = service.stories_with_comments("whoishiring").await;

    match result.unwrap_err() {
        crate::Error::Network(_) => {}
        other => panic!("Expected Network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unlimited_service_examines_every_submission() {
    let server = MockServer::start().await;
    mock_user(&server, "whoishiring", json!([5, 3, 9])).await;

    for id in [3u64, 5, 9] {
        mock_item(
            &server,
            id,
            json!({
                "id": id,
                "type": "story",
                "title": format!("Ask HN: Who is hiring? ({})", id),
                "score": 1,
                "time": 1173923446,
                "by": "whoishiring"
            }),
        )
        .await;
    }

    let service = HiringService::with_limit(HnClient::with_base_url(server.uri()), None);
    let mut stories = service.stories_with_comments("whoishiring").await.unwrap();

    stories.sort_unstable_by_key(|story| story.id);
    let ids: Vec<u64> = stories.iter().map(|story| story.id).collect();
    assert_eq!(ids, vec![3, 5, 9]);
}

#[tokio::test]
async fn test_story_comments_are_attached() {
    let server = MockServer::start().await;
    mock_user(&server, "whoishiring", json!([5])).await;

    mock_item(
        &server,
        5,
        json!({
            "id": 5,
            "type": "story",
            "title": "Ask HN: Who is hiring? (August 2026)",
            "score": 312,
            "kids": [10],
            "time": 1173923446,
            "by": "whoishiring"
        }),
    )
    .await;
    mock_item(
        &server,
        10,
        json!({
            "id": 10,
            "type": "comment",
            "text": "Acme Corp | Remote | Rust",
            "parent": 5,
            "time": 1173923500,
            "by": "acme"
        }),
    )
    .await;

    let service = HiringService::new(HnClient::with_base_url(server.uri()));
    let stories = service.stories_with_comments("whoishiring").await.unwrap();

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].comments.len(), 1);
    assert_eq!(stories[0].comments[0].id, 10);
    // Root comments hang off the story itself
    assert_eq!(stories[0].comments[0].parent, None);
}
