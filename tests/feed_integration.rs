//! Integration tests using a mock HTTP server
//!
//! Tests the full end-to-end flow: feed controller → fetch client →
//! HTTP → wire payload → accumulated articles.

use newsstand::feed::{Feed, FeedParams};
use newsstand::{Category, NewsApi};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v2/top-headlines";

fn wire_article(title: &str) -> serde_json::Value {
    json!({
        "source": { "id": null, "name": "Example Wire" },
        "author": "Staff",
        "title": title,
        "description": format!("about {title}"),
        "url": format!("https://example.com/{title}"),
        "urlToImage": null,
        "publishedAt": "2024-03-01T09:00:00Z"
    })
}

fn page_body(titles: &[&str], total_results: u32) -> serde_json::Value {
    json!({
        "status": "ok",
        "totalResults": total_results,
        "articles": titles.iter().map(|t| wire_article(t)).collect::<Vec<_>>()
    })
}

fn feed_against(server: &MockServer, params: FeedParams) -> Feed {
    let api = NewsApi::with_base_url("test-key", server.uri()).unwrap();
    Feed::new(Arc::new(api), params)
}

// ============================================================================
// Pagination flow
// ============================================================================

#[tokio::test]
async fn test_two_page_flow_concatenates_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("category", "business"))
        .and(query_param("apiKey", "test-key"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["a", "b"], 4)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["c", "d"], 4)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = FeedParams::new(Category::Business).with_page_size(2);
    let feed = feed_against(&mock_server, params);

    feed.load_initial().await;
    assert!(feed.has_more().await);

    feed.load_next().await;

    let state = feed.snapshot().await;
    let titles: Vec<_> = state.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c", "d"]);
    assert_eq!(state.page, 2);
    assert_eq!(state.total_results, 4);
    assert!(!state.has_more(), "feed is exhausted after the second page");
}

#[tokio::test]
async fn test_drive_to_exhaustion() {
    let mock_server = MockServer::start().await;

    for (page, titles) in [("1", ["a", "b"]), ("2", ["c", "d"]), ("3", ["e", "f"])] {
        Mock::given(method("GET"))
            .and(path(ENDPOINT))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&titles, 6)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let params = FeedParams::new(Category::General).with_page_size(2);
    let feed = feed_against(&mock_server, params);

    feed.load_initial().await;
    while feed.has_more().await {
        feed.load_next().await;
    }

    let state = feed.snapshot().await;
    assert_eq!(state.articles.len(), 6);
    assert_eq!(state.page, 3);
}

// ============================================================================
// Failure behavior
// ============================================================================

#[tokio::test]
async fn test_malformed_initial_payload_yields_empty_feed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "totalResults": 25
        })))
        .mount(&mock_server)
        .await;

    let feed = feed_against(&mock_server, FeedParams::new(Category::Health));
    feed.load_initial().await;

    let state = feed.snapshot().await;
    assert!(state.articles.is_empty());
    assert_eq!(state.total_results, 0);
    assert!(!state.loading);
    assert!(!state.has_more());
}

#[tokio::test]
async fn test_network_failure_on_initial_yields_empty_feed() {
    // Point the feed at a server that is no longer there
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let api = NewsApi::with_base_url("test-key", uri).unwrap();
    let feed = Feed::new(Arc::new(api), FeedParams::new(Category::General));
    feed.load_initial().await;

    let state = feed.snapshot().await;
    assert!(state.articles.is_empty());
    assert_eq!(state.total_results, 0);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_failed_next_page_skips_forward() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["a", "b"], 6)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["e", "f"], 6)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = FeedParams::new(Category::General).with_page_size(2);
    let feed = feed_against(&mock_server, params);

    feed.load_initial().await;
    feed.load_next().await; // page 2 fails; articles untouched
    assert_eq!(feed.snapshot().await.articles.len(), 2);

    feed.load_next().await; // requests page 3: page 2 is never retried

    let state = feed.snapshot().await;
    let titles: Vec<_> = state.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "e", "f"]);
}

// ============================================================================
// Stale responses
// ============================================================================

#[tokio::test]
async fn test_delayed_response_after_reset_is_discarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&["slow-a", "slow-b"], 2))
                .set_delay(Duration::from_millis(250)),
        )
        .mount(&mock_server)
        .await;

    let feed = feed_against(&mock_server, FeedParams::new(Category::General));

    let in_flight = {
        let feed = feed.clone();
        tokio::spawn(async move { feed.load_initial().await })
    };

    // Re-key the feed while the slow response is still in flight
    tokio::time::sleep(Duration::from_millis(50)).await;
    feed.reset(FeedParams::new(Category::Science)).await;

    in_flight.await.unwrap();

    let state = feed.snapshot().await;
    assert!(
        state.articles.is_empty(),
        "a response for the superseded feed must not land in the new one"
    );
    assert_eq!(feed.params().await.category, Category::Science);
}
