//! Integration tests for `ShopLookupClient` and `SearchSession` against a
//! wiremock edge function.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use shopfinder_core::{ApiEndpoint, ProductDetails, SearchHistoryRecord};
use shopfinder_lookup::{
    HistoryError, HistorySink, NoopHistorySink, ResultSource, SearchOutcome, SearchSession,
    ShopLookupClient,
};
use tokio::sync::mpsc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct ChannelSink(mpsc::UnboundedSender<SearchHistoryRecord>);

#[async_trait]
impl HistorySink for ChannelSink {
    async fn save(&self, record: &SearchHistoryRecord) -> Result<(), HistoryError> {
        self.0
            .send(record.clone())
            .map_err(|e| HistoryError::Unavailable(e.to_string()))
    }
}

struct FailingSink;

#[async_trait]
impl HistorySink for FailingSink {
    async fn save(&self, _record: &SearchHistoryRecord) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("database offline".to_string()))
    }
}

fn nike() -> ProductDetails {
    ProductDetails {
        name: "Air Max 270".to_string(),
        brand: Some("Nike".to_string()),
        category: Some("Shoes".to_string()),
        ..ProductDetails::default()
    }
}

fn client_for(url: &str, sink: Arc<dyn HistorySink>) -> ShopLookupClient {
    let endpoint = ApiEndpoint {
        url: url.to_string(),
        key: "anon-key".to_string(),
    };
    ShopLookupClient::new(&endpoint, 5, "shopfinder-test/0.1", sink)
        .expect("client construction should not fail")
}

fn two_shops() -> serde_json::Value {
    json!({
        "shops": [
            { "name": "Runner's Corner", "phone": "(555) 123-4567", "address": "123 Main Street" },
            { "name": "Local Store", "phone": "Contact for details", "address": "" }
        ]
    })
}

#[tokio::test]
async fn live_lookup_posts_query_and_records_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/search-shops"))
        .and(header("authorization", "Bearer anon-key"))
        .and(body_json(json!({
            "query": "Nike Air Max 270 Shoes stores near Austin, TX",
            "location": "Austin, TX"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_shops()))
        .expect(1)
        .mount(&server)
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let client = client_for(&server.uri(), Arc::new(ChannelSink(tx)));

    let lookup = client.lookup(&nike(), "Austin, TX").await;
    assert_eq!(lookup.source, ResultSource::Live);
    assert_eq!(lookup.shops.len(), 2);
    assert_eq!(lookup.shops[0].phone, "(555) 123-4567");

    let record = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("history save should run")
        .expect("one record");
    assert_eq!(record.product_name, "Air Max 270");
    assert_eq!(record.product_brand.as_deref(), Some("Nike"));
    assert_eq!(record.product_category.as_deref(), Some("Shoes"));
    assert_eq!(record.location, "Austin, TX");
    assert_eq!(record.results_count, 2);

    client.flush_history(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err(), "exactly one record per lookup");
}

#[tokio::test]
async fn failing_history_sink_does_not_change_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/search-shops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_shops()))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Arc::new(FailingSink));
    let lookup = client.lookup(&nike(), "Austin, TX").await;
    client.flush_history(Duration::from_secs(1)).await;

    assert_eq!(lookup.source, ResultSource::Live);
    assert_eq!(lookup.shops.len(), 2);
}

#[tokio::test]
async fn server_error_falls_back_to_mock_shops() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/search-shops"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let client = client_for(&server.uri(), Arc::new(ChannelSink(tx)));
    let lookup = client.lookup(&nike(), "Denver").await;

    assert_eq!(lookup.source, ResultSource::Fallback);
    assert_eq!(lookup.shops.len(), 5);
    assert!(lookup
        .shops
        .iter()
        .all(|s| s.address.as_deref().is_some_and(|a| a.ends_with("Main Street, Denver"))));

    client.flush_history(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err(), "fallback results are not recorded");
}

#[tokio::test]
async fn undecodable_body_falls_back_to_mock_shops() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/search-shops"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Arc::new(NoopHistorySink));
    let lookup = client.lookup(&nike(), "Denver").await;
    assert_eq!(lookup.source, ResultSource::Fallback);
    assert_eq!(lookup.shops.len(), 5);
}

#[tokio::test]
async fn unreachable_server_falls_back_to_mock_shops() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = client_for(&uri, Arc::new(NoopHistorySink));
    let shops = client.find_nearby_shops(&nike(), "Boise").await;
    assert_eq!(shops.len(), 5);
}

#[tokio::test]
async fn degraded_edge_response_returns_empty_live_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/search-shops"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "error": "Search service not configured", "shops": [] })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Arc::new(NoopHistorySink));
    let lookup = client.lookup(&nike(), "Austin, TX").await;
    assert_eq!(lookup.source, ResultSource::Live);
    assert!(lookup.shops.is_empty());
}

#[tokio::test]
async fn newer_search_supersedes_in_flight_one() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/search-shops"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(two_shops())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server.uri(), Arc::new(NoopHistorySink)));
    let session = Arc::new(SearchSession::new(client));

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.search(&nike(), "Austin, TX").await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    let second = session.search(&nike(), "Dallas, TX").await;
    let first = first.await.expect("first search task should not panic");

    assert_eq!(first, SearchOutcome::Superseded);
    match second {
        SearchOutcome::Completed(lookup) => {
            assert_eq!(lookup.source, ResultSource::Live);
            assert_eq!(lookup.shops.len(), 2);
        }
        SearchOutcome::Superseded => panic!("latest search must complete"),
    }
}
