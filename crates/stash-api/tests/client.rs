use serde_json::{json, Value};
use stash_api::{ApiError, GraphqlTransport, PerformerId, StashClient};
use std::sync::{Arc, Mutex};

/// Replies with a fixed result and remembers every body it was given.
struct CannedTransport {
    reply: Result<Value, u16>,
    seen: Mutex<Vec<Value>>,
}

impl CannedTransport {
    fn ok(reply: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn status(code: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(code),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait::async_trait]
impl GraphqlTransport for CannedTransport {
    async fn post(&self, body: &Value) -> Result<Value, ApiError> {
        self.seen.lock().unwrap().push(body.clone());
        match &self.reply {
            Ok(v) => Ok(v.clone()),
            Err(code) => Err(ApiError::Status(*code)),
        }
    }
}

#[tokio::test]
async fn find_returns_first_match() {
    let transport = CannedTransport::ok(json!({
        "data": { "findPerformers": {
            "count": 2,
            "performers": [
                { "id": "42", "name": "Jane Doe", "__typename": "Performer" },
                { "id": "77", "name": "Jane Doe II", "__typename": "Performer" }
            ]
        }}
    }));
    let client = StashClient::new(transport.clone());
    assert_eq!(
        client.find_performer("Jane Doe").await,
        Some(PerformerId::new("42"))
    );
    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["operationName"], "FindPerformers");
    assert_eq!(seen[0]["variables"]["filter"]["q"], "Jane Doe");
}

#[tokio::test]
async fn find_with_zero_count_is_absent() {
    let transport = CannedTransport::ok(json!({
        "data": { "findPerformers": { "count": 0, "performers": [] } }
    }));
    let client = StashClient::new(transport);
    assert_eq!(client.find_performer("Nobody").await, None);
}

#[tokio::test]
async fn malformed_response_is_treated_as_not_found() {
    let transport = CannedTransport::ok(json!({ "data": { "somethingElse": 1 } }));
    let client = StashClient::new(transport);
    assert_eq!(client.find_performer("Jane Doe").await, None);

    let transport = CannedTransport::ok(json!({ "unexpected": true }));
    let client = StashClient::new(transport);
    assert_eq!(client.find_performer("Jane Doe").await, None);
}

#[tokio::test]
async fn graphql_errors_without_data_are_absent() {
    let transport = CannedTransport::ok(json!({
        "errors": [{ "message": "performer with name 'Jane Doe' already exists" }],
        "data": null
    }));
    let client = StashClient::new(transport);
    assert_eq!(client.create_performer("Jane Doe").await, None);
}

#[tokio::test]
async fn create_returns_new_identifier() {
    let transport = CannedTransport::ok(json!({
        "data": { "performerCreate": { "id": 101, "name": "Amy Lee" } }
    }));
    let client = StashClient::new(transport.clone());
    assert_eq!(
        client.create_performer("Amy Lee").await,
        Some(PerformerId::new("101"))
    );
    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen[0]["operationName"], "PerformerCreate");
    assert_eq!(seen[0]["variables"]["input"]["name"], "Amy Lee");
}

#[tokio::test]
async fn non_success_status_is_absent() {
    let transport = CannedTransport::status(500);
    let client = StashClient::new(transport.clone());
    assert_eq!(client.find_performer("Jane Doe").await, None);
    assert_eq!(client.create_performer("Jane Doe").await, None);
    assert!(!client.autotag_performer(&PerformerId::new("1")).await);
    assert_eq!(transport.seen.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn autotag_reports_acceptance() {
    let transport = CannedTransport::ok(json!({ "data": { "metadataAutoTag": "3" } }));
    let client = StashClient::new(transport.clone());
    assert!(client.autotag_performer(&PerformerId::new("42")).await);
    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen[0]["operationName"], "MetadataAutoTag");
    assert_eq!(seen[0]["variables"]["input"]["performers"], json!(["42"]));
}
