use axum::body::Body;
use axum::http::{Method, Request};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;

use flowhq_server::store::Store;

/// Test context for store-backed tests.
pub struct TestContext {
    #[allow(dead_code)] // tempdir is kept so the backing file outlives the test
    pub tempdir: TempDir,
    pub store: Arc<Store>,
}

/// Sets up a store backed by a fresh temporary directory.
pub fn setup() -> anyhow::Result<TestContext> {
    let tempdir = tempfile::tempdir()?;
    let store = Arc::new(Store::new(tempdir.path().join("data.json")));
    Ok(TestContext { tempdir, store })
}

/// Builds a POST request with a JSON body.
#[allow(dead_code)]
pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Reads a response body to completion and parses it as JSON.
#[allow(dead_code)]
pub async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).expect("response body is not valid JSON")
}
