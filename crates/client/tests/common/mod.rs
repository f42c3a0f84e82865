//! In-process mock of the CLA backend.
//!
//! Binds an axum router to a random local port and records every request it
//! sees. Most paths echo the request back as JSON; a handful of magic path
//! segments trigger specific responses:
//!
//! - `.../fail-500` -> 500 with a plain-text body
//! - `.../taken` -> 409 with `{"message": "..."}`
//! - `.../taken-legacy` -> 409 with `{"Code": "409", "Message": "..."}`
//! - `.../bad-json` -> 200 with a body that is not JSON
//! - `.../a1` -> 200 with `{"a": 1}`
//! - `.../slow` -> 200 after five seconds
//! - `.../icon.svg` -> 200 with SVG text
//! - `/v3/ops/version` -> 200 with build information

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// A request as the mock backend received it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub cookie: Option<String>,
    pub body: Option<Value>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

/// Handle to a running mock backend.
pub struct MockBackend {
    addr: SocketAddr,
    log: Log,
}

impl MockBackend {
    /// Start a backend on a random port.
    pub async fn start() -> Self {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new().fallback(handle).with_state(log.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, log }
    }

    /// Base URL of this backend.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    /// The only request received so far.
    pub fn single(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one request, got {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn handle(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };

    log.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        authorization: header_value(&headers, header::AUTHORIZATION),
        cookie: header_value(&headers, header::COOKIE),
        body: body.clone(),
    });

    let route = uri.path();
    if route.ends_with("/fail-500") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response();
    }
    if route.ends_with("/taken") {
        return json_response(
            StatusCode::CONFLICT,
            json!({ "message": "organization already exists" }),
        );
    }
    if route.ends_with("/taken-legacy") {
        return json_response(
            StatusCode::CONFLICT,
            json!({ "Code": "409", "Message": "organization already exists" }),
        );
    }
    if route.ends_with("/bad-json") {
        return (StatusCode::OK, "not json").into_response();
    }
    if route.ends_with("/a1") {
        return json_response(StatusCode::OK, json!({ "a": 1 }));
    }
    if route.ends_with("/slow") {
        tokio::time::sleep(Duration::from_secs(5)).await;
        return json_response(StatusCode::OK, json!({}));
    }
    if route.ends_with("/icon.svg") {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "image/svg+xml")],
            "<svg/>",
        )
            .into_response();
    }
    if route == "/v3/ops/version" {
        return json_response(
            StatusCode::OK,
            json!({
                "version": "v1.4.2",
                "commit": "0f1e2d3",
                "branch": "main",
                "buildDate": "2020-06-01T00:00:00Z"
            }),
        );
    }

    json_response(
        StatusCode::OK,
        json!({ "method": method.as_str(), "path": path, "body": body }),
    )
}

fn json_response(status: StatusCode, value: Value) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        value.to_string(),
    )
        .into_response()
}
