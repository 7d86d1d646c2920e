//! In-process mock of the banking API for tests

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;

/// Canned response for one `METHOD path` pair
#[derive(Debug, Clone)]
pub struct MockRoute {
    method: String,
    path: String,
    status: u16,
    body: String,
    content_type: &'static str,
}

impl MockRoute {
    pub fn json(method: &str, path: &str, status: u16, body: Value) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body: body.to_string(),
            content_type: "application/json",
        }
    }

    pub fn text(method: &str, path: &str, status: u16, body: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body: body.to_string(),
            content_type: "text/plain",
        }
    }
}

/// What the mock saw for one incoming request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

struct MockState {
    routes: Vec<MockRoute>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockServer {
    base_url: String,
    state: Arc<MockState>,
}

impl MockServer {
    /// Serve `routes` on an ephemeral localhost port. Unknown routes get 404.
    pub async fn start(routes: Vec<MockRoute>) -> Self {
        let state = Arc::new(MockState {
            routes,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server failed");
        });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }

    pub fn hits(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state
        .requests
        .lock()
        .expect("requests lock")
        .push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            authorization: header_value(header::AUTHORIZATION),
            content_type: header_value(header::CONTENT_TYPE),
            body,
        });

    match state
        .routes
        .iter()
        .find(|r| r.method == method.as_str() && r.path == uri.path())
    {
        Some(route) => (
            StatusCode::from_u16(route.status).expect("valid status"),
            [(header::CONTENT_TYPE, route.content_type)],
            route.body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// A base URL nothing is listening on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}/api", addr)
}
