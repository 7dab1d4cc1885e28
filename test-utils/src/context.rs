use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::Value;
use time::Duration;
use tokio::{net::TcpListener, task::JoinHandle};
use tower_sessions::{Expiry, MemoryStore, Session};

use crate::error::TestError;

/// Canned answer of the mock API.
#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

/// A request received by the mock API.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    /// Raw `Authorization` header, e.g. `Bearer abc`.
    pub authorization: Option<String>,
    /// Parsed JSON body, if the request had one.
    pub body: Option<Value>,
}

#[derive(Clone)]
struct MockState {
    responses: Arc<HashMap<(Method, String), MockResponse>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Running mock Aztra API plus a session for the code under test.
///
/// The mock server is aborted when the context is dropped.
pub struct TestContext {
    /// Base URL of the mock API, e.g. `http://127.0.0.1:49152`.
    pub api_url: String,

    /// Session backed by an in-memory store, created on first access.
    pub session: Option<Session>,

    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    server: JoinHandle<()>,
}

impl TestContext {
    pub(crate) async fn start(
        responses: HashMap<(Method, String), MockResponse>,
    ) -> Result<Self, TestError> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            responses: Arc::new(responses),
            requests: requests.clone(),
        };

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = Router::new().fallback(respond).with_state(state);

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            api_url: format!("http://{}", addr),
            session: None,
            requests,
            server,
        })
    }

    /// Gets or creates the test session.
    ///
    /// The session uses the same inactivity expiry as the server.
    pub async fn session(&mut self) -> &Session {
        self.session.get_or_insert_with(|| {
            let store = Arc::new(MemoryStore::default());
            Session::new(None, store, Some(Expiry::OnInactivity(Duration::days(7))))
        })
    }

    /// All requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// The last request received for `method` on `path`.
    pub fn last_request(&self, method: Method, path: &str) -> Option<RecordedRequest> {
        self.requests()
            .into_iter()
            .rev()
            .find(|request| request.method == method && request.path == path)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();

    let recorded = RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    };
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(recorded);
    }

    match state.responses.get(&(method, path)) {
        Some(MockResponse {
            status,
            body: Some(body),
        }) => (*status, Json(body.clone())).into_response(),
        Some(MockResponse { status, body: None }) => status.into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": "Unknown route" })),
        )
            .into_response(),
    }
}
