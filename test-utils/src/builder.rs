use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::{
    context::{MockResponse, TestContext},
    error::TestError,
};

/// Builder for test contexts backed by a mock Aztra API.
///
/// Each registered route answers with a fixed status and optional JSON body.
/// Requests to unregistered routes get `404 Not Found`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_json(Method::GET, "/discord/users/@me", factory::discord::user(1, "aztra"))
///     .with_status(Method::POST, "/servers/1/ticketsets/a/resend", StatusCode::TOO_MANY_REQUESTS)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    responses: Vec<((Method, String), MockResponse)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
        }
    }

    /// Registers a response for `method` on `path` (query strings are ignored when matching).
    ///
    /// Registering the same route twice keeps the last response.
    pub fn with_response(
        mut self,
        method: Method,
        path: impl Into<String>,
        status: StatusCode,
        body: Option<Value>,
    ) -> Self {
        self.responses
            .push(((method, path.into()), MockResponse { status, body }));
        self
    }

    /// Registers a `200 OK` JSON response.
    pub fn with_json(self, method: Method, path: impl Into<String>, body: Value) -> Self {
        self.with_response(method, path, StatusCode::OK, Some(body))
    }

    /// Registers a bodiless response, e.g. `204 No Content` or an error status.
    pub fn with_status(self, method: Method, path: impl Into<String>, status: StatusCode) -> Self {
        self.with_response(method, path, status, None)
    }

    /// Starts the mock API on an ephemeral local port.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running mock API and a fresh session
    /// - `Err(TestError::Bind)` - No local port could be bound
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::start(self.responses.into_iter().collect()).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
