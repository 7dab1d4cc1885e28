//! Aztra Dashboard Test Utils
//!
//! Shared testing utilities for the dashboard server. The server keeps no
//! state of its own and relays every request to the Aztra API, so tests run
//! against a mock of that API instead of a database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder registering canned Aztra API responses
//! - **TestContext**: Running mock API plus an in-memory session
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: JSON payloads shaped like Aztra API responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use axum::http::{Method, StatusCode};
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn fetches_warns() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new()
//!         .with_json(Method::GET, "/servers/1/warns", serde_json::json!([factory::create_warn(1, 2)]))
//!         .build()
//!         .await?;
//!
//!     let api_url = test.api_url.clone();
//!     let session = test.session().await;
//!     // Call the code under test with `api_url` and `session`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
