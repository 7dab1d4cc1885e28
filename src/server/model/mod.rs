//! Server-only types that never reach the client.

pub mod oauth;
