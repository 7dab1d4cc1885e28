//! Backend-for-frontend of the dashboard.
//!
//! The browser never talks to the Aztra API directly. It logs in through
//! this server, which keeps the Aztra API token in a server-side session
//! and relays dashboard requests with it. Nothing is persisted: sessions
//! live in memory and every record belongs to the Aztra API.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and OpenAPI docs
//! - **Service Layer** (`service/`) - Guild access, login and invite flows, edit checks
//! - **Data Layer** (`data/`) - Aztra API repositories over a shared `reqwest` client
//! - **Model Layer** (`model/`) - Server-only payloads such as the token exchange
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session slots and the auth guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - HTTP client, OAuth client and URLs shared by handlers
//! - **Startup** (`startup`) - Client and session layer construction
//! - **Router** (`router`) - Route table, Swagger UI and request tracing
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
