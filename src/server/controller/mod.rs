//! HTTP handlers of the dashboard API (`/api/...`).
//!
//! Handlers resolve the caller's Aztra API token through `AuthGuard`, call a
//! service or repository and map the result to a response. Mutations answer
//! with an empty body; the client re-fetches what it shows.

pub mod auth;
pub mod autotask;
pub mod billboard;
pub mod guild;
pub mod invite;
pub mod level;
pub mod settings;
pub mod statistics;
pub mod ticket;
pub mod warn;
