//! Aztra API repository layer.
//!
//! The dashboard stores nothing itself: every repository here wraps one
//! group of Aztra REST endpoints and returns the shared DTOs. All of them
//! borrow an [`api::AztraApi`] carrying the caller's bearer token.

pub mod api;
pub mod autotask;
pub mod billboard;
pub mod discord;
pub mod invite;
pub mod level;
pub mod oauth;
pub mod server_data;
pub mod statistics;
pub mod ticket;
pub mod warn;

#[cfg(test)]
mod test;
