//! Data transfer objects shared by the dashboard client and the server.
//!
//! Every type here mirrors a JSON record of the Aztra API. The server relays
//! them unchanged and the client renders them, so none of them carry
//! behaviour beyond small display helpers.

pub mod api;
pub mod autotask;
pub mod billboard;
pub mod discord;
pub mod invite;
pub mod level;
pub mod server_data;
pub mod snowflake;
pub mod statistics;
pub mod ticket;
pub mod user;
pub mod warn;
