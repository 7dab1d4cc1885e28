//! JSON payloads shaped like Aztra API responses.
//!
//! Factories produce `serde_json::Value`s with sensible defaults so tests
//! only spell out the fields they care about. Snowflake ids are emitted as
//! strings, the way the API sends them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::discord::MemberFactory::new()
//!     .id(42)
//!     .username("aztra")
//!     .nick("Az")
//!     .build();
//!
//! let warns = serde_json::json!([
//!     factory::warn::WarnFactory::new().member(42).count(2).build(),
//! ]);
//! ```
//!
//! # Available Factories
//!
//! - `discord` - Users, members, roles, channels and guilds
//! - `server_data` - Per-guild settings
//! - `warn` - Warn records
//! - `ticket` - Ticket sets and tickets
//! - `invite` - Dashboard invites
//! - `helpers` - Unique id generation

pub mod discord;
pub mod helpers;
pub mod invite;
pub mod server_data;
pub mod ticket;
pub mod warn;

pub use discord::{create_member, create_partial_guild, create_user};
pub use warn::create_warn;
