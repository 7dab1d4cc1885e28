//! Service layer between the controllers and the Aztra API repositories.
//!
//! Services hold the rules the dashboard adds on top of the API: which
//! guilds a user may manage, how the login and invite flows use the
//! session, and which edits are worth sending at all. Endpoints that are
//! plain relays call their repository directly.

pub mod auth;
pub mod guild;
pub mod invite;
pub mod level;
pub mod settings;
pub mod ticket;

#[cfg(test)]
mod test;
