#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod autotask;

#[cfg(feature = "web")]
pub mod billboard;

#[cfg(feature = "web")]
pub mod guild;

#[cfg(feature = "web")]
pub mod invite;

#[cfg(feature = "web")]
pub mod level;

#[cfg(feature = "web")]
pub mod settings;

#[cfg(feature = "web")]
pub mod statistics;

#[cfg(feature = "web")]
pub mod ticket;

#[cfg(feature = "web")]
pub mod warn;
