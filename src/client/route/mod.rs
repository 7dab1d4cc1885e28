pub mod dashboard;
pub mod guild_select;
pub mod invite;
pub mod login;
pub mod not_found;

pub use guild_select::GuildSelect;
pub use invite::Invite;
pub use login::Login;
pub use not_found::NotFound;
