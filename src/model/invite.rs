use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::snowflake;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InviteGuildDto {
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A dashboard invite that adds the visitor to a guild.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InviteDto {
    pub id: String,
    pub guild: InviteGuildDto,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub used: bool,
}

impl InviteDto {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Invite plus what the visitor's session allows on it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InviteViewDto {
    pub invite: InviteDto,
    /// Whether the session already holds a `guilds.join` token.
    pub can_join: bool,
    /// Whether this session already joined through this invite.
    pub joined: bool,
}
