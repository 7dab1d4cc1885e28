use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{discord::DiscordUserDto, snowflake};

/// The logged-in dashboard user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDto {
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub discord_id: u64,
    pub name: String,
    pub tag: String,
    pub avatar_url: String,
}

impl From<DiscordUserDto> for UserDto {
    fn from(user: DiscordUserDto) -> Self {
        Self {
            discord_id: user.id,
            tag: user.tag(),
            avatar_url: user.avatar_url(64),
            name: user.global_name.unwrap_or(user.username),
        }
    }
}
