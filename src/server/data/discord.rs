//! Discord data relayed by the Aztra API (`/discord/...`).

use crate::{
    model::discord::{ChannelDto, DiscordUserDto, GuildDto, MemberDto, PartialGuildDto, RoleDto},
    server::{data::api::AztraApi, error::AppError},
};

pub struct DiscordRepository<'a> {
    api: AztraApi<'a>,
}

impl<'a> DiscordRepository<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    /// The user owning the bearer token.
    pub async fn current_user(&self) -> Result<DiscordUserDto, AppError> {
        self.api.get("/discord/users/@me").await
    }

    /// Every guild the user is in, with the user's permission bits in each.
    pub async fn current_user_guilds(&self) -> Result<Vec<PartialGuildDto>, AppError> {
        self.api.get("/discord/users/@me/guilds").await
    }

    /// Fails with a 404 backend status when the bot is not in the guild.
    pub async fn guild(&self, guild_id: u64) -> Result<GuildDto, AppError> {
        self.api.get(&format!("/discord/guilds/{}", guild_id)).await
    }

    pub async fn members(&self, guild_id: u64) -> Result<Vec<MemberDto>, AppError> {
        self.api
            .get(&format!("/discord/guilds/{}/members", guild_id))
            .await
    }

    pub async fn roles(&self, guild_id: u64) -> Result<Vec<RoleDto>, AppError> {
        self.api
            .get(&format!("/discord/guilds/{}/roles", guild_id))
            .await
    }

    pub async fn channels(&self, guild_id: u64) -> Result<Vec<ChannelDto>, AppError> {
        self.api
            .get(&format!("/discord/guilds/{}/channels", guild_id))
            .await
    }
}
