use dioxus_logger::tracing;
use serenity::all::Permissions;

use crate::{
    model::discord::{ChannelDto, GuildDto, ManageableGuildDto, MemberDto, PartialGuildDto, RoleDto},
    server::{
        data::{api::AztraApi, discord::DiscordRepository},
        error::{auth::AuthError, AppError},
    },
};

const BOT_AUTHORIZE_URL: &str = "https://discord.com/oauth2/authorize";

/// Guild access checks and guild data for the dashboard.
pub struct GuildService<'a> {
    api: AztraApi<'a>,
    discord_client_id: &'a str,
}

impl<'a> GuildService<'a> {
    pub fn new(api: AztraApi<'a>, discord_client_id: &'a str) -> Self {
        Self {
            api,
            discord_client_id,
        }
    }

    /// Guilds the user owns or holds Manage Server (or Administrator) in.
    pub async fn manageable_guilds(&self) -> Result<Vec<ManageableGuildDto>, AppError> {
        let guilds = DiscordRepository::new(self.api)
            .current_user_guilds()
            .await?;

        Ok(guilds
            .into_iter()
            .filter(can_manage)
            .map(|guild| ManageableGuildDto {
                bot_invite_url: bot_invite_url(self.discord_client_id, guild.id),
                guild,
            })
            .collect())
    }

    /// Fails with 403 unless the user may manage `guild_id`.
    pub async fn require_manageable(&self, guild_id: u64) -> Result<(), AppError> {
        let guilds = DiscordRepository::new(self.api)
            .current_user_guilds()
            .await?;

        if guilds
            .iter()
            .any(|guild| guild.id == guild_id && can_manage(guild))
        {
            return Ok(());
        }

        tracing::debug!("Denied dashboard access to guild {}", guild_id);
        Err(AuthError::CannotManageGuild(guild_id).into())
    }

    /// Gets a guild after checking access.
    ///
    /// # Returns
    /// - `Ok(GuildDto)` - The guild
    /// - `Err(AuthError::CannotManageGuild)` - User lacks Manage Server (403)
    /// - `Err(BackendError::Status { status: 404, .. })` - Bot is not in the guild
    pub async fn guild(&self, guild_id: u64) -> Result<GuildDto, AppError> {
        self.require_manageable(guild_id).await?;
        DiscordRepository::new(self.api).guild(guild_id).await
    }

    pub async fn members(&self, guild_id: u64) -> Result<Vec<MemberDto>, AppError> {
        DiscordRepository::new(self.api).members(guild_id).await
    }

    pub async fn roles(&self, guild_id: u64) -> Result<Vec<RoleDto>, AppError> {
        DiscordRepository::new(self.api).roles(guild_id).await
    }

    pub async fn channels(&self, guild_id: u64) -> Result<Vec<ChannelDto>, AppError> {
        DiscordRepository::new(self.api).channels(guild_id).await
    }
}

/// Owners always qualify; otherwise the permission bits must grant Manage Server.
pub fn can_manage(guild: &PartialGuildDto) -> bool {
    let permissions = Permissions::from_bits_truncate(guild.permissions);

    guild.owner || permissions.intersects(Permissions::MANAGE_GUILD | Permissions::ADMINISTRATOR)
}

/// Link adding the bot to `guild_id` with the guild preselected.
pub fn bot_invite_url(client_id: &str, guild_id: u64) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", client_id)
        .append_pair("scope", "bot applications.commands")
        .append_pair(
            "permissions",
            &Permissions::ADMINISTRATOR.bits().to_string(),
        )
        .append_pair("guild_id", &guild_id.to_string())
        .append_pair("disable_guild_select", "true")
        .finish();

    format!("{}?{}", BOT_AUTHORIZE_URL, query)
}
