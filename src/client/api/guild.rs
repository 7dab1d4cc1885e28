use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::discord::{ChannelDto, GuildDto, ManageableGuildDto, MemberDto, RoleDto},
};

/// Guilds the user may manage, each with its bot invite link.
pub async fn get_guilds() -> Result<Vec<ManageableGuildDto>, ApiError> {
    let request = get("/api/guilds");
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Fetches a guild; a 404 means the bot is absent or lacks permissions.
pub async fn get_guild(guild_id: u64) -> Result<GuildDto, ApiError> {
    let url = format!("/api/guilds/{}", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_members(guild_id: u64) -> Result<Vec<MemberDto>, ApiError> {
    let url = format!("/api/guilds/{}/members", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_roles(guild_id: u64) -> Result<Vec<RoleDto>, ApiError> {
    let url = format!("/api/guilds/{}/roles", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_channels(guild_id: u64) -> Result<Vec<ChannelDto>, ApiError> {
    let url = format!("/api/guilds/{}/channels", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
