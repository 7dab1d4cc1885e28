use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        discord::{ChannelDto, GuildDto, ManageableGuildDto, MemberDto, RoleDto},
    },
    server::{error::AppError, middleware::auth::AuthGuard, service::guild::GuildService, state::AppState},
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// Lists guilds the user can manage, each with a bot invite link.
///
/// # Returns
/// - `200 OK` - Guilds where the user is owner or has Manage Server
/// - `401 Unauthorized` - Not logged in or token expired
#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Manageable guilds", body = Vec<ManageableGuildDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let guilds = GuildService::new(state.api(&token), &state.discord_client_id)
        .manageable_guilds()
        .await?;

    Ok((StatusCode::OK, Json(guilds)))
}

/// Gets a guild the user manages.
///
/// # Returns
/// - `200 OK` - The guild
/// - `403 Forbidden` - User lacks Manage Server
/// - `404 Not Found` - The bot is not in the guild
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild", body = GuildDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing Manage Server permission", body = ErrorDto),
        (status = 404, description = "Bot is not in the guild", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let guild = GuildService::new(state.api(&token), &state.discord_client_id)
        .guild(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(guild)))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/members",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild members", body = Vec<MemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let members = GuildService::new(state.api(&token), &state.discord_client_id)
        .members(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(members)))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/roles",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild roles", body = Vec<RoleDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let roles = GuildService::new(state.api(&token), &state.discord_client_id)
        .roles(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(roles)))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/channels",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild channels", body = Vec<ChannelDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_channels(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let channels = GuildService::new(state.api(&token), &state.discord_client_id)
        .channels(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(channels)))
}
