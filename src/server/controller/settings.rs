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
        server_data::{ServerDataDto, ServerDataPatchDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::settings::SettingsService,
        state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/settings",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Bot settings of the guild", body = ServerDataDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Bot is not in the guild", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let settings = SettingsService::new(state.api(&token)).get(guild_id).await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Updates bot settings. Only the fields present in the body change.
///
/// # Returns
/// - `204 No Content` - Settings updated
/// - `400 Bad Request` - Empty patch or blank prefix
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}/settings",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = ServerDataPatchDto,
    responses(
        (status = 204, description = "Settings updated"),
        (status = 400, description = "Nothing to update", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<ServerDataPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    SettingsService::new(state.api(&token))
        .update(guild_id, &payload)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
