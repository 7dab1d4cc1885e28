use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, warn::WarnDto},
    server::{
        data::warn::WarnRepository, error::AppError, middleware::auth::AuthGuard,
        state::AppState,
    },
};

/// Tag for grouping warn endpoints in OpenAPI documentation
pub static WARN_TAG: &str = "warn";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/warns",
    tag = WARN_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "All warns of the guild", body = Vec<WarnDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_warns(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let warns = WarnRepository::new(state.api(&token)).get_all(guild_id).await?;

    Ok((StatusCode::OK, Json(warns)))
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/warns/{uuid}",
    tag = WARN_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("uuid" = String, Path, description = "Warn id")
    ),
    responses(
        (status = 204, description = "Warn deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Warn not found", body = ErrorDto)
    ),
)]
pub async fn delete_warn(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, uuid)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    WarnRepository::new(state.api(&token))
        .delete(guild_id, &uuid)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
