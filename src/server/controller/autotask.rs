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
        autotask::{AutotaskDto, AutotaskPostDto},
    },
    server::{
        data::autotask::AutotaskRepository, error::AppError, middleware::auth::AuthGuard,
        state::AppState,
    },
};

/// Tag for grouping autotask endpoints in OpenAPI documentation
pub static AUTOTASK_TAG: &str = "autotask";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/autotasks",
    tag = AUTOTASK_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Reaction role rules", body = Vec<AutotaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_autotasks(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let autotasks = AutotaskRepository::new(state.api(&token))
        .get_all(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(autotasks)))
}

#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/autotasks",
    tag = AUTOTASK_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = AutotaskPostDto,
    responses(
        (status = 201, description = "Rule created"),
        (status = 400, description = "Invalid rule", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_autotask(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<AutotaskPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    if payload.emoji.trim().is_empty() {
        return Err(AppError::BadRequest("Emoji cannot be empty.".to_string()));
    }

    AutotaskRepository::new(state.api(&token))
        .create(guild_id, &payload)
        .await?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/autotasks/{uuid}",
    tag = AUTOTASK_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("uuid" = String, Path, description = "Rule id")
    ),
    responses(
        (status = 204, description = "Rule deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Rule not found", body = ErrorDto)
    ),
)]
pub async fn delete_autotask(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, uuid)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    AutotaskRepository::new(state.api(&token))
        .delete(guild_id, &uuid)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
