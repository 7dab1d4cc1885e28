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
        billboard::{BillboardDto, BillboardPatchDto, BillboardPostDto, BILLBOARD_PLACEHOLDERS},
    },
    server::{
        data::billboard::BillboardRepository, error::AppError, middleware::auth::AuthGuard,
        state::AppState,
    },
};

/// Tag for grouping billboard endpoints in OpenAPI documentation
pub static BILLBOARD_TAG: &str = "billboard";

/// A format without any placeholder would never change the channel name.
fn check_format(format: &str) -> Result<(), AppError> {
    if BILLBOARD_PLACEHOLDERS.iter().any(|p| format.contains(p)) {
        return Ok(());
    }

    Err(AppError::BadRequest(
        "The format must contain at least one placeholder.".to_string(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/billboards",
    tag = BILLBOARD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Billboards of the guild", body = Vec<BillboardDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_billboards(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let billboards = BillboardRepository::new(state.api(&token))
        .get_all(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(billboards)))
}

#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/billboards",
    tag = BILLBOARD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = BillboardPostDto,
    responses(
        (status = 201, description = "Billboard created"),
        (status = 400, description = "Format has no placeholder", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_billboard(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<BillboardPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;
    check_format(&payload.format)?;

    BillboardRepository::new(state.api(&token))
        .create(guild_id, &payload)
        .await?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}/billboards/{uuid}",
    tag = BILLBOARD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("uuid" = String, Path, description = "Billboard id")
    ),
    request_body = BillboardPatchDto,
    responses(
        (status = 204, description = "Billboard updated"),
        (status = 400, description = "Format has no placeholder", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Billboard not found", body = ErrorDto)
    ),
)]
pub async fn update_billboard(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, uuid)): Path<(u64, String)>,
    Json(payload): Json<BillboardPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;
    check_format(&payload.format)?;

    BillboardRepository::new(state.api(&token))
        .update(guild_id, &uuid, &payload)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/billboards/{uuid}",
    tag = BILLBOARD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("uuid" = String, Path, description = "Billboard id")
    ),
    responses(
        (status = 204, description = "Billboard deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Billboard not found", body = ErrorDto)
    ),
)]
pub async fn delete_billboard(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, uuid)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    BillboardRepository::new(state.api(&token))
        .delete(guild_id, &uuid)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
