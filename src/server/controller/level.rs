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
        level::{ExpPatchDto, MemberExpDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::level::LevelService,
        state::AppState,
    },
};

/// Tag for grouping leveling endpoints in OpenAPI documentation
pub static LEVEL_TAG: &str = "level";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/exps",
    tag = LEVEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Exp ranking, highest first", body = Vec<MemberExpDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_exps(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let exps = LevelService::new(state.api(&token)).ranking(guild_id).await?;

    Ok((StatusCode::OK, Json(exps)))
}

/// Sets a member's exp. Sending `0` resets the member's level.
#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}/exps/{member_id}",
    tag = LEVEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("member_id" = u64, Path, description = "Discord user ID")
    ),
    request_body = ExpPatchDto,
    responses(
        (status = 204, description = "Exp updated"),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn update_exp(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, member_id)): Path<(u64, u64)>,
    Json(payload): Json<ExpPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    LevelService::new(state.api(&token))
        .set_exp(guild_id, member_id, payload.exp)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
