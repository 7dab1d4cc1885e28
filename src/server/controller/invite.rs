use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, invite::InviteViewDto},
    server::{error::AppError, service::invite::InviteService, state::AppState},
};

/// Tag for grouping invite endpoints in OpenAPI documentation
pub static INVITE_TAG: &str = "invite";

/// Gets an invite and whether this session can accept it.
///
/// Does not require login.
#[utoipa::path(
    get,
    path = "/api/invites/{invite_id}",
    tag = INVITE_TAG,
    params(
        ("invite_id" = String, Path, description = "Dashboard invite id")
    ),
    responses(
        (status = 200, description = "Invite", body = InviteViewDto),
        (status = 404, description = "Invite not found", body = ErrorDto)
    ),
)]
pub async fn get_invite(
    State(state): State<AppState>,
    session: Session,
    Path(invite_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invite = InviteService::new(&state.http_client, &state.api_url, &session)
        .view(&invite_id)
        .await?;

    Ok((StatusCode::OK, Json(invite)))
}

/// Joins the invite's guild.
///
/// # Returns
/// - `204 No Content` - Joined
/// - `400 Bad Request` - Invite expired or already used
/// - `401 Unauthorized` - Log in through `/api/auth/login/invite/{invite_id}` first
#[utoipa::path(
    post,
    path = "/api/invites/{invite_id}/join",
    tag = INVITE_TAG,
    params(
        ("invite_id" = String, Path, description = "Dashboard invite id")
    ),
    responses(
        (status = 204, description = "Joined the guild"),
        (status = 400, description = "Invite expired or used", body = ErrorDto),
        (status = 401, description = "No invite token in session", body = ErrorDto)
    ),
)]
pub async fn join_invite(
    State(state): State<AppState>,
    session: Session,
    Path(invite_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    InviteService::new(&state.http_client, &state.api_url, &session)
        .join(&invite_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
