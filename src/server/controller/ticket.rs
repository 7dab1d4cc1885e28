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
        ticket::{TicketDto, TicketSetDto, TicketSetPatchDto, TicketSetPostDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/ticketsets",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Ticket sets of the guild", body = Vec<TicketSetDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_ticket_sets(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let ticket_sets = TicketService::new(state.api(&token))
        .ticket_sets(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(ticket_sets)))
}

/// Creates a ticket set; the bot posts its message to the set's channel.
///
/// # Returns
/// - `201 Created` - Ticket set created
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/ticketsets",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = TicketSetPostDto,
    responses(
        (status = 201, description = "Ticket set created"),
        (status = 400, description = "Invalid ticket set", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_ticket_set(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<TicketSetPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    TicketService::new(state.api(&token))
        .create_ticket_set(guild_id, &payload)
        .await?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/ticketsets/{uuid}",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("uuid" = String, Path, description = "Ticket set id")
    ),
    responses(
        (status = 200, description = "Ticket set", body = TicketSetDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Ticket set not found", body = ErrorDto)
    ),
)]
pub async fn get_ticket_set(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, uuid)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let ticket_set = TicketService::new(state.api(&token))
        .ticket_set(guild_id, &uuid)
        .await?;

    Ok((StatusCode::OK, Json(ticket_set)))
}

#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}/ticketsets/{uuid}",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("uuid" = String, Path, description = "Ticket set id")
    ),
    request_body = TicketSetPatchDto,
    responses(
        (status = 204, description = "Ticket set updated"),
        (status = 400, description = "Nothing to update", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Ticket set not found", body = ErrorDto)
    ),
)]
pub async fn update_ticket_set(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, uuid)): Path<(u64, String)>,
    Json(payload): Json<TicketSetPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    TicketService::new(state.api(&token))
        .update_ticket_set(guild_id, &uuid, &payload)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/ticketsets/{uuid}",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("uuid" = String, Path, description = "Ticket set id")
    ),
    responses(
        (status = 204, description = "Ticket set deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Ticket set not found", body = ErrorDto)
    ),
)]
pub async fn delete_ticket_set(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, uuid)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    TicketService::new(state.api(&token))
        .delete_ticket_set(guild_id, &uuid)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Re-posts the ticket set message.
///
/// # Returns
/// - `204 No Content` - Message re-posted
/// - `429 Too Many Requests` - Resent too recently, retry in a minute
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/ticketsets/{uuid}/resend",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("uuid" = String, Path, description = "Ticket set id")
    ),
    responses(
        (status = 204, description = "Message re-posted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto)
    ),
)]
pub async fn resend_ticket_set(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, uuid)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    TicketService::new(state.api(&token))
        .resend(guild_id, &uuid)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/tickets",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Tickets, newest first", body = Vec<TicketDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let tickets = TicketService::new(state.api(&token)).tickets(guild_id).await?;

    Ok((StatusCode::OK, Json(tickets)))
}
