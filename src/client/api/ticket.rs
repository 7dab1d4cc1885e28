use crate::{
    client::{
        api::helper::{
            delete, encode_segment, get, parse_empty_response, parse_response, patch, post,
            send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::ticket::{TicketDto, TicketSetDto, TicketSetPatchDto, TicketSetPostDto},
};

pub async fn get_ticket_sets(guild_id: u64) -> Result<Vec<TicketSetDto>, ApiError> {
    let url = format!("/api/guilds/{}/ticketsets", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_ticket_set(guild_id: u64, payload: &TicketSetPostDto) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/ticketsets", guild_id);
    let body = serialize_json(payload)?;
    let response = send_request(post(&url).body(body)).await?;
    parse_empty_response(response).await
}

pub async fn update_ticket_set(
    guild_id: u64,
    uuid: &str,
    payload: &TicketSetPatchDto,
) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/ticketsets/{}", guild_id, encode_segment(uuid));
    let body = serialize_json(payload)?;
    let response = send_request(patch(&url).body(body)).await?;
    parse_empty_response(response).await
}

pub async fn delete_ticket_set(guild_id: u64, uuid: &str) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/ticketsets/{}", guild_id, encode_segment(uuid));
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

/// Reposts the ticket set's message. The Aztra API allows this once a minute
/// and answers `429` otherwise.
pub async fn resend_ticket_set(guild_id: u64, uuid: &str) -> Result<(), ApiError> {
    let url = format!(
        "/api/guilds/{}/ticketsets/{}/resend",
        guild_id,
        encode_segment(uuid)
    );
    let response = send_request(post(&url)).await?;
    parse_empty_response(response).await
}

pub async fn get_tickets(guild_id: u64) -> Result<Vec<TicketDto>, ApiError> {
    let url = format!("/api/guilds/{}/tickets", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
