use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, patch, send_request, serialize_json},
        model::error::ApiError,
    },
    model::server_data::{ServerDataDto, ServerDataPatchDto},
};

pub async fn get_settings(guild_id: u64) -> Result<ServerDataDto, ApiError> {
    let url = format!("/api/guilds/{}/settings", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Sends only the fields that changed.
pub async fn update_settings(guild_id: u64, payload: &ServerDataPatchDto) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/settings", guild_id);
    let body = serialize_json(payload)?;
    let request = patch(&url).body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
