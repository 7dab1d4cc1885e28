use crate::{
    client::{
        api::helper::{delete, encode_segment, get, parse_empty_response, parse_response, send_request},
        model::error::ApiError,
    },
    model::warn::WarnDto,
};

pub async fn get_warns(guild_id: u64) -> Result<Vec<WarnDto>, ApiError> {
    let url = format!("/api/guilds/{}/warns", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn delete_warn(guild_id: u64, uuid: &str) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/warns/{}", guild_id, encode_segment(uuid));
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
