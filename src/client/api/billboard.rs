use crate::{
    client::{
        api::helper::{
            delete, encode_segment, get, parse_empty_response, parse_response, patch, post,
            send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::billboard::{BillboardDto, BillboardPatchDto, BillboardPostDto},
};

pub async fn get_billboards(guild_id: u64) -> Result<Vec<BillboardDto>, ApiError> {
    let url = format!("/api/guilds/{}/billboards", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_billboard(guild_id: u64, payload: &BillboardPostDto) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/billboards", guild_id);
    let body = serialize_json(payload)?;
    let response = send_request(post(&url).body(body)).await?;
    parse_empty_response(response).await
}

pub async fn update_billboard(
    guild_id: u64,
    uuid: &str,
    payload: &BillboardPatchDto,
) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/billboards/{}", guild_id, encode_segment(uuid));
    let body = serialize_json(payload)?;
    let response = send_request(patch(&url).body(body)).await?;
    parse_empty_response(response).await
}

pub async fn delete_billboard(guild_id: u64, uuid: &str) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/billboards/{}", guild_id, encode_segment(uuid));
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
