use crate::{
    client::{
        api::helper::{
            delete, encode_segment, get, parse_empty_response, parse_response, post, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::autotask::{AutotaskDto, AutotaskPostDto},
};

pub async fn get_autotasks(guild_id: u64) -> Result<Vec<AutotaskDto>, ApiError> {
    let url = format!("/api/guilds/{}/autotasks", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_autotask(guild_id: u64, payload: &AutotaskPostDto) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/autotasks", guild_id);
    let body = serialize_json(payload)?;
    let response = send_request(post(&url).body(body)).await?;
    parse_empty_response(response).await
}

pub async fn delete_autotask(guild_id: u64, uuid: &str) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/autotasks/{}", guild_id, encode_segment(uuid));
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
