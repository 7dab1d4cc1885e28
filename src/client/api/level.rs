use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, patch, send_request, serialize_json},
        model::error::ApiError,
    },
    model::level::{ExpPatchDto, MemberExpDto},
};

pub async fn get_exps(guild_id: u64) -> Result<Vec<MemberExpDto>, ApiError> {
    let url = format!("/api/guilds/{}/exps", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Overwrites a member's experience points; `0` resets them.
pub async fn update_exp(guild_id: u64, member_id: u64, exp: u64) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/exps/{}", guild_id, member_id);
    let body = serialize_json(&ExpPatchDto { exp })?;
    let response = send_request(patch(&url).body(body)).await?;
    parse_empty_response(response).await
}
