use crate::{
    client::{
        api::helper::{encode_segment, get, parse_empty_response, parse_response, post, send_request},
        model::error::ApiError,
    },
    model::invite::InviteViewDto,
};

pub async fn get_invite(invite_id: &str) -> Result<InviteViewDto, ApiError> {
    let url = format!("/api/invites/{}", encode_segment(invite_id));
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn join_invite(invite_id: &str) -> Result<(), ApiError> {
    let url = format!("/api/invites/{}/join", encode_segment(invite_id));
    let response = send_request(post(&url)).await?;
    parse_empty_response(response).await
}
