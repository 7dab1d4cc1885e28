use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, post, send_request},
        model::error::ApiError,
    },
    model::user::UserDto,
};

/// Retrieves the logged-in user; `Ok(None)` when the session has no login.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let request = get("/api/auth/user");
    let response = send_request(request).await?;

    if response.status() == 401 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}

pub async fn logout() -> Result<(), ApiError> {
    let request = post("/api/auth/logout");
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
