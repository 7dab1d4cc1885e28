//! Request builders and response parsing shared by the dashboard API calls.
//!
//! Every request carries the session cookie; bodies are JSON. Failures come
//! back as [`ApiError`] with the BFF's status so views can react to `401`,
//! `404` and `429` specifically.

use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{client::model::error::ApiError, model::api::ErrorDto};

/// Status reported when the request never reached the server.
const NETWORK_ERROR_STATUS: u64 = 503;

fn is_success(status: u64) -> bool {
    (200..300).contains(&status)
}

/// Builds the error for a non-2xx response, preferring the `ErrorDto` message.
async fn error_from(response: Response, status: u64) -> ApiError {
    let message = match response.text().await {
        Ok(text) => serde_json::from_str::<ErrorDto>(&text)
            .map(|dto| dto.error)
            .unwrap_or(text),
        Err(_) => "Unknown error".to_string(),
    };
    ApiError { status, message }
}

pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;
    if !is_success(status) {
        return Err(error_from(response, status).await);
    }

    response.json::<T>().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Unexpected response from the dashboard server: {}", e),
    })
}

/// For `201`/`204` answers that carry no body.
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;
    if is_success(status) {
        Ok(())
    } else {
        Err(error_from(response, status).await)
    }
}

fn json(request: Request) -> Request {
    request
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

pub fn post(url: &str) -> Request {
    json(Request::post(url))
}

pub fn patch(url: &str) -> Request {
    json(Request::patch(url))
}

pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(RequestCredentials::Include)
}

pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: NETWORK_ERROR_STATUS,
        message: format!("Could not reach the dashboard server: {}", e),
    })
}

/// Percent-encodes a path segment taken from user data.
///
/// Spaces become `%20`: a `+` inside a path is a literal plus.
pub fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn serialize_json<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 400,
        message: format!("Failed to serialize request: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_encode_spaces_and_separators() {
        assert_eq!(encode_segment("abc 1"), "abc%201");
        assert_eq!(encode_segment("a+b"), "a%2Bb");
        assert_eq!(encode_segment("a/../b"), "a%2F..%2Fb");
        assert_eq!(encode_segment("abc-123"), "abc-123");
    }
}
