//! Thin HTTP client for the Aztra REST API.

use dioxus_logger::tracing;
use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::{backend::BackendError, internal::InternalError, AppError};

/// Handle on the Aztra API for one caller.
///
/// Cheap to copy: it only borrows the shared HTTP client, the base URL and
/// the bearer token.
#[derive(Clone, Copy)]
pub struct AztraApi<'a> {
    http_client: &'a reqwest::Client,
    base_url: &'a str,
    token: Option<&'a str>,
}

impl<'a> AztraApi<'a> {
    /// Creates a handle authenticating with `token`.
    pub fn new(http_client: &'a reqwest::Client, base_url: &'a str, token: &'a str) -> Self {
        Self {
            http_client,
            base_url,
            token: Some(token),
        }
    }

    /// Creates a handle without credentials, for the token exchange.
    pub fn anonymous(http_client: &'a reqwest::Client, base_url: &'a str) -> Self {
        Self {
            http_client,
            base_url,
            token: None,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http_client
            .request(method, format!("{}{}", self.base_url, path));

        match self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Attaches `body` as JSON.
    fn with_body<B: Serialize>(
        builder: RequestBuilder,
        path: &str,
        body: &B,
    ) -> Result<RequestBuilder, AppError> {
        let bytes = encode_body(path, body)?;
        Ok(builder
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(bytes))
    }

    /// Sends the request and turns non-success statuses into [`BackendError::Status`].
    async fn send(&self, builder: RequestBuilder, path: &str) -> Result<Response, AppError> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });
        tracing::debug!("Aztra API answered {} for {}: {}", status, path, message);

        Err(BackendError::Status {
            status: status.as_u16(),
            path: path.to_string(),
            message,
        }
        .into())
    }

    async fn parse<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, AppError> {
        response.json::<T>().await.map_err(|source| {
            BackendError::InvalidBody {
                path: path.to_string(),
                source,
            }
            .into()
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(self.request(Method::GET, path), path).await?;
        Self::parse(response, path).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let builder = Self::with_body(self.request(Method::POST, path), path, body)?;
        let response = self.send(builder, path).await?;
        Self::parse(response, path).await
    }

    /// POST whose response body is ignored.
    pub async fn post_empty<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<(), AppError> {
        let builder = match body {
            Some(body) => Self::with_body(self.request(Method::POST, path), path, body)?,
            None => self.request(Method::POST, path),
        };
        self.send(builder, path).await?;
        Ok(())
    }

    /// PATCH whose response body is ignored.
    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        let builder = Self::with_body(self.request(Method::PATCH, path), path, body)?;
        self.send(builder, path).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.send(self.request(Method::DELETE, path), path).await?;
        Ok(())
    }
}

/// Serializes a request body for `path`.
pub fn encode_body<B: Serialize>(path: &str, body: &B) -> Result<Vec<u8>, AppError> {
    serde_json::to_vec(body).map_err(|source| {
        InternalError::SerializeBody {
            path: path.to_string(),
            source,
        }
        .into()
    })
}

/// Percent-encodes a caller-supplied value for use as one path segment.
pub fn segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Pulls a human readable message out of an Aztra API error body.
fn error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return ["message", "error"]
            .iter()
            .find_map(|key| value.get(*key).and_then(|m| m.as_str()))
            .map(str::to_string);
    }

    let body = body.trim();
    (!body.is_empty() && body.len() <= 200).then(|| body.to_string())
}
