//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler
//! through Axum's state extraction. Every field is cheap to clone.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};

use crate::server::data::api::AztraApi;

/// OAuth2 client for Discord's authorization endpoint.
///
/// Only the authorize URL is configured: the Aztra API performs the code
/// exchange, so no token endpoint is set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// HTTP client for the Aztra API.
    ///
    /// Configured without redirects so API responses are never followed to
    /// another host.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Base URL of the Aztra REST API.
    pub api_url: String,

    /// Public URL of this dashboard, used for post-login redirects.
    pub app_url: String,

    /// Discord application id, used to build bot invite links.
    pub discord_client_id: String,

    /// Redirect URI registered with Discord, sent along the code exchange.
    pub redirect_url: String,
}

impl AppState {
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        api_url: String,
        app_url: String,
        discord_client_id: String,
        redirect_url: String,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            api_url,
            app_url,
            discord_client_id,
            redirect_url,
        }
    }

    /// Aztra API handle authenticating as the session's user.
    pub fn api<'a>(&'a self, token: &'a str) -> AztraApi<'a> {
        AztraApi::new(&self.http_client, &self.api_url, token)
    }
}
