use oauth2::{basic::BasicClient, AuthUrl, ClientId, RedirectUrl};
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Builds the HTTP client used for every Aztra API request.
///
/// Redirects are disabled so a misbehaving upstream cannot bounce requests,
/// bearer token included, to another host.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Builds the Discord OAuth2 client from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with the authorize and redirect URLs set
/// - `Err(AppError::ConfigErr(InvalidUrl))` - A configured URL is malformed
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone()).map_err(ConfigError::from)?;
    let redirect_url =
        RedirectUrl::new(config.discord_redirect_url.clone()).map_err(ConfigError::from)?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_auth_uri(auth_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Creates the in-memory session layer.
///
/// Sessions hold the Aztra API token and expire after `SESSION_DAYS` days of
/// inactivity. Cookies are marked secure when the dashboard is served over HTTPS.
pub fn setup_session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            config.session_days,
        )))
}
