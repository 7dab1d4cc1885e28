use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::{
    model::user::UserDto,
    server::{
        data::{api::AztraApi, discord::DiscordRepository, oauth::OAuthRepository},
        error::AppError,
        model::oauth::TokenResponse,
        state::OAuth2Client,
    },
};

/// Discord login through the Aztra API.
///
/// Discord redirects back with an authorization code which the Aztra API
/// trades for a token; the dashboard never sees the client secret.
pub struct AuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    api_url: &'a str,
    redirect_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        api_url: &'a str,
        redirect_url: &'a str,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            api_url,
            redirect_url,
        }
    }

    /// Generates the Discord authorize URL for `scopes`.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - URL to redirect to and the state to store in the session
    pub fn login_url(&self, scopes: &[&str]) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(scopes.iter().map(|scope| Scope::new(scope.to_string())))
            .url()
    }

    /// Exchanges the callback code and loads the user it belongs to.
    ///
    /// # Returns
    /// - `Ok((TokenResponse, UserDto))` - Aztra API token and the logged-in user
    /// - `Err(AppError::BackendErr)` - The API rejected the code or the token
    pub async fn callback(&self, code: &str) -> Result<(TokenResponse, UserDto), AppError> {
        let token = OAuthRepository::new(AztraApi::anonymous(self.http_client, self.api_url))
            .exchange_code(code, self.redirect_url)
            .await?;

        let user = DiscordRepository::new(AztraApi::new(
            self.http_client,
            self.api_url,
            &token.access_token,
        ))
        .current_user()
        .await?;

        Ok((token, user.into()))
    }
}
