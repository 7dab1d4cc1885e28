use crate::server::{
    data::api::AztraApi,
    error::AppError,
    model::oauth::{TokenRequest, TokenResponse},
};

pub struct OAuthRepository<'a> {
    api: AztraApi<'a>,
}

impl<'a> OAuthRepository<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    /// Trades a Discord authorization code for an Aztra API token.
    ///
    /// `redirect_uri` must be the one the authorization request used.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenResponse, AppError> {
        self.api
            .post(
                "/oauth2/token",
                &TokenRequest {
                    code: code.to_string(),
                    redirect_uri: redirect_uri.to_string(),
                },
            )
            .await
    }
}
