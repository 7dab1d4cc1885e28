use serde::{Deserialize, Serialize};

/// Body of the Aztra API code exchange.
#[derive(Serialize, Debug)]
pub struct TokenRequest {
    pub code: String,
    pub redirect_uri: String,
}

#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    /// Space separated scopes Discord granted.
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scope
            .as_deref()
            .is_some_and(|scopes| scopes.split_whitespace().any(|s| s == scope))
    }
}

/// OAuth scopes requested when logging into the dashboard.
pub const LOGIN_SCOPES: [&str; 2] = ["identify", "guilds"];

/// Extra scope requested when logging in to accept an invite.
pub const INVITE_SCOPE: &str = "guilds.join";
