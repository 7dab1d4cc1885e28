use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DEFAULT_SESSION_DAYS: i64 = 7;

pub struct Config {
    pub discord_client_id: String,
    pub discord_redirect_url: String,
    pub discord_auth_url: String,

    /// Base URL of the Aztra REST API, without trailing slash.
    pub aztra_api_url: String,
    /// Public URL of this dashboard.
    pub app_url: String,

    /// Days of inactivity after which a session expires.
    pub session_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_client_id: required_var("DISCORD_CLIENT_ID")?,
            discord_redirect_url: required_var("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            aztra_api_url: required_var("AZTRA_API_URL")?
                .trim_end_matches('/')
                .to_string(),
            app_url: required_var("APP_URL")?.trim_end_matches('/').to_string(),
            session_days: parse_session_days(std::env::var("SESSION_DAYS").ok())?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_session_days(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_SESSION_DAYS);
    };

    match value.trim().parse::<i64>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "SESSION_DAYS".to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_days_defaults_to_a_week() {
        assert_eq!(parse_session_days(None).unwrap(), 7);
        assert_eq!(parse_session_days(Some("30".to_string())).unwrap(), 30);
    }

    #[test]
    fn rejects_non_positive_session_days() {
        assert!(matches!(
            parse_session_days(Some("0".to_string())),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
        assert!(parse_session_days(Some("week".to_string())).is_err());
    }
}
