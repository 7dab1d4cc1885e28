use axum::http::{Method, StatusCode};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    config::Config,
    data::api::AztraApi,
    error::{auth::AuthError, AppError},
    startup,
};

mod auth;
mod guild;
mod invite;
mod settings;

fn test_config(api_url: &str) -> Config {
    Config {
        discord_client_id: "1234".to_string(),
        discord_redirect_url: "http://localhost:8080/api/auth/callback".to_string(),
        discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
        aztra_api_url: api_url.to_string(),
        app_url: "http://localhost:8080".to_string(),
        session_days: 7,
    }
}
