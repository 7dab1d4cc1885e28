use super::*;
use crate::server::{
    model::oauth::{INVITE_SCOPE, LOGIN_SCOPES},
    service::auth::AuthService,
};

/// Tests the authorize URL carries the requested scopes and the CSRF state.
#[tokio::test]
async fn login_url_contains_scopes_and_state() -> Result<(), AppError> {
    let config = test_config("http://127.0.0.1:1");
    let oauth_client = startup::setup_oauth_client(&config)?;
    let http = reqwest::Client::new();
    let service = AuthService::new(
        &http,
        &oauth_client,
        &config.aztra_api_url,
        &config.discord_redirect_url,
    );

    let mut scopes = LOGIN_SCOPES.to_vec();
    scopes.push(INVITE_SCOPE);
    let (url, csrf) = service.login_url(&scopes);

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let get = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    };

    assert!(url.as_str().starts_with("https://discord.com/oauth2/authorize"));
    assert_eq!(get("client_id").as_deref(), Some("1234"));
    assert_eq!(get("scope").as_deref(), Some("identify guilds guilds.join"));
    assert_eq!(get("state").as_deref(), Some(csrf.secret().as_str()));

    Ok(())
}

/// Tests the callback exchanges the code and loads the user with the new token.
///
/// Expected: Ok with token `abc` and the user built from `/discord/users/@me`
#[tokio::test]
async fn callback_exchanges_code_and_fetches_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            Method::POST,
            "/oauth2/token",
            json!({ "access_token": "abc", "scope": "identify guilds" }),
        )
        .with_json(
            Method::GET,
            "/discord/users/@me",
            factory::create_user(42, "aztra"),
        )
        .build()
        .await
        .unwrap();
    let config = test_config(&test.api_url);
    let oauth_client = startup::setup_oauth_client(&config)?;
    let http = reqwest::Client::new();

    let (token, user) = AuthService::new(
        &http,
        &oauth_client,
        &config.aztra_api_url,
        &config.discord_redirect_url,
    )
    .callback("code-1")
    .await?;

    assert_eq!(token.access_token, "abc");
    assert_eq!(user.discord_id, 42);
    assert_eq!(user.tag, "aztra");

    let me = test.last_request(Method::GET, "/discord/users/@me").unwrap();
    assert_eq!(me.authorization.as_deref(), Some("Bearer abc"));

    Ok(())
}

/// Tests a rejected code surfaces the API's status.
///
/// Expected: backend status 400
#[tokio::test]
async fn callback_with_rejected_code_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_response(
            Method::POST,
            "/oauth2/token",
            StatusCode::BAD_REQUEST,
            Some(json!({ "error": "invalid_grant" })),
        )
        .build()
        .await
        .unwrap();
    let config = test_config(&test.api_url);
    let oauth_client = startup::setup_oauth_client(&config)?;
    let http = reqwest::Client::new();

    let result = AuthService::new(
        &http,
        &oauth_client,
        &config.aztra_api_url,
        &config.discord_redirect_url,
    )
    .callback("bad")
    .await;

    assert_eq!(result.err().and_then(|e| e.backend_status()), Some(400));
    assert!(test.last_request(Method::GET, "/discord/users/@me").is_none());

    Ok(())
}
