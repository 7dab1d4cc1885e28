use super::*;

/// Tests requests carry the caller's bearer token.
///
/// Expected: Authorization header `Bearer token-1` recorded by the mock API
#[tokio::test]
async fn sends_bearer_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(Method::GET, "/servers/1/warns", json!([]))
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();

    let api = AztraApi::new(&http, &test.api_url, "token-1");
    let warns: Vec<crate::model::warn::WarnDto> = api.get("/servers/1/warns").await?;

    assert!(warns.is_empty());
    let request = test.last_request(Method::GET, "/servers/1/warns").unwrap();
    assert_eq!(request.authorization.as_deref(), Some("Bearer token-1"));

    Ok(())
}

/// Tests the token exchange is sent without credentials.
///
/// Expected: no Authorization header
#[tokio::test]
async fn anonymous_requests_have_no_authorization() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            Method::POST,
            "/oauth2/token",
            json!({ "access_token": "abc", "scope": "identify guilds" }),
        )
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();

    let api = AztraApi::anonymous(&http, &test.api_url);
    let token = crate::server::data::oauth::OAuthRepository::new(api)
        .exchange_code("code-1", "http://localhost/api/auth/callback")
        .await?;

    assert_eq!(token.access_token, "abc");
    assert!(token.has_scope("guilds"));
    assert!(!token.has_scope("guilds.join"));

    let request = test.last_request(Method::POST, "/oauth2/token").unwrap();
    assert!(request.authorization.is_none());
    assert_eq!(
        request.body,
        Some(json!({ "code": "code-1", "redirect_uri": "http://localhost/api/auth/callback" }))
    );

    Ok(())
}

/// Tests error bodies are surfaced as backend status errors.
///
/// Expected: Err(BackendError::Status { status: 403, message from body })
#[tokio::test]
async fn maps_error_status_and_message() {
    let test = TestBuilder::new()
        .with_response(
            Method::GET,
            "/servers/1/serverdata",
            StatusCode::FORBIDDEN,
            Some(json!({ "message": "Missing permissions" })),
        )
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();

    let api = AztraApi::new(&http, &test.api_url, "token");
    let result: Result<serde_json::Value, AppError> = api.get("/servers/1/serverdata").await;

    match result {
        Err(AppError::BackendErr(BackendError::Status {
            status, message, ..
        })) => {
            assert_eq!(status, 403);
            assert_eq!(message, "Missing permissions");
        }
        other => panic!("expected backend status error, got {:?}", other.map(|_| ())),
    }
}

/// Tests a malformed success body is reported as an invalid body.
///
/// Expected: Err(BackendError::InvalidBody)
#[tokio::test]
async fn rejects_unexpected_body_shape() {
    let test = TestBuilder::new()
        .with_json(Method::GET, "/servers/1/warns", json!({ "not": "a list" }))
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();

    let api = AztraApi::new(&http, &test.api_url, "token");
    let result: Result<Vec<crate::model::warn::WarnDto>, AppError> =
        api.get("/servers/1/warns").await;

    assert!(matches!(
        result,
        Err(AppError::BackendErr(BackendError::InvalidBody { .. }))
    ));
}

/// Tests caller-supplied ids are encoded as a single path segment.
#[test]
fn segment_encodes_separators() {
    assert_eq!(crate::server::data::api::segment("a/../b"), "a%2F..%2Fb");
    assert_eq!(crate::server::data::api::segment("abc-123"), "abc-123");
}

/// Tests bodies serde_json cannot encode are reported before any request is sent.
///
/// Expected: Err(InternalError::SerializeBody) naming the path, no request recorded
#[tokio::test]
async fn unencodable_body_is_an_internal_error() {
    let test = TestBuilder::new().build().await.unwrap();
    let http = reqwest::Client::new();

    // JSON object keys must be strings
    let body: std::collections::HashMap<Vec<u8>, u8> = [(vec![1u8], 1u8)].into_iter().collect();
    let api = AztraApi::new(&http, &test.api_url, "token");
    let result = api.patch("/servers/1/serverdata", &body).await;

    match result {
        Err(AppError::InternalErr(InternalError::SerializeBody { path, .. })) => {
            assert_eq!(path, "/servers/1/serverdata");
        }
        other => panic!("expected serialize error, got {:?}", other),
    }
    assert!(test.requests().is_empty());
}

/// Tests PATCH bodies arrive as JSON.
///
/// Expected: recorded body equals the serialized payload
#[tokio::test]
async fn patch_sends_json_body() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_status(Method::PATCH, "/servers/1/serverdata", StatusCode::NO_CONTENT)
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();

    let api = AztraApi::new(&http, &test.api_url, "token");
    api.patch("/servers/1/serverdata", &json!({ "prefix": "!" }))
        .await?;

    let request = test.last_request(Method::PATCH, "/servers/1/serverdata").unwrap();
    assert_eq!(request.body, Some(json!({ "prefix": "!" })));

    Ok(())
}
