use super::*;
use crate::server::{middleware::session::InviteSession, service::invite::InviteService};

/// Tests viewing an invite reports what the session can do.
///
/// Expected: can_join false without an invite token, true after storing one
#[tokio::test]
async fn view_reports_join_state() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_json(
            Method::GET,
            "/invites/abc",
            factory::invite::create_invite("abc", 4, None),
        )
        .build()
        .await
        .unwrap();
    let api_url = test.api_url.clone();
    let http = reqwest::Client::new();
    let session = test.session().await;
    let service = InviteService::new(&http, &api_url, session);

    let view = service.view("abc").await?;
    assert!(!view.can_join);
    assert!(!view.joined);

    InviteSession::new(session)
        .set_token("join-token".to_string())
        .await?;
    let view = service.view("abc").await?;
    assert!(view.can_join);

    Ok(())
}

/// Tests joining needs the invite token.
///
/// Expected: Err(AuthError::InviteTokenMissing), no join request sent
#[tokio::test]
async fn join_without_token_is_unauthorized() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let api_url = test.api_url.clone();
    let http = reqwest::Client::new();
    let session = test.session().await;

    let result = InviteService::new(&http, &api_url, session).join("abc").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InviteTokenMissing))
    ));

    Ok(())
}

/// Tests joining posts once and remembers the invite.
///
/// Expected: one join request, second call short-circuits
#[tokio::test]
async fn join_marks_invite_joined() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_json(
            Method::GET,
            "/invites/abc",
            factory::invite::create_invite("abc", 4, None),
        )
        .with_status(Method::POST, "/invites/abc/join", StatusCode::NO_CONTENT)
        .build()
        .await
        .unwrap();
    let api_url = test.api_url.clone();
    let http = reqwest::Client::new();
    let session = test.session().await;
    InviteSession::new(session)
        .set_token("join-token".to_string())
        .await?;
    let service = InviteService::new(&http, &api_url, session);

    service.join("abc").await?;
    service.join("abc").await?;

    assert!(InviteSession::new(session).has_joined("abc").await?);
    let joins = test
        .requests()
        .into_iter()
        .filter(|r| r.method == Method::POST && r.path == "/invites/abc/join")
        .count();
    assert_eq!(joins, 1);

    Ok(())
}

/// Tests expired invites are refused without calling join.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn join_expired_invite_fails() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_json(
            Method::GET,
            "/invites/old",
            factory::invite::create_invite("old", 4, Some("2020-01-01T00:00:00Z")),
        )
        .build()
        .await
        .unwrap();
    let api_url = test.api_url.clone();
    let http = reqwest::Client::new();
    let session = test.session().await;
    InviteSession::new(session)
        .set_token("join-token".to_string())
        .await?;

    let result = InviteService::new(&http, &api_url, session).join("old").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(test.last_request(Method::POST, "/invites/old/join").is_none());

    Ok(())
}
