use super::*;

/// Tests the guard rejects a session without a token.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await;

    let result = AuthGuard::new(session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests the guard hands out the stored token.
///
/// Expected: Ok("token-1")
#[tokio::test]
async fn returns_stored_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await;

    AuthSession::new(session)
        .set_token("token-1".to_string())
        .await?;
    let token = AuthGuard::new(session).require().await?;

    assert_eq!(token, "token-1");

    Ok(())
}

/// Tests the login token does not stand in for the invite token.
///
/// Expected: Err(AuthError::InviteTokenMissing)
#[tokio::test]
async fn invite_token_is_separate() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await;

    AuthSession::new(session)
        .set_token("token-1".to_string())
        .await?;
    let result = AuthGuard::new(session).require_invite_token().await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InviteTokenMissing))
    ));

    InviteSession::new(session)
        .set_token("join-token".to_string())
        .await?;
    let token = AuthGuard::new(session).require_invite_token().await?;
    assert_eq!(token, "join-token");

    Ok(())
}
