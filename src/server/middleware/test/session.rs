use super::*;

/// Tests logout drops every slot.
///
/// Expected: no token, no user, no invite token after clear
#[tokio::test]
async fn clear_removes_login_state() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await;
    let auth = AuthSession::new(session);

    auth.set_token("token".to_string()).await?;
    auth.set_user(&UserDto {
        discord_id: 1,
        name: "aztra".to_string(),
        tag: "aztra".to_string(),
        avatar_url: "https://cdn.discordapp.com/embed/avatars/0.png".to_string(),
    })
    .await?;
    InviteSession::new(session)
        .set_token("join".to_string())
        .await?;

    assert!(auth.is_authenticated().await?);
    assert_eq!(auth.get_user().await?.map(|u| u.discord_id), Some(1));

    auth.clear().await;

    assert!(!auth.is_authenticated().await?);
    assert!(auth.get_user().await?.is_none());
    assert!(InviteSession::new(session).get_token().await?.is_none());

    Ok(())
}

/// Tests a CSRF token can only be consumed once.
///
/// Expected: Some on first take, None on second
#[tokio::test]
async fn csrf_token_single_use() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let csrf = CsrfSession::new(test.session().await);

    csrf.set_token("state-1".to_string()).await?;

    assert_eq!(csrf.take_token().await?.as_deref(), Some("state-1"));
    assert!(csrf.take_token().await?.is_none());

    Ok(())
}

/// Tests only same-origin paths are remembered for the post-login redirect.
///
/// Expected: "/dashboard/1/warns" kept, "//evil.example" ignored
#[tokio::test]
async fn redirect_path_is_sanitized() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let flow = LoginFlowSession::new(test.session().await);

    flow.set_redirect("/dashboard/1/warns").await?;
    assert_eq!(
        flow.take_redirect().await?.as_deref(),
        Some("/dashboard/1/warns")
    );

    flow.set_redirect("//evil.example").await?;
    assert!(flow.take_redirect().await?.is_none());

    flow.set_redirect("https://evil.example").await?;
    assert!(flow.take_redirect().await?.is_none());

    Ok(())
}

/// Tests the pending invite survives until the callback takes it.
#[tokio::test]
async fn pending_invite_taken_once() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let flow = LoginFlowSession::new(test.session().await);

    flow.set_invite("abc").await?;

    assert_eq!(flow.take_invite().await?.as_deref(), Some("abc"));
    assert!(flow.take_invite().await?.is_none());

    Ok(())
}

/// Tests joined invites are tracked without duplicates.
#[tokio::test]
async fn joined_invites_are_tracked() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let invites = InviteSession::new(test.session().await);

    assert!(!invites.has_joined("abc").await?);

    invites.mark_joined("abc").await?;
    invites.mark_joined("abc").await?;

    assert!(invites.has_joined("abc").await?);
    assert!(!invites.has_joined("def").await?);

    Ok(())
}
