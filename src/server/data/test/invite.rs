use super::*;
use crate::server::data::invite::InviteRepository;

/// Tests joining posts to the invite with the invite token.
///
/// Expected: POST /invites/abc/join with `Bearer join-token`
#[tokio::test]
async fn join_uses_given_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            Method::GET,
            "/invites/abc",
            factory::invite::create_invite("abc", 4, None),
        )
        .with_status(Method::POST, "/invites/abc/join", StatusCode::NO_CONTENT)
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();
    let repo = InviteRepository::new(AztraApi::new(&http, &test.api_url, "join-token"));

    let invite = repo.get("abc").await?;
    assert_eq!(invite.guild.id, 4);
    assert!(!invite.used);

    repo.join("abc").await?;
    let request = test.last_request(Method::POST, "/invites/abc/join").unwrap();
    assert_eq!(request.authorization.as_deref(), Some("Bearer join-token"));

    Ok(())
}
