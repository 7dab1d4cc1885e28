use super::*;
use crate::server::data::ticket::TicketRepository;

/// Tests a rate limited resend keeps the 429 status.
///
/// Expected: backend status 429
#[tokio::test]
async fn resend_rate_limited() {
    let test = TestBuilder::new()
        .with_status(
            Method::POST,
            "/servers/1/ticketsets/set-1/resend",
            StatusCode::TOO_MANY_REQUESTS,
        )
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();

    let result = TicketRepository::new(AztraApi::new(&http, &test.api_url, "token"))
        .resend(1, "set-1")
        .await;

    assert_eq!(result.err().and_then(|e| e.backend_status()), Some(429));
}

/// Tests ticket sets and tickets deserialize from API payloads.
///
/// Expected: Ok with one set and its open ticket
#[tokio::test]
async fn lists_ticket_sets_and_tickets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            Method::GET,
            "/servers/1/ticketsets",
            json!([factory::ticket::TicketSetFactory::new()
                .uuid("set-1")
                .category_closed(9)
                .build()]),
        )
        .with_json(
            Method::GET,
            "/servers/1/tickets",
            json!([factory::ticket::create_ticket("set-1", 7, "open")]),
        )
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();
    let repo = TicketRepository::new(AztraApi::new(&http, &test.api_url, "token"));

    let sets = repo.get_ticket_sets(1).await?;
    assert_eq!(sets[0].uuid, "set-1");
    assert_eq!(sets[0].category_closed, Some(9));

    let tickets = repo.get_tickets(1).await?;
    assert_eq!(tickets[0].ticketset, "set-1");
    assert_eq!(tickets[0].opener, 7);
    assert_eq!(
        tickets[0].status,
        crate::model::ticket::TicketStatus::Open
    );

    Ok(())
}
