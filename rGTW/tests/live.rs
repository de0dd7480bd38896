//! Smoke test against the real service.
//!
//! Needs `GTW_USERNAME`, `GTW_PASSWORD` and `GTW_CONSUMER_KEY` in the
//! environment or a `.env` file. Run with `cargo test -- --ignored`.

use rgtw::GTWClient;

fn live_client() -> Option<GTWClient> {
    dotenv::dotenv().ok();

    let username = std::env::var("GTW_USERNAME").ok()?;
    let password = std::env::var("GTW_PASSWORD").ok()?;
    let consumer_key = std::env::var("GTW_CONSUMER_KEY").ok()?;

    GTWClient::builder()
        .credentials(username, password, consumer_key)
        .build()
        .ok()
}

#[tokio::test]
#[ignore]
async fn live_upcoming_webinars() {
    let Some(client) = live_client() else {
        eprintln!("GTW_* credentials not set, skipping");
        return;
    };

    let reply = client.webinars().upcoming().await.unwrap();
    println!("{:?} {:?}", client.status_code(), client.reason_phrase());
    assert!(reply.is_success());
    assert!(client.is_authenticated());
}
