use e2e::test_server::TestServer;

// Nothing listens here, so every verification call would fail at the transport level.
const DEAD_API: &str = "http://127.0.0.1:9";

async fn fetch_page(server: &TestServer, path: &str) -> String {
    let response = reqwest::get(format!("{}{}", server.url(), path))
        .await
        .expect("Failed to fetch page");

    assert_eq!(response.status(), 200, "{path} should return 200 OK");
    response.text().await.expect("Failed to read body")
}

#[tokio::test]
async fn test_delete_account_renders_loading_state() {
    let server = TestServer::start(DEAD_API)
        .await
        .expect("Failed to start test server");

    let body = fetch_page(&server, "/delete-account?token=abc").await;

    assert!(
        body.contains("Processing your request..."),
        "Server render should show the pending state"
    );
}

#[tokio::test]
async fn test_delete_account_without_token_still_renders() {
    let server = TestServer::start(DEAD_API)
        .await
        .expect("Failed to start test server");

    let body = fetch_page(&server, "/delete-account").await;

    assert!(body.contains("Processing your request..."));
}

#[tokio::test]
async fn test_verify_email_renders_loading_state() {
    let server = TestServer::start(DEAD_API)
        .await
        .expect("Failed to start test server");

    let body = fetch_page(&server, "/verify-email?token=abc").await;

    assert!(
        body.contains("Verifying your email..."),
        "Server render should show the pending state"
    );
    assert!(body.contains("toast_region"), "Toast region should be mounted");
}
