use e2e::test_server::TestServer;

#[tokio::test]
async fn test_public_config_exposes_api_url() {
    let server = TestServer::start("https://api.example.test/")
        .await
        .expect("Failed to start test server");

    let config: serde_json::Value = reqwest::get(format!("{}/api/config", server.url()))
        .await
        .expect("Failed to fetch config")
        .json()
        .await
        .expect("Config should be JSON");

    assert_eq!(config["api_url"], "https://api.example.test");
}

#[tokio::test]
async fn test_login_page_loads() {
    let server = TestServer::start("http://127.0.0.1:9")
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(format!("{}/login", server.url()))
        .await
        .expect("Failed to fetch login page");

    assert_eq!(response.status(), 200, "Login page should return 200 OK");
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Sign in"), "Should render the login card");
}
