mod common;

use axum_test::TestServer;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = TestServer::new(common::test_app(common::create_test_state())).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["disclaimer_enabled"], true);
}

#[tokio::test]
async fn test_health_reports_disabled_disclaimer() {
    let server =
        TestServer::new(common::test_app(common::create_state_without_disclaimer())).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["disclaimer_enabled"], false);
}
