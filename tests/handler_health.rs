mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use draft_redirects::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let ctx = common::create_test_context();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(ctx.state.clone());

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["settings"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let ctx = common::create_test_context();
    let server = common::create_test_server(&ctx);

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("settings").is_some());
}
