mod common;

use axum::http::StatusCode;
use draft_redirects::domain::entities::ContentStatus;

#[tokio::test]
async fn test_trailing_slash_reaches_editor() {
    let ctx = common::create_test_context();
    let (token, _) = common::create_token(&ctx, "editor", &["manage_settings"]).await;
    let server = common::create_app_test_server(&ctx);

    let response = server
        .get("/admin/redirects/")
        .add_header("Cookie", common::auth_cookie(&token))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("No draft posts found."));
}

#[tokio::test]
async fn test_draft_redirect_survives_slash_normalisation() {
    let ctx = common::create_test_context();
    common::create_item(&ctx, "Old Sale", "old-sale", "post", ContentStatus::Draft).await;
    common::store_map(&ctx, &[("old-sale", "https://example.com/sale/")]).await;
    let server = common::create_app_test_server(&ctx);

    let response = server.get("/old-sale/").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com/sale/");
}

#[tokio::test]
async fn test_login_page_is_rate_limited() {
    let ctx = common::create_test_context();
    let server = common::create_app_test_server(&ctx);

    let mut statuses = Vec::new();
    for _ in 0..15 {
        statuses.push(server.get("/admin/login").await.status_code());
    }

    assert_eq!(statuses[0], StatusCode::OK);
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));
}

#[tokio::test]
async fn test_public_fallback_is_not_rate_limited() {
    let ctx = common::create_test_context();
    common::store_map(&ctx, &[("gone", "https://example.com/new/")]).await;
    let server = common::create_app_test_server(&ctx);

    for _ in 0..50 {
        server
            .get("/gone/")
            .await
            .assert_status(StatusCode::MOVED_PERMANENTLY);
        server.get("/nothing-here/").await.assert_status_not_found();
    }
}
