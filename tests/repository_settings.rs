use draft_redirects::domain::repositories::SettingsStore;
use draft_redirects::infrastructure::persistence::PgSettingsStore;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_missing_key_is_none(pool: PgPool) {
    let store = PgSettingsStore::new(Arc::new(pool));

    assert!(store.get("draft_slug_map").await.unwrap().is_none());
    assert!(store.health_check().await);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_set_overwrites(pool: PgPool) {
    let store = PgSettingsStore::new(Arc::new(pool));

    store
        .set("draft_slug_map", json!({ "a": "https://example.com/a/" }))
        .await
        .unwrap();
    store
        .set("draft_slug_map", json!({ "b": "https://example.com/b/" }))
        .await
        .unwrap();

    assert_eq!(
        store.get("draft_slug_map").await.unwrap(),
        Some(json!({ "b": "https://example.com/b/" }))
    );
}
