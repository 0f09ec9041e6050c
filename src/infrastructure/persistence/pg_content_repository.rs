//! PostgreSQL implementation of the content repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ContentItem, ContentStatus, NewContentItem};
use crate::domain::repositories::ContentRepository;
use crate::error::AppError;

const SELECT_COLUMNS: &str =
    "SELECT id, title, slug, content_type, status, body, created_at, updated_at FROM content_items";

#[derive(sqlx::FromRow)]
struct ContentRow {
    id: i64,
    title: String,
    slug: String,
    content_type: String,
    status: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for ContentItem {
    type Error = AppError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<ContentStatus>().map_err(|e| {
            AppError::internal("Corrupt content row", json!({ "id": row.id, "reason": e.to_string() }))
        })?;

        Ok(ContentItem {
            id: row.id,
            title: row.title,
            slug: row.slug,
            content_type: row.content_type,
            status,
            body: row.body,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// PostgreSQL repository for the `content_items` table.
pub struct PgContentRepository {
    pool: Arc<PgPool>,
}

impl PgContentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ContentItem>, AppError> {
        let row = sqlx::query_as::<_, ContentRow>(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(ContentItem::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ContentItem>, AppError> {
        if slug.is_empty() {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, ContentRow>(&format!("{} WHERE slug = $1", SELECT_COLUMNS))
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(ContentItem::try_from).transpose()
    }

    async fn list_by_status(
        &self,
        status: ContentStatus,
        exclude_type: Option<String>,
    ) -> Result<Vec<ContentItem>, AppError> {
        let rows = sqlx::query_as::<_, ContentRow>(&format!(
            r#"{}
            WHERE status = $1
              AND ($2::text IS NULL OR content_type <> $2)
            ORDER BY lower(title) COLLATE "C" ASC, id ASC"#,
            SELECT_COLUMNS
        ))
        .bind(status.as_str())
        .bind(exclude_type)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(ContentItem::try_from).collect()
    }

    async fn create(&self, item: NewContentItem) -> Result<ContentItem, AppError> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
            INSERT INTO content_items (title, slug, content_type, status, body)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, slug, content_type, status, body, created_at, updated_at
            "#,
        )
        .bind(&item.title)
        .bind(&item.slug)
        .bind(&item.content_type)
        .bind(item.status.as_str())
        .bind(&item.body)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn update_status(
        &self,
        id: i64,
        status: ContentStatus,
    ) -> Result<ContentItem, AppError> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
            UPDATE content_items
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, slug, content_type, status, body, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.ok_or_else(|| AppError::not_found("Content item not found", json!({ "id": id })))?
            .try_into()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM content_items WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM content_items")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
