//! Content item entity: a draft or published page, post, or other typed record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Publish,
    Pending,
    Private,
    Trash,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Publish => "publish",
            Self::Pending => "pending",
            Self::Private => "private",
            Self::Trash => "trash",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not recognised.
#[derive(Debug, thiserror::Error)]
#[error("Unknown content status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ContentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "publish" | "published" => Ok(Self::Publish),
            "pending" => Ok(Self::Pending),
            "private" => Ok(Self::Private),
            "trash" => Ok(Self::Trash),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A stored content item.
///
/// Drafts may have an empty slug; non-empty slugs are unique across the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content_type: String,
    pub status: ContentStatus,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn is_draft(&self) -> bool {
        self.status == ContentStatus::Draft
    }

    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Publish
    }

    /// Label used in admin listings: `Title (type)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.content_type)
    }
}

/// Input data for creating a new content item.
#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub title: String,
    pub slug: String,
    pub content_type: String,
    pub status: ContentStatus,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(status: ContentStatus) -> ContentItem {
        ContentItem {
            id: 1,
            title: "Spring Sale".to_string(),
            slug: "spring-sale".to_string(),
            content_type: "post".to_string(),
            status,
            body: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_round_trip_through_str() {
        for status in [
            ContentStatus::Draft,
            ContentStatus::Publish,
            ContentStatus::Pending,
            ContentStatus::Private,
            ContentStatus::Trash,
        ] {
            assert_eq!(status.as_str().parse::<ContentStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_accepts_published_alias() {
        assert_eq!(
            "published".parse::<ContentStatus>().unwrap(),
            ContentStatus::Publish
        );
        assert!("archived".parse::<ContentStatus>().is_err());
    }

    #[test]
    fn test_draft_and_published_predicates() {
        assert!(item(ContentStatus::Draft).is_draft());
        assert!(!item(ContentStatus::Draft).is_published());
        assert!(item(ContentStatus::Publish).is_published());
        assert!(!item(ContentStatus::Pending).is_draft());
    }

    #[test]
    fn test_label() {
        assert_eq!(item(ContentStatus::Draft).label(), "Spring Sale (post)");
    }
}
