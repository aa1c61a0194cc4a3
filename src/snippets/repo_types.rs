use async_trait::async_trait;
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::error::ModelError;

/// Snippet record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: OffsetDateTime,
    pub expires: OffsetDateTime,
}

#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Stores a snippet expiring `expires_days` days from now and returns its id.
    async fn insert(&self, title: &str, content: &str, expires_days: i32)
        -> Result<i64, ModelError>;

    /// Fails with [`ModelError::NoRecord`] for unknown or expired ids.
    async fn get(&self, id: i64) -> Result<Snippet, ModelError>;

    /// Up to ten unexpired snippets, newest id first.
    async fn latest(&self) -> Result<Vec<Snippet>, ModelError>;
}
