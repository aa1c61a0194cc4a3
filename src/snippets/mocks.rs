use std::sync::RwLock;

use async_trait::async_trait;
use time::{Duration, OffsetDateTime};

use crate::error::ModelError;
use crate::snippets::repo_types::{Snippet, SnippetStore};

/// In-memory snippet store seeded with a single snippet (id 1).
pub struct MockSnippetStore {
    rows: RwLock<Vec<Snippet>>,
}

impl MockSnippetStore {
    pub fn new() -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            rows: RwLock::new(vec![Snippet {
                id: 1,
                title: "An old silent pond".into(),
                content: "An old silent pond...".into(),
                created: now,
                expires: now + Duration::days(365),
            }]),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }
}

#[async_trait]
impl SnippetStore for MockSnippetStore {
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_days: i32,
    ) -> Result<i64, ModelError> {
        let mut rows = self.rows.write().unwrap();
        let id = rows.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let now = OffsetDateTime::now_utc();
        rows.push(Snippet {
            id,
            title: title.into(),
            content: content.into(),
            created: now,
            expires: now + Duration::days(expires_days.into()),
        });
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Snippet, ModelError> {
        let now = OffsetDateTime::now_utc();
        self.rows
            .read()
            .unwrap()
            .iter()
            .find(|s| s.id == id && s.expires > now)
            .cloned()
            .ok_or(ModelError::NoRecord)
    }

    async fn latest(&self) -> Result<Vec<Snippet>, ModelError> {
        let now = OffsetDateTime::now_utc();
        let mut rows: Vec<Snippet> = self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|s| s.expires > now)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        rows.truncate(10);
        Ok(rows)
    }
}
