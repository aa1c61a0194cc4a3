use async_trait::async_trait;
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::error::ModelError;

/// Public profile of a user. The password hash never leaves the store.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created: OffsetDateTime,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with [`ModelError::DuplicateEmail`] when the email is taken.
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<(), ModelError>;

    /// Unknown email and wrong password both yield [`ModelError::InvalidCredentials`].
    async fn authenticate(&self, email: &str, password: &str) -> Result<i64, ModelError>;

    async fn exists(&self, id: i64) -> Result<bool, ModelError>;

    async fn get_user(&self, id: i64) -> Result<User, ModelError>;

    /// Re-checks `current_password` before storing the new hash.
    async fn update_password(
        &self,
        id: i64,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ModelError>;
}
