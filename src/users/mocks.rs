use async_trait::async_trait;
use time::OffsetDateTime;

use crate::error::ModelError;
use crate::users::repo_types::{User, UserStore};

/// Fixed-answer user store: alice@example.com / `pa$$word` is user 1 and
/// dupe@example.com is always taken.
pub struct MockUserStore;

#[async_trait]
impl UserStore for MockUserStore {
    async fn insert(&self, _name: &str, email: &str, _password: &str) -> Result<(), ModelError> {
        match email {
            "dupe@example.com" => Err(ModelError::DuplicateEmail),
            _ => Ok(()),
        }
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<i64, ModelError> {
        if email == "alice@example.com" && password == "pa$$word" {
            return Ok(1);
        }
        Err(ModelError::InvalidCredentials)
    }

    async fn exists(&self, id: i64) -> Result<bool, ModelError> {
        Ok(id == 1)
    }

    async fn get_user(&self, id: i64) -> Result<User, ModelError> {
        match id {
            1 => Ok(User {
                id: 1,
                name: "Alice".into(),
                email: "alice@example.com".into(),
                created: OffsetDateTime::now_utc(),
            }),
            _ => Err(ModelError::NoRecord),
        }
    }

    async fn update_password(
        &self,
        id: i64,
        current_password: &str,
        _new_password: &str,
    ) -> Result<(), ModelError> {
        if id != 1 {
            return Err(ModelError::NoRecord);
        }
        if current_password != "pa$$word" {
            return Err(ModelError::InvalidCredentials);
        }
        Ok(())
    }
}
