use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::error::ModelError;
use crate::users::password::{hash_password, verify_password};
use crate::users::repo_types::{User, UserStore};

const EMAIL_UNIQUE_CONSTRAINT: &str = "users_uc_email";

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<(), ModelError> {
        let hash = hash_password(password)?;
        sqlx::query(
            r#"
            INSERT INTO users (name, email, hashed_password, created)
            VALUES ($1, $2, $3, NOW())
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(hash)
        .execute(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
            {
                ModelError::DuplicateEmail
            }
            other => ModelError::Database(other),
        })?;
        Ok(())
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<i64, ModelError> {
        let row = sqlx::query_as::<_, (i64, String)>(
            r#"SELECT id, hashed_password FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        let Some((id, hash)) = row else {
            debug!("authenticate: unknown email");
            return Err(ModelError::InvalidCredentials);
        };
        if !verify_password(password, &hash)? {
            debug!(user_id = id, "authenticate: password mismatch");
            return Err(ModelError::InvalidCredentials);
        }
        Ok(id)
    }

    async fn exists(&self, id: i64) -> Result<bool, ModelError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT true FROM users WHERE id = $1)"#,
        )
        .bind(id)
        .fetch_one(&self.db)
        .await?;
        Ok(exists)
    }

    async fn get_user(&self, id: i64) -> Result<User, ModelError> {
        sqlx::query_as::<_, User>(r#"SELECT id, name, email, created FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(ModelError::NoRecord)
    }

    async fn update_password(
        &self,
        id: i64,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ModelError> {
        // Row lock keeps a concurrent change from slipping between check and write.
        let mut tx = self.db.begin().await?;

        let current_hash = sqlx::query_scalar::<_, String>(
            r#"SELECT hashed_password FROM users WHERE id = $1 FOR UPDATE"#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(ModelError::NoRecord)?;

        if !verify_password(current_password, &current_hash)? {
            return Err(ModelError::InvalidCredentials);
        }

        let new_hash = hash_password(new_password)?;
        sqlx::query(r#"UPDATE users SET hashed_password = $1 WHERE id = $2"#)
            .bind(new_hash)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
