use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::SessionConfig;
use crate::error::AppError;

pub const AUTHENTICATED_USER_ID: &str = "authenticatedUserID";
pub const FLASH: &str = "flash";
pub const REDIRECT_PATH_AFTER_LOGIN: &str = "redirectPathAfterLogin";

pub fn layer(cfg: &SessionConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(cfg.secure_cookies)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::hours(cfg.lifetime_hours)))
}

pub async fn put_flash(session: &Session, message: &str) -> Result<(), AppError> {
    session.insert(FLASH, message).await?;
    Ok(())
}

/// Returns the flash once; the next call sees `None`.
pub async fn pop_flash(session: &Session) -> Result<Option<String>, AppError> {
    Ok(session.remove::<String>(FLASH).await?)
}

pub async fn user_id(session: &Session) -> Result<Option<i64>, AppError> {
    Ok(session.get::<i64>(AUTHENTICATED_USER_ID).await?)
}

/// Rotates the session id before recording the login.
pub async fn log_in(session: &Session, user_id: i64) -> Result<(), AppError> {
    session.cycle_id().await?;
    session.insert(AUTHENTICATED_USER_ID, user_id).await?;
    Ok(())
}

pub async fn log_out(session: &Session) -> Result<(), AppError> {
    session.cycle_id().await?;
    session.remove::<i64>(AUTHENTICATED_USER_ID).await?;
    Ok(())
}

pub async fn take_redirect_after_login(session: &Session) -> Result<Option<String>, AppError> {
    Ok(session.remove::<String>(REDIRECT_PATH_AFTER_LOGIN).await?)
}

pub async fn set_redirect_after_login(session: &Session, path: &str) -> Result<(), AppError> {
    session.insert(REDIRECT_PATH_AFTER_LOGIN, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn flash_is_one_shot() {
        let s = session();
        put_flash(&s, "Snippet successfully created!").await.unwrap();
        assert_eq!(
            pop_flash(&s).await.unwrap().as_deref(),
            Some("Snippet successfully created!")
        );
        assert_eq!(pop_flash(&s).await.unwrap(), None);
    }

    #[tokio::test]
    async fn log_in_and_out() {
        let s = session();
        assert_eq!(user_id(&s).await.unwrap(), None);
        log_in(&s, 1).await.unwrap();
        assert_eq!(user_id(&s).await.unwrap(), Some(1));
        log_out(&s).await.unwrap();
        assert_eq!(user_id(&s).await.unwrap(), None);
    }

    #[tokio::test]
    async fn redirect_path_is_consumed() {
        let s = session();
        set_redirect_after_login(&s, "/account/view").await.unwrap();
        assert_eq!(
            take_redirect_after_login(&s).await.unwrap().as_deref(),
            Some("/account/view")
        );
        assert_eq!(take_redirect_after_login(&s).await.unwrap(), None);
    }
}
