use anyhow::{ensure, Context};

/// Longest idle session lifetime accepted, one year.
const MAX_SESSION_LIFETIME_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub lifetime_hours: i64,
    pub secure_cookies: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub static_dir: String,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let session = SessionConfig {
            lifetime_hours: session_lifetime(env_or("SESSION_LIFETIME_HOURS", 12))?,
            secure_cookies: env_or("SECURE_COOKIES", true),
        };
        Ok(Self {
            database_url,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("APP_PORT", 4000),
            max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "./ui/static".into()),
            session,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn session_lifetime(hours: i64) -> anyhow::Result<i64> {
    ensure!(
        (1..=MAX_SESSION_LIFETIME_HOURS).contains(&hours),
        "SESSION_LIFETIME_HOURS must be between 1 and {MAX_SESSION_LIFETIME_HOURS}, got {hours}"
    );
    Ok(hours)
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_on_missing_or_unparsable() {
        assert_eq!(env_or("SNIPPETBOX_TEST_UNSET_VAR", 42u16), 42);

        std::env::set_var("SNIPPETBOX_TEST_BAD_PORT", "not-a-port");
        assert_eq!(env_or("SNIPPETBOX_TEST_BAD_PORT", 4000u16), 4000);
    }

    #[test]
    fn session_lifetime_bounds() {
        assert_eq!(session_lifetime(12).unwrap(), 12);
        assert_eq!(session_lifetime(MAX_SESSION_LIFETIME_HOURS).unwrap(), 8760);
        assert!(session_lifetime(0).is_err());
        assert!(session_lifetime(-5).is_err());
        assert!(session_lifetime(i64::MAX).is_err());
    }

    #[test]
    fn env_or_parses_present_value() {
        std::env::set_var("SNIPPETBOX_TEST_SECURE", "false");
        assert!(!env_or("SNIPPETBOX_TEST_SECURE", true));
    }
}
