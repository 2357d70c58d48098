//! Process Configuration
//!
//! Read once from the environment (after `.env` is loaded) at startup.

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use std::fmt;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

/// Everything `main` needs to start the server
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// In-process stores are used when unset
    pub database_url: Option<String>,
    pub cors_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `lookup` returns the value of a variable; blank values count as unset.
    /// `allow_random_secret` permits starting without `TOKEN_SECRET`.
    pub fn from_lookup<F>(lookup: F, allow_random_secret: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:8080")?;

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        let auth = match var("TOKEN_SECRET") {
            Some(secret) => AuthConfig::from_base64_secret(&secret).context("TOKEN_SECRET")?,
            None if allow_random_secret => {
                tracing::warn!("TOKEN_SECRET not set, using a random secret for this process");
                AuthConfig::development()
            }
            None => bail!("TOKEN_SECRET must be set in production"),
        };

        let auth = match var("PASSWORD_PEPPER") {
            Some(pepper) => auth.with_pepper(pepper),
            None => auth,
        };

        Ok(Self {
            bind_addr,
            database_url: var("DATABASE_URL"),
            cors_origins,
            auth,
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The URL can carry database credentials
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("cors_origins", &self.cors_origins)
            .field("auth", &self.auth)
            .finish()
    }
}
