//! Backing-store settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS};

/// Backing-store configuration
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` has no default on purpose: a handle built over an
    /// empty URL reports a configuration error on first use instead of
    /// silently targeting a guessed database.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            url: env::var("DATABASE_URL").unwrap_or_default(),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            connect_timeout_secs: env::var("DATABASE_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("")
    }
}
