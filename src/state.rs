use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::warn;

use crate::config::AppConfig;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    session_key: Key,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let options = SqliteConnectOptions::from_str(&config.database_url)
            .context("parse DATABASE_URL")?
            .create_if_missing(true);
        let db = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context("connect to database")?;

        let session_key = session_key_from(config.session_secret.as_deref())?;

        Ok(Self {
            db,
            config,
            session_key,
        })
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>, session_key: Key) -> Self {
        Self {
            db,
            config,
            session_key,
        }
    }
}

/// Expand the configured secret into a cookie-signing key, or generate a
/// random one when no secret is set (invalidating existing sessions).
fn session_key_from(secret: Option<&str>) -> anyhow::Result<Key> {
    match secret {
        Some(secret) => {
            anyhow::ensure!(
                secret.len() >= 32,
                "SESSION_SECRET must be at least 32 bytes"
            );
            Ok(Key::derive_from(secret.as_bytes()))
        }
        None => {
            warn!("SESSION_SECRET not set; generated a random key, existing sessions are invalid");
            Ok(Key::generate())
        }
    }
}

// Lets the signed cookie jar extractor find its key in the router state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.session_key.clone()
    }
}
