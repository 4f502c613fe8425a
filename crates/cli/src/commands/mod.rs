//! CLI subcommands.

pub mod migrate;
pub mod offers;

use offer_trend_core::OfferInputError;
use offer_trend_web::config::{ConfigError, WebConfig};
use offer_trend_web::db::{self, RepositoryError};
use sqlx::SqlitePool;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// A migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Offer store operation failed.
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Invalid offer input.
    #[error("Invalid offer: {0}")]
    Input(#[from] OfferInputError),
}

/// Connect to the configured offer store and bring its schema up to date.
///
/// A fresh `mode=rwc` database file starts out empty, so every command
/// applies the embedded migrations before touching the `offers` table.
async fn connect() -> Result<SqlitePool, CommandError> {
    let config = WebConfig::from_env()?;
    connect_to(&config.database_url).await
}

async fn connect_to(database_url: &str) -> Result<SqlitePool, CommandError> {
    tracing::info!("Connecting to {database_url}...");
    let pool = db::create_pool(database_url).await?;

    db::run_migrations(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use offer_trend_web::db::OfferRepository;

    use super::*;

    #[tokio::test]
    async fn test_fresh_database_is_migrated_on_connect() {
        let path = std::env::temp_dir().join(format!(
            "offer-trend-cli-{}-fresh.db",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let pool = connect_to(&format!("sqlite://{}?mode=rwc", path.display()))
            .await
            .unwrap();
        let offers = OfferRepository::new(&pool).list_all().await.unwrap();
        assert!(offers.is_empty());

        pool.close().await;
        let _ = std::fs::remove_file(&path);
    }
}
