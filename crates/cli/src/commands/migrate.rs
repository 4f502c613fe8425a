//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! offer-trend migrate
//! ```
//!
//! Migrations live in `crates/web/migrations/` and are embedded in the web
//! crate. The server and the other commands also apply them on connect, so
//! this only needs running to prepare a database ahead of time.

use super::{CommandError, connect};

/// Run the offer store migrations.
pub async fn run() -> Result<(), CommandError> {
    tracing::info!("Running migrations...");
    connect().await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
