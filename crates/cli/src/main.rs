//! Offer trend CLI - Database migrations and offer management.
//!
//! # Usage
//!
//! ```bash
//! # Create or upgrade the offers table
//! offer-trend migrate
//!
//! # Record a placement
//! offer-trend offers add --date 2021-01-01 --placement 10
//!
//! # Print every offer
//! offer-trend offers list
//!
//! # Print the predicted zero-crossing date
//! offer-trend predict
//! ```
//!
//! The database is resolved the same way as the web server
//! (`OFFERS_DATABASE_URL`, then `DATABASE_URL`, then `offerdatabase.db`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "offer-trend")]
#[command(author, version, about = "Offer tracker CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage offers
    Offers {
        #[command(subcommand)]
        action: OfferAction,
    },
    /// Print the predicted date placement reaches zero
    Predict,
}

#[derive(Subcommand)]
enum OfferAction {
    /// Print every offer, oldest first
    List,
    /// Record a new offer
    Add {
        /// Offer date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Placement on that date
        #[arg(short, long, allow_hyphen_values = true)]
        placement: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Offers { action } => match action {
            OfferAction::List => commands::offers::list().await?,
            OfferAction::Add { date, placement } => {
                commands::offers::add(&date, &placement).await?;
            }
        },
        Commands::Predict => commands::offers::predict().await?,
    }
    Ok(())
}
