//! Offer management commands.
//!
//! # Usage
//!
//! ```bash
//! offer-trend offers add -d 2021-01-01 -p 10
//! offer-trend offers list
//! offer-trend predict
//! ```

use offer_trend_core::{Offer, predict_zero_crossing};
use offer_trend_web::db::OfferRepository;
use offer_trend_web::routes::home::NO_PREDICTION;

use super::{CommandError, connect};

/// Print every offer as `date placement`, oldest first.
pub async fn list() -> Result<(), CommandError> {
    let pool = connect().await?;
    let offers = OfferRepository::new(&pool).list_all().await?;

    #[allow(clippy::print_stdout)]
    {
        for offer in &offers {
            println!("{} {}", offer.date, offer.placement);
        }
    }

    tracing::info!("{} offers", offers.len());
    Ok(())
}

/// Record a new offer.
///
/// Fails without changing the store if the date already has an offer.
pub async fn add(date: &str, placement: &str) -> Result<(), CommandError> {
    let offer = Offer::parse(date, placement)?;

    let pool = connect().await?;
    let created = OfferRepository::new(&pool).create(&offer).await?;

    tracing::info!("Added offer {} {}", created.date, created.placement);
    Ok(())
}

/// Print the predicted zero-crossing date, or `No date`.
pub async fn predict() -> Result<(), CommandError> {
    let pool = connect().await?;
    let offers = OfferRepository::new(&pool).list_all().await?;

    let prediction = predict_zero_crossing(&offers)
        .map_or_else(|| NO_PREDICTION.to_string(), |date| date.to_string());

    #[allow(clippy::print_stdout)]
    {
        println!("{prediction}");
    }

    Ok(())
}
