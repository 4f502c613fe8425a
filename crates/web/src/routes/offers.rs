//! Offer mutation routes.
//!
//! Both routes redirect back to the home page whatever the outcome. An
//! unparseable date, a date with no offer, or a date collision is logged
//! and leaves the store unchanged.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use offer_trend_core::parse_offer_date;

use crate::db::{OfferRepository, RepositoryError};
use crate::error::add_breadcrumb;
use crate::state::AppState;

/// Update offer form data.
#[derive(Debug, Deserialize)]
pub struct UpdateOfferForm {
    #[serde(default)]
    pub olddate: String,
    #[serde(default)]
    pub newdate: String,
}

/// Delete offer form data.
#[derive(Debug, Deserialize)]
pub struct DeleteOfferForm {
    #[serde(default)]
    pub date: String,
}

/// Move an offer to a new date.
///
/// POST /update
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateOfferForm>) -> Redirect {
    let (old_date, new_date) = match (
        parse_offer_date(&form.olddate),
        parse_offer_date(&form.newdate),
    ) {
        (Ok(old), Ok(new)) => (old, new),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(olddate = %form.olddate, newdate = %form.newdate, "Failed to update offer: {e}");
            return Redirect::to("/");
        }
    };

    match OfferRepository::new(state.pool())
        .update(old_date, new_date)
        .await
    {
        Ok(offer) => {
            tracing::info!(%old_date, %new_date, placement = %offer.placement, "Offer updated");
            let (old, new) = (old_date.to_string(), new_date.to_string());
            add_breadcrumb(
                "offers",
                "Updated offer",
                Some(&[("olddate", old.as_str()), ("newdate", new.as_str())]),
            );
        }
        Err(RepositoryError::NotFound) => {
            tracing::warn!(%old_date, "Failed to update offer: no offer on that date");
        }
        Err(RepositoryError::Conflict(msg)) => {
            tracing::warn!(%old_date, %new_date, "Failed to update offer: {msg}");
        }
        Err(e) => {
            tracing::error!(%old_date, %new_date, "Failed to update offer: {e}");
        }
    }

    Redirect::to("/")
}

/// Delete an offer.
///
/// POST /delete
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Form(form): Form<DeleteOfferForm>) -> Redirect {
    let date = match parse_offer_date(&form.date) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!(date = %form.date, "Failed to delete offer: {e}");
            return Redirect::to("/");
        }
    };

    match OfferRepository::new(state.pool()).delete(date).await {
        Ok(()) => {
            tracing::info!(%date, "Offer deleted");
            let date = date.to_string();
            add_breadcrumb("offers", "Deleted offer", Some(&[("date", date.as_str())]));
        }
        Err(RepositoryError::NotFound) => {
            tracing::warn!(%date, "Failed to delete offer: no offer on that date");
        }
        Err(e) => {
            tracing::error!(%date, "Failed to delete offer: {e}");
        }
    }

    Redirect::to("/")
}
