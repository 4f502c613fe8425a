//! JSON API endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::instrument;

use offer_trend_core::{Offer, fit_trend, parse_offer_date, predict_zero_crossing};

use crate::db::OfferRepository;
use crate::error::Result;
use crate::state::AppState;

/// Predicted zero-crossing and the fit behind it.
///
/// Every field is `null` when no line can be fitted. `date` is also `null`
/// when the line never reaches zero.
#[derive(Debug, Default, Serialize)]
pub struct PredictionResponse {
    pub date: Option<NaiveDate>,
    /// Placement change per second.
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
    pub r_squared: Option<f64>,
    pub observations: usize,
}

impl PredictionResponse {
    /// Fit the offers and predict their zero-crossing.
    #[must_use]
    pub fn from_offers(offers: &[Offer]) -> Self {
        let Some(fit) = fit_trend(offers) else {
            return Self {
                observations: offers.len(),
                ..Self::default()
            };
        };

        Self {
            date: predict_zero_crossing(offers),
            slope: Some(fit.slope),
            intercept: Some(fit.intercept),
            r_squared: Some(fit.r_squared),
            observations: fit.observations,
        }
    }
}

/// List every offer, oldest first.
///
/// GET /api/offers
#[instrument(skip(state))]
pub async fn list_offers(State(state): State<AppState>) -> Result<Json<Vec<Offer>>> {
    let offers = OfferRepository::new(state.pool()).list_all().await?;
    Ok(Json(offers))
}

/// Look up the offer recorded on one date.
///
/// GET /api/offers/{date}
#[instrument(skip(state))]
pub async fn get_offer(State(state): State<AppState>, Path(date): Path<String>) -> Result<Response> {
    let Ok(date) = parse_offer_date(&date) else {
        return Ok(StatusCode::BAD_REQUEST.into_response());
    };

    let offer = OfferRepository::new(state.pool()).get(date).await?;
    Ok(offer.map_or_else(
        || StatusCode::NOT_FOUND.into_response(),
        |offer| Json(offer).into_response(),
    ))
}

/// Predict the zero-crossing date of the current offers.
///
/// GET /api/prediction
#[instrument(skip(state))]
pub async fn prediction(State(state): State<AppState>) -> Result<Json<PredictionResponse>> {
    let offers = OfferRepository::new(state.pool()).list_all().await?;
    Ok(Json(PredictionResponse::from_offers(&offers)))
}
