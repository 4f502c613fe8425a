//! Home page: offer table, add form, and the zero-crossing prediction.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tracing::instrument;

use offer_trend_core::{LinearFit, Offer, fit_trend, predict_zero_crossing};

use crate::db::{OfferRepository, RepositoryError};
use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;

/// Shown when no zero-crossing can be predicted.
pub const NO_PREDICTION: &str = "No date";

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Offer display data for templates.
#[derive(Debug, Clone)]
pub struct OfferView {
    pub date: String,
    pub placement: i64,
}

impl From<&Offer> for OfferView {
    fn from(offer: &Offer) -> Self {
        Self {
            date: offer.date.to_string(),
            placement: offer.placement.get(),
        }
    }
}

/// Fit statistics display data for templates.
#[derive(Debug, Clone)]
pub struct TrendView {
    /// Placement change per day, e.g. "-0.0677".
    pub slope_per_day: String,
    pub r_squared: String,
    pub observations: usize,
}

impl From<&LinearFit> for TrendView {
    fn from(fit: &LinearFit) -> Self {
        Self {
            slope_per_day: format!("{:.4}", fit.slope * SECONDS_PER_DAY),
            r_squared: format!("{:.3}", fit.r_squared),
            observations: fit.observations,
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Every offer, oldest first.
    pub offers: Vec<OfferView>,
    /// Predicted zero-crossing date, or [`NO_PREDICTION`].
    pub prediction: String,
    /// Fit statistics when a line could be fitted.
    pub trend: Option<TrendView>,
}

impl HomeTemplate {
    /// Build the page from the current offers.
    #[must_use]
    pub fn from_offers(offers: &[Offer]) -> Self {
        let prediction = predict_zero_crossing(offers)
            .map_or_else(|| NO_PREDICTION.to_string(), |date| date.to_string());

        Self {
            offers: offers.iter().map(OfferView::from).collect(),
            prediction,
            trend: fit_trend(offers).as_ref().map(TrendView::from),
        }
    }
}

/// Add offer form data.
#[derive(Debug, Deserialize)]
pub struct AddOfferForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub placement: String,
}

/// Read every offer and render the page.
async fn render(state: &AppState) -> Result<HomeTemplate> {
    let offers = OfferRepository::new(state.pool()).list_all().await?;
    Ok(HomeTemplate::from_offers(&offers))
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    render(&state).await
}

/// Add an offer and display the home page.
///
/// POST /
///
/// Invalid input, a duplicate date, or a failed insert is logged and the
/// page is rendered with the store unchanged.
#[instrument(skip(state))]
pub async fn add_offer(
    State(state): State<AppState>,
    Form(form): Form<AddOfferForm>,
) -> Result<HomeTemplate> {
    match Offer::parse(&form.date, &form.placement) {
        Ok(offer) => match OfferRepository::new(state.pool()).create(&offer).await {
            Ok(created) => {
                tracing::info!(date = %created.date, placement = %created.placement, "Offer added");
                let date = created.date.to_string();
                add_breadcrumb("offers", "Added offer", Some(&[("date", date.as_str())]));
            }
            Err(RepositoryError::Conflict(msg)) => {
                tracing::warn!(date = %offer.date, "Failed to add offer: {msg}");
            }
            Err(e) => {
                tracing::error!(date = %offer.date, "Failed to add offer: {e}");
            }
        },
        Err(e) => {
            tracing::warn!(date = %form.date, placement = %form.placement, "Failed to add offer: {e}");
        }
    }

    render(&state).await
}
