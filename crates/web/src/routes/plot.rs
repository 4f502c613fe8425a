//! Plot image route.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use offer_trend_core::prepare_plot_series;

use crate::db::OfferRepository;
use crate::error::{AppError, Result};
use crate::plot::render_png;
use crate::state::AppState;

/// Render the offer scatter plot with its regression line.
///
/// GET /plot.png
#[instrument(skip(state))]
pub async fn plot_png(State(state): State<AppState>) -> Result<Response> {
    let offers = OfferRepository::new(state.pool()).list_all().await?;
    let series = prepare_plot_series(&offers);

    // Rasterizing is CPU-bound
    let bytes = tokio::task::spawn_blocking(move || render_png(&series))
        .await
        .map_err(|e| AppError::Internal(format!("plot task failed: {e}")))??;

    tracing::debug!(points = offers.len(), bytes = bytes.len(), "Plot rendered");

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        bytes,
    )
        .into_response())
}
