//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                 - Offer table, add form, predicted zero-crossing date
//! POST /                 - Add an offer, then render the same page
//! POST /update           - Move an offer to a new date (redirects to /)
//! POST /delete           - Remove an offer (redirects to /)
//! GET  /plot.png         - Scatter plot with regression line
//!
//! # JSON API
//! GET  /api/offers       - Every offer, oldest first
//! GET  /api/offers/{date} - One offer (400 for a bad date, 404 if absent)
//! GET  /api/prediction   - Predicted date and fit statistics
//! ```

pub mod api;
pub mod home;
pub mod offers;
pub mod plot;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/offers", get(api::list_offers))
        .route("/offers/{date}", get(api::get_offer))
        .route("/prediction", get(api::prediction))
}

/// Create all routes for the web server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home).post(home::add_offer))
        .route("/update", post(offers::update))
        .route("/delete", post(offers::delete))
        .route("/plot.png", get(plot::plot_png))
        .nest("/api", api_routes())
}
