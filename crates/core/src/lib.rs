//! Offer Trend Core - Domain types and trend estimation.
//!
//! This crate is shared by the components of Offer Trend:
//! - `web` - The offer tracking site (table, prediction, plot)
//! - `cli` - Command-line tools for migrations and quick queries
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP. Regression and plot preparation can be tested
//! without a running store.
//!
//! # Modules
//!
//! - [`types`] - `Offer`, `Placement`, and form input parsing
//! - [`trend`] - Least-squares fit, zero-crossing prediction, plot series

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod trend;
pub mod types;

pub use trend::{
    LinearFit, PlotPoint, PlotSeries, fit_trend, predict_zero_crossing, prepare_plot_series,
};
pub use types::*;
