//! Trend estimation over stored offers.
//!
//! Both operations are pure and take the full record set:
//!
//! - [`predict_zero_crossing`] fits placement against time and returns the
//!   day the fitted line reaches zero.
//! - [`prepare_plot_series`] remaps dates onto ordinal positions so a plot can
//!   use a categorical date axis.

pub mod plot_series;
pub mod regression;
pub mod zero_crossing;

pub use plot_series::{PlotPoint, PlotSeries, prepare_plot_series};
pub use regression::LinearFit;
pub use zero_crossing::{date_from_timestamp, date_timestamp, fit_trend, predict_zero_crossing};
