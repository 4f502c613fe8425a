//! Categorical date axis for the placement plot.
//!
//! Dates are spaced unevenly, so the plot puts them on ordinal positions
//! `1..=k` and labels ticks with the original dates.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::regression::LinearFit;
use crate::types::{Offer, Placement};

/// One scatter point on the ordinal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotPoint {
    /// 1-based position of the point's date among the distinct dates.
    pub ordinal: u32,
    /// Placement recorded on that date.
    pub placement: Placement,
}

/// Points and axis labels ready for plotting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotSeries {
    points: Vec<PlotPoint>,
    labels: BTreeMap<u32, NaiveDate>,
}

impl PlotSeries {
    /// Points in ascending date order.
    #[must_use]
    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    /// Ordinal position to calendar date.
    #[must_use]
    pub const fn labels(&self) -> &BTreeMap<u32, NaiveDate> {
        &self.labels
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there is nothing to plot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of distinct dates, which is also the largest ordinal.
    #[must_use]
    pub fn distinct_dates(&self) -> u32 {
        self.labels.keys().next_back().copied().unwrap_or(0)
    }

    /// Regression of placement on ordinal position, drawn over the scatter.
    #[must_use]
    pub fn trend_line(&self) -> Option<LinearFit> {
        let points: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|p| (f64::from(p.ordinal), p.placement.as_f64()))
            .collect();
        LinearFit::least_squares(&points)
    }

    /// Axis label for a tick at `x`.
    ///
    /// Only integral ticks that map to a known ordinal get a label; every
    /// other tick is blank.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Checked integral and in range
    pub fn tick_label(&self, x: f64) -> String {
        if !x.is_finite() || x.fract() != 0.0 || x < 1.0 || x > f64::from(u32::MAX) {
            return String::new();
        }
        self.labels
            .get(&(x as u32))
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// Sort offers by date and number the distinct dates from 1.
///
/// Repeated dates share one ordinal, and the sort is stable so their
/// relative order is preserved.
#[must_use]
pub fn prepare_plot_series(offers: &[Offer]) -> PlotSeries {
    let mut sorted = offers.to_vec();
    sorted.sort_by_key(|offer| offer.date);

    let mut series = PlotSeries::default();
    let mut ordinal = 0_u32;
    let mut previous: Option<NaiveDate> = None;

    for offer in sorted {
        if previous != Some(offer.date) {
            ordinal += 1;
            series.labels.insert(ordinal, offer.date);
            previous = Some(offer.date);
        }
        series.points.push(PlotPoint {
            ordinal,
            placement: offer.placement,
        });
    }

    series
}
