//! Predict when placement reaches zero.

use chrono::{DateTime, NaiveDate};

use super::regression::LinearFit;
use crate::types::Offer;

/// Seconds since the Unix epoch at UTC midnight of `date`.
#[must_use]
pub fn date_timestamp(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp()
}

/// UTC calendar date containing the epoch second `timestamp`.
///
/// Fractional seconds are floored. Returns `None` for non-finite values or
/// values outside chrono's range.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)] // Range-checked below
pub fn date_from_timestamp(timestamp: f64) -> Option<NaiveDate> {
    if !timestamp.is_finite() {
        return None;
    }
    let seconds = timestamp.floor();
    if seconds < i64::MIN as f64 || seconds > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(seconds as i64, 0).map(|dt| dt.date_naive())
}

/// Fit placement against epoch seconds.
///
/// Returns `None` when no line can be fitted: fewer than two records, a
/// single distinct date, or a non-finite slope.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Epoch seconds fit comfortably in f64
pub fn fit_trend(offers: &[Offer]) -> Option<LinearFit> {
    let points: Vec<(f64, f64)> = offers
        .iter()
        .map(|offer| (date_timestamp(offer.date) as f64, offer.placement.as_f64()))
        .collect();
    LinearFit::least_squares(&points)
}

/// Date on which the fitted placement trend crosses zero.
///
/// Returns `None` ("no prediction") for empty or single-record sets, a
/// degenerate fit, a flat trend, or a crossing that falls outside the
/// representable date range. Never panics.
#[must_use]
pub fn predict_zero_crossing(offers: &[Offer]) -> Option<NaiveDate> {
    let fit = fit_trend(offers)?;
    let crossing = fit.x_intercept()?;
    date_from_timestamp(crossing)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Placement;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn offer(y: i32, m: u32, d: u32, placement: i64) -> Offer {
        Offer::new(date(y, m, d), Placement::new(placement))
    }

    #[test]
    fn test_timestamp_round_trip_at_midnight() {
        let day = date(2021, 1, 1);
        assert_eq!(date_timestamp(day), 1_609_459_200);
        assert_eq!(date_from_timestamp(1_609_459_200.0), Some(day));
        // Late in the same day still maps back to it
        assert_eq!(date_from_timestamp(1_609_459_200.0 + 86_399.9), Some(day));
        // One second before midnight is the previous day
        assert_eq!(date_from_timestamp(1_609_459_199.5), Some(date(2020, 12, 31)));
    }

    #[test]
    fn test_date_from_timestamp_rejects_non_finite() {
        assert_eq!(date_from_timestamp(f64::NAN), None);
        assert_eq!(date_from_timestamp(f64::INFINITY), None);
        assert_eq!(date_from_timestamp(1e300), None);
    }

    #[test]
    fn test_monthly_decline() {
        let offers = [
            offer(2021, 1, 1, 10),
            offer(2021, 2, 1, 8),
            offer(2021, 3, 1, 6),
        ];
        let fit = fit_trend(&offers).unwrap();
        assert!(fit.slope < 0.0);

        // Least squares over the actual day gaps (31, 28) lands on May 29
        assert_eq!(predict_zero_crossing(&offers), Some(date(2021, 5, 29)));
    }

    #[test]
    fn test_prediction_matches_x_intercept() {
        let offers = [
            offer(2022, 6, 1, 40),
            offer(2022, 6, 9, 37),
            offer(2022, 6, 20, 29),
            offer(2022, 7, 4, 25),
        ];
        let fit = fit_trend(&offers).unwrap();
        let expected = date_from_timestamp(-fit.intercept / fit.slope).unwrap();
        assert_eq!(predict_zero_crossing(&offers), Some(expected));
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let sorted = [
            offer(2021, 1, 1, 10),
            offer(2021, 2, 1, 8),
            offer(2021, 3, 1, 6),
        ];
        let shuffled = [sorted[2], sorted[0], sorted[1]];
        assert_eq!(
            predict_zero_crossing(&sorted),
            predict_zero_crossing(&shuffled)
        );
    }

    #[test]
    fn test_rising_placement_crosses_in_the_past() {
        // +2 per day from 3 on Jan 10 was zero at noon on Jan 8
        let offers = [offer(2021, 1, 10, 3), offer(2021, 1, 11, 5)];
        assert_eq!(predict_zero_crossing(&offers), Some(date(2021, 1, 8)));
    }

    #[test]
    fn test_empty_has_no_prediction() {
        assert_eq!(predict_zero_crossing(&[]), None);
        assert!(fit_trend(&[]).is_none());
    }

    #[test]
    fn test_single_record_has_no_prediction() {
        assert_eq!(predict_zero_crossing(&[offer(2021, 1, 1, 10)]), None);
    }

    #[test]
    fn test_flat_trend_has_no_prediction() {
        let offers = [offer(2021, 1, 1, 5), offer(2021, 1, 2, 5), offer(2021, 1, 3, 5)];
        assert!(fit_trend(&offers).is_some());
        assert_eq!(predict_zero_crossing(&offers), None);
    }

    #[test]
    fn test_repeated_single_date_has_no_prediction() {
        let offers = [offer(2021, 1, 1, 5), offer(2021, 1, 1, 9)];
        assert_eq!(predict_zero_crossing(&offers), None);
    }
}
