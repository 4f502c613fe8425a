//! Offer domain type and form input parsing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::placement::{Placement, PlacementError};

/// Date format accepted from forms and stored in the database.
pub const OFFER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur when building an [`Offer`] from user input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OfferInputError {
    /// The date field is empty.
    #[error("date cannot be empty")]
    EmptyDate,
    /// The date field is not `YYYY-MM-DD`.
    #[error("date must be YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),
    /// The placement field is invalid.
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// A dated placement observation.
///
/// `date` is the identity of an offer; the store holds at most one
/// placement per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Day the placement was observed.
    pub date: NaiveDate,
    /// Rank on that day.
    pub placement: Placement,
}

impl Offer {
    /// Create an offer from already-validated parts.
    #[must_use]
    pub const fn new(date: NaiveDate, placement: Placement) -> Self {
        Self { date, placement }
    }

    /// Build an offer from raw form fields.
    ///
    /// # Errors
    ///
    /// Returns `OfferInputError` if either field fails to parse.
    pub fn parse(date: &str, placement: &str) -> Result<Self, OfferInputError> {
        Ok(Self {
            date: parse_offer_date(date)?,
            placement: Placement::parse(placement)?,
        })
    }
}

/// Parse a `YYYY-MM-DD` date from form input, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns `OfferInputError::EmptyDate` or `OfferInputError::InvalidDate`.
pub fn parse_offer_date(s: &str) -> Result<NaiveDate, OfferInputError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(OfferInputError::EmptyDate);
    }

    NaiveDate::parse_from_str(trimmed, OFFER_DATE_FORMAT)
        .map_err(|_| OfferInputError::InvalidDate(trimmed.to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offer() {
        let offer = Offer::parse("2021-03-01", "6").unwrap();
        assert_eq!(offer.date, NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
        assert_eq!(offer.placement, Placement::new(6));
    }

    #[test]
    fn test_parse_offer_trims_fields() {
        let offer = Offer::parse(" 2021-03-01 ", " 6 ").unwrap();
        assert_eq!(offer.placement.get(), 6);
    }

    #[test]
    fn test_parse_offer_date_errors() {
        assert_eq!(parse_offer_date(""), Err(OfferInputError::EmptyDate));
        assert!(matches!(
            parse_offer_date("03/01/2021"),
            Err(OfferInputError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_offer_date("2021-02-30"),
            Err(OfferInputError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_parse_offer_placement_error() {
        let err = Offer::parse("2021-03-01", "sixth").unwrap_err();
        assert!(matches!(
            err,
            OfferInputError::Placement(PlacementError::NotAnInteger(_))
        ));
    }
}
