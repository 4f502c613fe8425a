//! Placement (rank) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Placement`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The input string is empty.
    #[error("placement cannot be empty")]
    Empty,
    /// The input is not a base-10 integer.
    #[error("placement must be a whole number, got {0:?}")]
    NotAnInteger(String),
}

/// The rank an offer held on a given date.
///
/// Lower is better; a trend that reaches zero is the prediction target.
///
/// ## Examples
///
/// ```
/// use offer_trend_core::Placement;
///
/// assert_eq!(Placement::parse(" 12 ").unwrap().get(), 12);
/// assert!(Placement::parse("").is_err());
/// assert!(Placement::parse("twelve").is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Placement(i64);

impl Placement {
    /// Wrap a raw placement value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse a placement from form input, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or not an integer.
    pub fn parse(s: &str) -> Result<Self, PlacementError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PlacementError::Empty);
        }

        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| PlacementError::NotAnInteger(trimmed.to_owned()))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the value as `f64` for regression.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Ranks never approach 2^53
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for Placement {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Placement> for i64 {
    fn from(placement: Placement) -> Self {
        placement.0
    }
}

// SQLx support (with sqlite feature)
#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for Placement {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <i64 as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for Placement {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let value = <i64 as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        Ok(Self(value))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for Placement {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Sqlite as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Placement::parse("7").unwrap(), Placement::new(7));
        assert_eq!(Placement::parse("  42\n").unwrap(), Placement::new(42));
        assert_eq!(Placement::parse("-3").unwrap(), Placement::new(-3));
        assert_eq!(Placement::parse("0").unwrap(), Placement::new(0));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Placement::parse(""), Err(PlacementError::Empty));
        assert_eq!(Placement::parse("   "), Err(PlacementError::Empty));
    }

    #[test]
    fn test_parse_not_an_integer() {
        assert!(matches!(
            Placement::parse("3.5"),
            Err(PlacementError::NotAnInteger(s)) if s == "3.5"
        ));
        assert!(Placement::parse("first").is_err());
        assert!(Placement::parse("1e3").is_err());
    }

    #[test]
    fn test_display_and_conversions() {
        let placement = Placement::from(15);
        assert_eq!(placement.to_string(), "15");
        assert_eq!(i64::from(placement), 15);
        assert!((placement.as_f64() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_transparent() {
        let placement = Placement::new(9);
        let json = serde_json::to_string(&placement).unwrap();
        assert_eq!(json, "9");
    }
}
