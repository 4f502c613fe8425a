//! Core types for Offer Trend.
//!
//! This module provides type-safe wrappers for the offer domain.

pub mod offer;
pub mod placement;

pub use offer::{Offer, OfferInputError, parse_offer_date};
pub use placement::{Placement, PlacementError};
