//! Offer trend web application library.
//!
//! Records job-offer placements per date in SQLite, fits a least-squares
//! line through them, and serves the predicted zero-crossing date along
//! with a scatter plot. Exposed as a library so the CLI and the integration
//! tests can share the store and router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod plot;
pub mod routes;
pub mod state;
