//! HTTP middleware stack for the web server.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (`http_request` span with method, uri, status, latency)
//! 3. Request ID (reuse or generate `x-request-id`, record it on the span)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
