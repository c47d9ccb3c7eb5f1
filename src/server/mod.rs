//! HTTP server wrapper around the coordinate core.
//!
//! Exposes extraction and metrics as a small JSON service.  Requests are
//! independent; the only shared state is the immutable keyword table, so
//! handlers run in parallel without coordination.
//!
//! # Endpoints
//!
//! - `GET  /health`  -- Liveness probe
//! - `POST /analyze` -- Analyze text, returning coordinate and metrics
//! - `GET  /lexicon` -- The active keyword table grouped by axis

pub mod routes;

pub use routes::{app_router, AppState};
