//! Web server for symptom-based disease prediction.
//!
//! Exposes the matcher over a small JSON API:
//!
//! - `POST /api/predict` with `{"symptoms": ["fever", "cough"]}` returns the
//!   ranked candidates, total symptom count, and processing time
//! - `GET /api/diseases` lists the loaded disease table
//! - `GET /health` (and `/`) report service status and table provenance
//!
//! The router carries security response headers, a request timeout, a
//! concurrency limit, and a body-size cap; the serve path adds per-IP rate
//! limiting on top.

pub mod server;
