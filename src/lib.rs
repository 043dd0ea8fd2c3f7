//! Deterministic predictive analytics for healthcare revenue-cycle management.
//!
//! The crate hosts the four pure computation engines behind the RCM back
//! office: per-account collectability scoring, portfolio segmentation into
//! recovery tiers, seasonality-aware revenue and cash-flow forecasting, and
//! benchmarked operational KPIs. Persistence, HTTP, auth, and EDI transport
//! live with the orchestrating service; this crate only exchanges plain
//! records with it.

pub mod analytics;
pub mod error;

pub use error::{DateRange, ValidationError};
