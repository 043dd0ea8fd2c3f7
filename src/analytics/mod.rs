//! Pure analytics engines composed by the orchestrating service.

pub mod forecasting;
pub mod kpi;
pub mod scoring;
pub mod segmentation;

pub use forecasting::{RevenueForecaster, SeasonalityModel, SeasonalityStore};
pub use kpi::{generate_kpi_dashboard, KpiDashboard, KpiResult};
pub use scoring::{AccountScoringFactors, CollectionPrediction, CollectionScorer, ScoringPolicy};
pub use segmentation::{PortfolioSegmenter, ReceivableAccount, SegmentationResult};
