// src/analysis/mod.rs
pub mod projection;
pub mod stats;

pub mod correlation;
pub mod diagnostic;
pub mod error_distribution;
pub mod grouped;
pub mod heatmap;
pub mod synchronicity;
pub mod trend;

pub use diagnostic::Tolerances;
pub use grouped::SystemFilter;
pub use projection::{Abscissa, ChartProjection, Guide, Heatmap, Series, SeriesKind, Zone};
