pub mod chart;
pub mod export;
pub mod theme;

// Re-export specific functions to keep the API clean for the rest of the app
pub use chart::{draw_chart, ChartStyle};
pub use export::{export_chart, ExportFormat};
pub use theme::ChartTheme;
