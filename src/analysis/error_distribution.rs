// src/analysis/error_distribution.rs

use super::projection::{Abscissa, ChartProjection, Guide, Series, SeriesKind};
use crate::model::EnergyDataset;

/// Conventional accuracy threshold, kcal/mol
pub const CHEMICAL_ACCURACY: f64 = 1.0;

/// |E(M) - E(benchmark)| for every record, NaN where either side is missing
pub fn absolute_errors(data: &EnergyDataset, method: &str, benchmark: &str) -> Vec<f64> {
    data.column(method)
        .iter()
        .zip(data.column(benchmark).iter())
        .map(|(m, b)| (m - b).abs())
        .collect()
}

/// One distribution per non-benchmark method plus the chemical accuracy line
pub fn project(data: &EnergyDataset, benchmark: &str) -> ChartProjection {
    let mut chart = ChartProjection::new(
        format!("Error Distribution (Benchmark: {})", benchmark),
        "Method",
        "Absolute Error (kcal/mol)",
    );

    for method in data.methods.iter().filter(|m| *m != benchmark) {
        chart.series.push(Series {
            name: method.clone(),
            kind: SeriesKind::Distribution,
            x: Abscissa::Slot,
            y: absolute_errors(data, method, benchmark),
            labels: data.systems(),
        });
    }

    chart.guides.push(Guide::HLine {
        y: CHEMICAL_ACCURACY,
        label: "Chemical accuracy".to_string(),
    });
    chart
}
