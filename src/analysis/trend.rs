// src/analysis/trend.rs

use super::projection::{Abscissa, ChartProjection, Series, SeriesKind};
use crate::model::{EnergyDataset, EnergyRecord};
use std::cmp::Ordering;

/// Ascending, NaN last
fn cmp_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Records sorted by one method. `sort_by` is stable, so ties keep file order.
pub fn sorted_records<'a>(data: &'a EnergyDataset, sort_by: &str) -> Vec<&'a EnergyRecord> {
    let mut records: Vec<&EnergyRecord> = data.records.iter().collect();
    records.sort_by(|a, b| cmp_nan_last(data.value(a, sort_by), data.value(b, sort_by)));
    records
}

/// One line per method (the sort key included) over the sorted systems
pub fn project(data: &EnergyDataset, sort_by: &str) -> ChartProjection {
    let mut chart = ChartProjection::new(
        format!("Energy Trend (sorted by {})", sort_by),
        "System",
        "Relative Energy (kcal/mol)",
    );

    let sorted = sorted_records(data, sort_by);
    let systems: Vec<String> = sorted.iter().map(|r| r.system.clone()).collect();

    for method in &data.methods {
        chart.series.push(Series {
            name: method.clone(),
            kind: SeriesKind::Line,
            x: Abscissa::Categories(systems.clone()),
            y: sorted.iter().map(|r| data.value(r, method)).collect(),
            labels: systems.clone(),
        });
    }
    chart
}
