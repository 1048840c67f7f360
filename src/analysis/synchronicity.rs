// src/analysis/synchronicity.rs

use super::projection::{finite_bounds, Abscissa, ChartProjection, Guide, Series, SeriesKind};
use crate::model::BondDataset;

/// Relative padding applied to the observed min/max of the bond lengths
pub const AXIS_PADDING: f64 = 0.05;

/// R1 vs R2 per method on equal, padded axes with the y = x line.
/// Points on the diagonal are perfectly synchronous transition states.
pub fn project(data: &BondDataset) -> ChartProjection {
    let mut chart = ChartProjection::new("Geometric Synchronicity", "R1 (Å)", "R2 (Å)");

    for method in data.methods() {
        let group: Vec<_> = data.records.iter().filter(|r| r.method == method).collect();
        chart.series.push(Series {
            name: method,
            kind: SeriesKind::Scatter,
            x: Abscissa::Values(group.iter().map(|r| r.r1).collect()),
            y: group.iter().map(|r| r.r2).collect(),
            labels: group.iter().map(|r| r.system.clone()).collect(),
        });
    }

    let lengths = data.records.iter().flat_map(|r| [r.r1, r.r2]);
    if let Some((min, max)) = finite_bounds(lengths) {
        let lo = min * (1.0 - AXIS_PADDING);
        let hi = max * (1.0 + AXIS_PADDING);
        chart.x_range = Some((lo, hi));
        chart.y_range = Some((lo, hi));
        chart.guides.push(Guide::Diagonal { min: lo, max: hi });
    }
    chart.square = true;
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BondRecord;

    fn rec(system: &str, method: &str, r1: f64, r2: f64) -> BondRecord {
        BondRecord { system: system.into(), method: method.into(), r1, r2 }
    }

    #[test]
    fn test_groups_and_padding() {
        let data = BondDataset::new(vec![
            rec("A", "M1", 2.0, 2.2),
            rec("A", "M2", 1.9, 2.4),
            rec("B", "M1", 2.1, 2.0),
        ]);
        let chart = project(&data);

        assert_eq!(chart.series.len(), 2);
        let m1 = chart.series("M1").unwrap();
        assert_eq!(m1.finite_points(), vec![(2.0, 2.2), (2.1, 2.0)]);
        assert_eq!(m1.labels, vec!["A", "B"]);

        let (lo, hi) = chart.x_range.unwrap();
        assert!((lo - 1.9 * 0.95).abs() < 1e-12);
        assert!((hi - 2.4 * 1.05).abs() < 1e-12);
        assert_eq!(chart.x_range, chart.y_range);
        assert_eq!(chart.diagonal(), Some((lo, hi)));
        assert!(chart.square);
    }

    #[test]
    fn test_empty_has_no_range() {
        let chart = project(&BondDataset::default());
        assert!(chart.series.is_empty());
        assert!(chart.x_range.is_none());
        assert!(chart.diagonal().is_none());
    }
}
