// src/analysis/heatmap.rs

use super::projection::{ChartProjection, Heatmap};
use crate::model::BondDataset;

/// |R1 - R2| for every (system, method) pair.
///
/// Pairs with no record read as 0, the same as a perfectly synchronous TS.
/// Duplicated pairs use the first record.
pub fn project(data: &BondDataset) -> ChartProjection {
    let mut chart = ChartProjection::new("Asynchronicity |R1 - R2| (Å)", "Method", "System");

    let rows = data.systems();
    let columns = data.methods();
    let values: Vec<Vec<f64>> = rows
        .iter()
        .map(|system| {
            columns
                .iter()
                .map(|method| data.find(system, method).map_or(0.0, |r| r.asynchronicity()))
                .collect()
        })
        .collect();

    chart.heatmap = Some(Heatmap { rows, columns, values, reverse_rows: true });
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
    fn test_missing_pair_is_zero() {
        let data = BondDataset::new(vec![rec("A", "M1", 2.0, 2.25), rec("B", "M2", 2.1, 2.0)]);
        let hm = project(&data).heatmap.unwrap();

        assert_eq!(hm.rows, vec!["A", "B"]);
        assert_eq!(hm.columns, vec!["M1", "M2"]);
        assert_eq!(hm.cell("A", "M2"), Some(0.0));
        assert_eq!(hm.cell("B", "M1"), Some(0.0));
        assert_eq!(hm.cell("A", "M1"), Some((2.0f64 - 2.25).abs()));
        assert!((hm.cell("B", "M2").unwrap() - 0.1).abs() < 1e-12);
        assert!(hm.reverse_rows);
    }

    #[test]
    fn test_duplicate_pair_first_wins() {
        let data = BondDataset::new(vec![rec("A", "M1", 2.0, 2.5), rec("A", "M1", 2.0, 2.0)]);
        let hm = project(&data).heatmap.unwrap();
        assert_eq!(hm.rows.len(), 1);
        assert_eq!(hm.cell("A", "M1"), Some(0.5));
    }
}
