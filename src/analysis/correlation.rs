// src/analysis/correlation.rs

use super::projection::{finite_bounds, Abscissa, ChartProjection, Guide, Series, SeriesKind};
use crate::model::EnergyDataset;

/// Scatter of every other method against `x_method`.
///
/// The y = x diagonal spans the min/max of *all* values in the dataset, not
/// just the plotted pair, so every method is drawn against the same line.
pub fn project(data: &EnergyDataset, x_method: &str) -> ChartProjection {
    let mut chart = ChartProjection::new(
        format!("Correlation vs {}", x_method),
        format!("{} (kcal/mol)", x_method),
        "Method Energy (kcal/mol)",
    );

    let xs = data.column(x_method);
    let systems = data.systems();

    for method in data.methods.iter().filter(|m| *m != x_method) {
        chart.series.push(Series {
            name: method.clone(),
            kind: SeriesKind::Scatter,
            x: Abscissa::Values(xs.clone()),
            y: data.column(method),
            labels: systems.clone(),
        });
    }

    if let Some((min, max)) = finite_bounds(data.finite_values()) {
        chart.guides.push(Guide::Diagonal { min, max });
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnergyRecord;

    #[test]
    fn test_diagonal_uses_whole_dataset() {
        let data = EnergyDataset::new(
            vec!["X".into(), "Y".into()],
            vec![EnergyRecord { system: "A".into(), values: vec![5.0, 15.0] }],
        );
        let chart = project(&data, "X");
        assert_eq!(chart.diagonal(), Some((5.0, 15.0)));
    }

    #[test]
    fn test_diagonal_includes_unplotted_columns() {
        let data = EnergyDataset::new(
            vec!["X".into(), "Y".into(), "Z".into()],
            vec![
                EnergyRecord { system: "A".into(), values: vec![5.0, 6.0, -40.0] },
                EnergyRecord { system: "B".into(), values: vec![7.0, 8.0, f64::NAN] },
            ],
        );
        let chart = project(&data, "Y");
        assert_eq!(chart.diagonal(), Some((-40.0, 8.0)));

        let x = chart.series("X").unwrap();
        assert_eq!(x.x, Abscissa::Values(vec![6.0, 8.0]));
        assert_eq!(x.y, vec![5.0, 7.0]);
        assert_eq!(x.labels, vec!["A", "B"]);
        assert!(chart.series("Y").is_none());
    }
}
