// src/analysis/grouped.rs

use super::projection::{Abscissa, ChartProjection, Series, SeriesKind};
use crate::model::EnergyDataset;

/// Option shown first in the system filter
pub const ALL_SYSTEMS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SystemFilter {
    #[default]
    All,
    System(String),
}

impl SystemFilter {
    pub fn from_choice(choice: &str) -> Self {
        if choice == ALL_SYSTEMS {
            SystemFilter::All
        } else {
            SystemFilter::System(choice.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SystemFilter::All => ALL_SYSTEMS,
            SystemFilter::System(s) => s,
        }
    }

    pub fn accepts(&self, system: &str) -> bool {
        match self {
            SystemFilter::All => true,
            SystemFilter::System(s) => s == system,
        }
    }
}

/// One bar series per method over the (filtered) systems
pub fn project(data: &EnergyDataset, filter: &SystemFilter) -> ChartProjection {
    let mut chart = ChartProjection::new(
        format!("Method Comparison ({})", filter.label()),
        "System",
        "Relative Energy (kcal/mol)",
    );

    let kept: Vec<_> = data.records.iter().filter(|r| filter.accepts(&r.system)).collect();
    let systems: Vec<String> = kept.iter().map(|r| r.system.clone()).collect();

    for method in &data.methods {
        chart.series.push(Series {
            name: method.clone(),
            kind: SeriesKind::Bar,
            x: Abscissa::Categories(systems.clone()),
            y: kept.iter().map(|r| data.value(r, method)).collect(),
            labels: systems.clone(),
        });
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnergyRecord;

    fn data() -> EnergyDataset {
        EnergyDataset::new(
            vec!["X".into(), "Y".into()],
            vec![
                EnergyRecord { system: "A".into(), values: vec![1.0, 2.0] },
                EnergyRecord { system: "B".into(), values: vec![3.0, 4.0] },
                EnergyRecord { system: "C".into(), values: vec![5.0, 6.0] },
            ],
        )
    }

    #[test]
    fn test_all_keeps_everything() {
        let chart = project(&data(), &SystemFilter::from_choice("All"));
        assert_eq!(chart.series.len(), 2);
        assert!(chart.series.iter().all(|s| s.len() == 3));
    }

    #[test]
    fn test_single_system_filter() {
        let chart = project(&data(), &SystemFilter::from_choice("B"));
        for s in &chart.series {
            assert_eq!(s.x, Abscissa::Categories(vec!["B".into()]));
        }
        assert_eq!(chart.series("X").unwrap().y, vec![3.0]);
        assert_eq!(chart.series("Y").unwrap().y, vec![4.0]);
    }

    #[test]
    fn test_unknown_system_is_empty() {
        let chart = project(&data(), &SystemFilter::System("Z".into()));
        assert!(chart.is_empty());
    }
}
