// src/analysis/diagnostic.rs
//
// Structure vs energy: is a method's energy error explained by a bad geometry?

use super::projection::{Abscissa, ChartProjection, Guide, Series, SeriesKind, Zone};
use crate::model::{EnergyDataset, StructureDataset};
use serde::{Deserialize, Serialize};

/// Axis limits extend this far past the larger of data max and tolerance
pub const LIMIT_HEADROOM: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    pub rmsd: f64,   // Å
    pub energy: f64, // kcal/mol
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { rmsd: 0.1, energy: 1.0 }
    }
}

pub fn classify(rmsd: f64, abs_error: f64, tol: &Tolerances) -> Zone {
    if rmsd > tol.rmsd {
        Zone::StructuralFailure
    } else if abs_error > tol.energy {
        Zone::ElectronicError
    } else {
        Zone::Safe
    }
}

/// One joined (structure, energy) observation
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticPoint {
    pub system: String,
    pub method: String,
    pub rmsd: f64,
    pub abs_error: f64,
}

/// Inner join on system; drops the benchmark itself and pairs with no finite energy error
pub fn join(energy: &EnergyDataset, structures: &StructureDataset, benchmark: &str) -> Vec<DiagnosticPoint> {
    if energy.method_index(benchmark).is_none() {
        return Vec::new();
    }
    structures
        .records
        .iter()
        .filter(|s| s.method != benchmark && energy.method_index(&s.method).is_some())
        .filter_map(|s| {
            let rec = energy.find(&s.system)?;
            let err = (energy.value(rec, &s.method) - energy.value(rec, benchmark)).abs();
            if !err.is_finite() || !s.rmsd.is_finite() {
                return None;
            }
            Some(DiagnosticPoint {
                system: s.system.clone(),
                method: s.method.clone(),
                rmsd: s.rmsd,
                abs_error: err,
            })
        })
        .collect()
}

pub fn project(
    energy: &EnergyDataset,
    structures: &StructureDataset,
    benchmark: &str,
    tol: &Tolerances,
) -> ChartProjection {
    let mut chart = ChartProjection::new(
        format!("Diagnostic: Structure vs Energy (Benchmark: {})", benchmark),
        "RMSD (Å)",
        "Absolute Energy Error (kcal/mol)",
    );

    let points = join(energy, structures, benchmark);
    for method in structures.methods() {
        let group: Vec<&DiagnosticPoint> = points.iter().filter(|p| p.method == method).collect();
        if group.is_empty() {
            continue;
        }
        chart.series.push(Series {
            name: method,
            kind: SeriesKind::Scatter,
            x: Abscissa::Values(group.iter().map(|p| p.rmsd).collect()),
            y: group.iter().map(|p| p.abs_error).collect(),
            labels: group.iter().map(|p| p.system.clone()).collect(),
        });
    }

    let max_rmsd = points.iter().map(|p| p.rmsd).fold(0.0, f64::max);
    let max_err = points.iter().map(|p| p.abs_error).fold(0.0, f64::max);
    let x_limit = max_rmsd.max(tol.rmsd) * LIMIT_HEADROOM;
    let y_limit = max_err.max(tol.energy) * LIMIT_HEADROOM;

    chart.guides.push(Guide::Band { x0: 0.0, x1: tol.rmsd, y0: 0.0, y1: tol.energy, zone: Zone::Safe });
    chart.guides.push(Guide::Band { x0: 0.0, x1: tol.rmsd, y0: tol.energy, y1: y_limit, zone: Zone::ElectronicError });
    chart.guides.push(Guide::Band { x0: tol.rmsd, x1: x_limit, y0: 0.0, y1: y_limit, zone: Zone::StructuralFailure });
    chart.guides.push(Guide::VLine { x: tol.rmsd, label: "RMSD Tol".to_string() });
    chart.guides.push(Guide::HLine { y: tol.energy, label: "E Tol".to_string() });

    chart.x_range = Some((0.0, x_limit));
    chart.y_range = Some((0.0, y_limit));
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnergyRecord, StructureRecord};

    fn energy() -> EnergyDataset {
        EnergyDataset::new(
            vec!["Ref".into(), "M1".into(), "M2".into()],
            vec![
                EnergyRecord { system: "A".into(), values: vec![10.0, 10.5, 13.0] },
                EnergyRecord { system: "B".into(), values: vec![20.0, f64::NAN, 19.0] },
            ],
        )
    }

    fn structures() -> StructureDataset {
        let rec = |s: &str, m: &str, rmsd: f64| StructureRecord { system: s.into(), method: m.into(), rmsd };
        StructureDataset::new(vec![
            rec("A", "M1", 0.05),
            rec("A", "M2", 0.02),
            rec("B", "M1", 0.30),
            rec("B", "M2", 0.25),
            rec("C", "M1", 0.01),
            rec("A", "Ref", 0.0),
            rec("A", "Unknown", 0.0),
        ])
    }

    #[test]
    fn test_classify() {
        let tol = Tolerances::default();
        assert_eq!(classify(0.05, 0.5, &tol), Zone::Safe);
        assert_eq!(classify(0.05, 2.5, &tol), Zone::ElectronicError);
        assert_eq!(classify(0.2, 0.5, &tol), Zone::StructuralFailure);
        assert_eq!(classify(0.1, 1.0, &tol), Zone::Safe);
    }

    #[test]
    fn test_join_drops_unmatched() {
        let points = join(&energy(), &structures(), "Ref");
        let keys: Vec<(&str, &str)> = points.iter().map(|p| (p.system.as_str(), p.method.as_str())).collect();
        assert_eq!(keys, vec![("A", "M1"), ("A", "M2"), ("B", "M2")]);
        assert!((points[1].abs_error - 3.0).abs() < 1e-12);
        assert!(join(&energy(), &structures(), "Nope").is_empty());
    }

    #[test]
    fn test_zones_and_limits() {
        let tol = Tolerances { rmsd: 0.1, energy: 1.0 };
        let chart = project(&energy(), &structures(), "Ref", &tol);

        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series("M2").unwrap().labels, vec!["A", "B"]);

        let (_, x_max) = chart.x_range.unwrap();
        let (_, y_max) = chart.y_range.unwrap();
        assert!((x_max - 0.25 * 1.2).abs() < 1e-12);
        assert!((y_max - 3.0 * 1.2).abs() < 1e-12);

        let bands = chart.guides.iter().filter(|g| matches!(g, Guide::Band { .. })).count();
        assert_eq!(bands, 3);
        assert!(chart.guides.iter().any(|g| matches!(g, Guide::VLine { x, .. } if *x == 0.1)));
    }
}
