// src/analysis/stats.rs

use super::diagnostic::{classify, DiagnosticPoint, Tolerances};
use super::error_distribution::{absolute_errors, CHEMICAL_ACCURACY};
use super::projection::Zone;
use crate::model::{BondDataset, EnergyDataset};

/// Error statistics of one method against the benchmark
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorStats {
    pub method: String,
    pub count: usize,
    pub mae: f64,
    pub rmse: f64,
    pub max_abs: f64,
    /// Fraction of systems within chemical accuracy
    pub within_accuracy: f64,
}

impl ErrorStats {
    pub fn from_errors(method: &str, errors: &[f64]) -> Self {
        let finite: Vec<f64> = errors.iter().copied().filter(|e| e.is_finite()).collect();
        let n = finite.len();
        if n == 0 {
            return Self {
                method: method.to_string(),
                count: 0,
                mae: f64::NAN,
                rmse: f64::NAN,
                max_abs: f64::NAN,
                within_accuracy: f64::NAN,
            };
        }
        let nf = n as f64;
        Self {
            method: method.to_string(),
            count: n,
            mae: finite.iter().sum::<f64>() / nf,
            rmse: (finite.iter().map(|e| e * e).sum::<f64>() / nf).sqrt(),
            max_abs: finite.iter().copied().fold(0.0, f64::max),
            within_accuracy: finite.iter().filter(|e| **e <= CHEMICAL_ACCURACY).count() as f64 / nf,
        }
    }
}

/// Stats for every non-benchmark method, in column order
pub fn energy_errors(data: &EnergyDataset, benchmark: &str) -> Vec<ErrorStats> {
    data.methods
        .iter()
        .filter(|m| *m != benchmark)
        .map(|m| ErrorStats::from_errors(m, &absolute_errors(data, m, benchmark)))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsyncStats {
    pub method: String,
    pub count: usize,
    pub mean: f64,
    pub max: f64,
}

/// Mean and max |R1 - R2| per method
pub fn bond_asynchronicity(data: &BondDataset) -> Vec<AsyncStats> {
    data.methods()
        .into_iter()
        .map(|method| {
            let diffs: Vec<f64> = data
                .records
                .iter()
                .filter(|r| r.method == method)
                .map(|r| r.asynchronicity())
                .filter(|d| d.is_finite())
                .collect();
            let count = diffs.len();
            let mean = if count > 0 { diffs.iter().sum::<f64>() / count as f64 } else { f64::NAN };
            let max = diffs.iter().copied().fold(f64::NAN, f64::max);
            AsyncStats { method, count, mean, max }
        })
        .collect()
}

/// Five-number summary used to draw a box plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxSummary {
    /// Quartiles by linear interpolation between order statistics; NaN ignored
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
        if v.is_empty() {
            return None;
        }
        v.sort_by(|a, b| a.total_cmp(b));
        let q = |p: f64| {
            let pos = p * (v.len() - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            v[lo] + (v[hi] - v[lo]) * (pos - lo as f64)
        };
        Some(Self {
            min: v[0],
            q1: q(0.25),
            median: q(0.5),
            q3: q(0.75),
            max: v[v.len() - 1],
        })
    }
}

/// Number of points per diagnostic zone, in (Safe, Electronic, Structural) order
pub fn zone_counts(points: &[DiagnosticPoint], tol: &Tolerances) -> [(Zone, usize); 3] {
    let mut counts = [
        (Zone::Safe, 0),
        (Zone::ElectronicError, 0),
        (Zone::StructuralFailure, 0),
    ];
    for p in points {
        let zone = classify(p.rmsd, p.abs_error, tol);
        if let Some(slot) = counts.iter_mut().find(|(z, _)| *z == zone) {
            slot.1 += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BondRecord, EnergyRecord};

    #[test]
    fn test_error_stats() {
        let s = ErrorStats::from_errors("M", &[0.5, 1.5, f64::NAN, 2.0]);
        assert_eq!(s.count, 3);
        assert!((s.mae - 4.0 / 3.0).abs() < 1e-12);
        assert!((s.rmse - ((0.25 + 2.25 + 4.0) / 3.0f64).sqrt()).abs() < 1e-12);
        assert_eq!(s.max_abs, 2.0);
        assert!((s.within_accuracy - 1.0 / 3.0).abs() < 1e-12);

        let empty = ErrorStats::from_errors("M", &[f64::NAN]);
        assert_eq!(empty.count, 0);
        assert!(empty.mae.is_nan());
    }

    #[test]
    fn test_energy_errors_skip_benchmark() {
        let data = EnergyDataset::new(
            vec!["X".into(), "Y".into()],
            vec![
                EnergyRecord { system: "A".into(), values: vec![10.0, 12.0] },
                EnergyRecord { system: "B".into(), values: vec![20.0, 18.0] },
            ],
        );
        let stats = energy_errors(&data, "X");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].method, "Y");
        assert_eq!(stats[0].mae, 2.0);
    }

    #[test]
    fn test_bond_asynchronicity() {
        let rec = |m: &str, r1: f64, r2: f64| BondRecord { system: "A".into(), method: m.into(), r1, r2 };
        let data = BondDataset::new(vec![rec("M1", 2.0, 2.2), rec("M1", 2.0, 2.4), rec("M2", 2.0, 2.0)]);
        let stats = bond_asynchronicity(&data);
        assert_eq!(stats.len(), 2);
        assert!((stats[0].mean - 0.3).abs() < 1e-9);
        assert!((stats[0].max - 0.4).abs() < 1e-9);
        assert_eq!(stats[1].max, 0.0);
    }

    #[test]
    fn test_box_summary() {
        let b = BoxSummary::from_values(&[4.0, 1.0, f64::NAN, 3.0, 2.0, 5.0]).unwrap();
        assert_eq!((b.min, b.q1, b.median, b.q3, b.max), (1.0, 2.0, 3.0, 4.0, 5.0));

        let b = BoxSummary::from_values(&[1.0, 2.0]).unwrap();
        assert_eq!(b.median, 1.5);
        assert_eq!(b.q1, 1.25);
        assert!(BoxSummary::from_values(&[f64::NAN]).is_none());
    }

    #[test]
    fn test_zone_counts() {
        let p = |rmsd: f64, err: f64| DiagnosticPoint { system: "A".into(), method: "M".into(), rmsd, abs_error: err };
        let points = vec![p(0.05, 0.2), p(0.05, 3.0), p(0.5, 0.2), p(0.5, 3.0)];
        let counts = zone_counts(&points, &Tolerances::default());
        assert_eq!(counts[0], (Zone::Safe, 1));
        assert_eq!(counts[1], (Zone::ElectronicError, 1));
        assert_eq!(counts[2], (Zone::StructuralFailure, 2));
    }
}
