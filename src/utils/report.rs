// src/utils/report.rs

use crate::analysis::diagnostic::{DiagnosticPoint, Tolerances};
use crate::analysis::stats;
use crate::model::{BondDataset, EnergyDataset, StructureDataset};

fn fmt_num(v: f64, prec: usize) -> String {
    if v.is_finite() {
        format!("{:.*}", prec, v)
    } else {
        "-".to_string()
    }
}

/// Generates the console text shown when an energy table is loaded or the benchmark changes
pub fn energy_summary(data: &EnergyDataset, benchmark: &str, source: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Energies: {}\n", source));
    out.push_str(&format!("Systems: {}   Methods: {}\n", data.len(), data.methods.join(", ")));
    out.push_str(&format!("Benchmark: {}\n", benchmark));
    out.push_str("--------------------------------------------------------------\n");
    out.push_str(&format!(
        "{:<16} {:>5} {:>8} {:>8} {:>8} {:>10}\n",
        "Method", "N", "MAE", "RMSE", "MaxAE", "<1 kcal"
    ));
    out.push_str("--------------------------------------------------------------\n");

    for s in stats::energy_errors(data, benchmark) {
        out.push_str(&format!(
            "{:<16} {:>5} {:>8} {:>8} {:>8} {:>9}%\n",
            s.method,
            s.count,
            fmt_num(s.mae, 2),
            fmt_num(s.rmse, 2),
            fmt_num(s.max_abs, 2),
            fmt_num(s.within_accuracy * 100.0, 0),
        ));
    }
    out
}

pub fn bond_summary(data: &BondDataset, source: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Bonds: {}\n", source));
    out.push_str(&format!(
        "Records: {}   Systems: {}   Methods: {}\n",
        data.len(),
        data.systems().len(),
        data.methods().join(", ")
    ));
    out.push_str("----------------------------------------------\n");
    out.push_str(&format!("{:<16} {:>5} {:>10} {:>10}\n", "Method", "N", "<|R1-R2|>", "max"));
    out.push_str("----------------------------------------------\n");

    for s in stats::bond_asynchronicity(data) {
        out.push_str(&format!(
            "{:<16} {:>5} {:>10} {:>10}\n",
            s.method,
            s.count,
            fmt_num(s.mean, 3),
            fmt_num(s.max, 3)
        ));
    }
    out
}

pub fn structure_summary(data: &StructureDataset, source: &str) -> String {
    format!(
        "Structures: {}\nRecords: {}   Methods: {}\n",
        source,
        data.len(),
        data.methods().join(", ")
    )
}

pub fn diagnostic_summary(points: &[DiagnosticPoint], tol: &Tolerances) -> String {
    let mut out = format!(
        "Diagnostic (RMSD tol {:.3} Å, E tol {:.2} kcal/mol): {} points\n",
        tol.rmsd,
        tol.energy,
        points.len()
    );
    for (zone, count) in stats::zone_counts(points, tol) {
        out.push_str(&format!("  {:<20} {}\n", zone.label(), count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BondRecord, EnergyRecord};

    #[test]
    fn test_energy_summary_lists_methods() {
        let data = EnergyDataset::new(
            vec!["X".into(), "Y".into()],
            vec![
                EnergyRecord { system: "A".into(), values: vec![10.0, 12.0] },
                EnergyRecord { system: "B".into(), values: vec![20.0, 18.0] },
            ],
        );
        let text = energy_summary(&data, "X", "sample");
        assert!(text.contains("Benchmark: X"));
        assert!(text.contains("2.00"));
        // The benchmark gets no row of its own
        assert_eq!(text.lines().filter(|l| l.starts_with("X ")).count(), 0);
    }

    #[test]
    fn test_bond_summary_handles_nan() {
        let data = BondDataset::new(vec![BondRecord {
            system: "A".into(),
            method: "M".into(),
            r1: f64::NAN,
            r2: 2.0,
        }]);
        let text = bond_summary(&data, "file.xlsx");
        assert!(text.contains("file.xlsx"));
        assert!(text.contains(" -"));
    }
}
