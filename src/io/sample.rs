// src/io/sample.rs
//
// Synthetic benchmark data for exploring the dashboard without a file.

use crate::model::{
    BondDataset, BondRecord, EnergyDataset, EnergyRecord, StructureDataset, StructureRecord,
};
use rand::Rng;

pub const REFERENCE_METHOD: &str = "DLPNO-CCSD(T)";

/// (method, systematic bias, half-width of the uniform noise) in kcal/mol
pub const ENERGY_METHODS: [(&str, f64, f64); 3] = [
    ("B3LYP", 1.5, 2.0),
    ("M06-2X", -0.5, 1.0),
    ("wB97X-D", 0.3, 0.8),
];

pub const ENERGY_SYSTEMS: usize = 20;
pub const BOND_SYSTEMS: usize = 10;
pub const REFERENCE_RANGE: (f64, f64) = (5.0, 35.0);
pub const BOND_BASE_RANGE: (f64, f64) = (1.9, 2.3);
pub const BOND_JITTER: f64 = 0.05;
pub const RMSD_RANGE: (f64, f64) = (0.0, 0.3);

fn system_name(i: usize) -> String {
    format!("TS_{:02}", i + 1)
}

/// 20 systems, reference column first then the three DFT methods
pub fn energy_dataset<R: Rng + ?Sized>(rng: &mut R) -> EnergyDataset {
    let mut methods = vec![REFERENCE_METHOD.to_string()];
    methods.extend(ENERGY_METHODS.iter().map(|(m, _, _)| m.to_string()));

    let records = (0..ENERGY_SYSTEMS)
        .map(|i| {
            let reference = rng.gen_range(REFERENCE_RANGE.0..REFERENCE_RANGE.1);
            let mut values = vec![reference];
            for (_, bias, spread) in ENERGY_METHODS.iter() {
                values.push(reference + bias + rng.gen_range(-spread..=*spread));
            }
            EnergyRecord { system: system_name(i), values }
        })
        .collect();

    EnergyDataset::new(methods, records)
}

/// 10 systems x 3 methods, each method jittering the system's base lengths
pub fn bond_dataset<R: Rng + ?Sized>(rng: &mut R) -> BondDataset {
    let mut records = Vec::with_capacity(BOND_SYSTEMS * ENERGY_METHODS.len());
    for i in 0..BOND_SYSTEMS {
        let base_r1 = rng.gen_range(BOND_BASE_RANGE.0..=BOND_BASE_RANGE.1);
        let base_r2 = rng.gen_range(BOND_BASE_RANGE.0..=BOND_BASE_RANGE.1);
        for (method, _, _) in ENERGY_METHODS.iter() {
            records.push(BondRecord {
                system: system_name(i),
                method: method.to_string(),
                r1: base_r1 + rng.gen_range(-BOND_JITTER..=BOND_JITTER),
                r2: base_r2 + rng.gen_range(-BOND_JITTER..=BOND_JITTER),
            });
        }
    }
    BondDataset::new(records)
}

/// RMSD of every DFT geometry against the reference geometry
pub fn structure_dataset<R: Rng + ?Sized>(rng: &mut R) -> StructureDataset {
    let mut records = Vec::with_capacity(ENERGY_SYSTEMS * ENERGY_METHODS.len());
    for i in 0..ENERGY_SYSTEMS {
        for (method, _, _) in ENERGY_METHODS.iter() {
            records.push(StructureRecord {
                system: system_name(i),
                method: method.to_string(),
                rmsd: rng.gen_range(RMSD_RANGE.0..=RMSD_RANGE.1),
            });
        }
    }
    StructureDataset::new(records)
}

/// All three sample datasets, freshly randomized
pub fn generate() -> (EnergyDataset, BondDataset, StructureDataset) {
    let mut rng = rand::thread_rng();
    (
        energy_dataset(&mut rng),
        bond_dataset(&mut rng),
        structure_dataset(&mut rng),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_energy_shape_and_bounds() {
        let ds = energy_dataset(&mut rand::thread_rng());
        assert_eq!(ds.methods[0], REFERENCE_METHOD);
        assert_eq!(ds.methods.len(), 4);
        assert_eq!(ds.records.len(), 20);
        assert_eq!(ds.records[0].system, "TS_01");
        assert_eq!(ds.records[19].system, "TS_20");

        for rec in &ds.records {
            let reference = rec.values[0];
            assert!(reference >= REFERENCE_RANGE.0 && reference < REFERENCE_RANGE.1);
            for (k, (_, bias, spread)) in ENERGY_METHODS.iter().enumerate() {
                let dev = (rec.values[k + 1] - reference).abs();
                assert!(dev <= spread + bias.abs() + 1e-9, "{} off by {}", rec.system, dev);
            }
        }
    }

    #[test]
    fn test_b3lyp_within_documented_range() {
        let ds = energy_dataset(&mut StdRng::seed_from_u64(7));
        for rec in &ds.records {
            let d = ds.value(rec, "B3LYP") - ds.value(rec, REFERENCE_METHOD);
            assert!(d.abs() <= 2.0 + 1.5 + 1e-9);
        }
    }

    #[test]
    fn test_bond_shape_and_bounds() {
        let ds = bond_dataset(&mut rand::thread_rng());
        assert_eq!(ds.len(), 30);
        assert_eq!(ds.systems().len(), 10);
        assert_eq!(ds.methods(), vec!["B3LYP", "M06-2X", "wB97X-D"]);

        let lo = BOND_BASE_RANGE.0 - BOND_JITTER - 1e-9;
        let hi = BOND_BASE_RANGE.1 + BOND_JITTER + 1e-9;
        for rec in &ds.records {
            assert!(rec.r1 >= lo && rec.r1 <= hi);
            assert!(rec.r2 >= lo && rec.r2 <= hi);
        }
    }

    #[test]
    fn test_bond_methods_share_system_base() {
        let ds = bond_dataset(&mut StdRng::seed_from_u64(11));
        for system in ds.systems() {
            let r1: Vec<f64> = ds.records.iter().filter(|r| r.system == system).map(|r| r.r1).collect();
            let spread = r1.iter().cloned().fold(f64::MIN, f64::max)
                - r1.iter().cloned().fold(f64::MAX, f64::min);
            assert!(spread <= 2.0 * BOND_JITTER + 1e-9);
        }
    }

    #[test]
    fn test_structure_bounds() {
        let ds = structure_dataset(&mut rand::thread_rng());
        assert_eq!(ds.len(), 60);
        assert!(ds.records.iter().all(|r| r.rmsd >= 0.0 && r.rmsd <= 0.3));
    }
}
