// src/model/energy.rs

/// One chemical system with one relative energy per method (kcal/mol)
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyRecord {
    pub system: String,
    /// Aligned with `EnergyDataset::methods`. Missing or non-numeric cells are NaN.
    pub values: Vec<f64>,
}

/// Wide energy table: one row per system, one column per method
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyDataset {
    pub methods: Vec<String>,
    pub records: Vec<EnergyRecord>,
}

impl EnergyDataset {
    pub fn new(methods: Vec<String>, records: Vec<EnergyRecord>) -> Self {
        Self { methods, records }
    }

    pub fn method_index(&self, method: &str) -> Option<usize> {
        self.methods.iter().position(|m| m == method)
    }

    /// Value of `method` for a record, NaN if the method is unknown
    pub fn value(&self, record: &EnergyRecord, method: &str) -> f64 {
        self.method_index(method)
            .and_then(|i| record.values.get(i).copied())
            .unwrap_or(f64::NAN)
    }

    /// Column view of one method across all records
    pub fn column(&self, method: &str) -> Vec<f64> {
        match self.method_index(method) {
            Some(i) => self
                .records
                .iter()
                .map(|r| r.values.get(i).copied().unwrap_or(f64::NAN))
                .collect(),
            None => vec![f64::NAN; self.records.len()],
        }
    }

    pub fn systems(&self) -> Vec<String> {
        self.records.iter().map(|r| r.system.clone()).collect()
    }

    pub fn find(&self, system: &str) -> Option<&EnergyRecord> {
        self.records.iter().find(|r| r.system == system)
    }

    /// Every finite value of every method column
    pub fn finite_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records
            .iter()
            .flat_map(|r| r.values.iter().copied())
            .filter(|v| v.is_finite())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnergyDataset {
        EnergyDataset::new(
            vec!["X".into(), "Y".into()],
            vec![
                EnergyRecord { system: "A".into(), values: vec![10.0, 12.0] },
                EnergyRecord { system: "B".into(), values: vec![20.0] },
            ],
        )
    }

    #[test]
    fn test_short_rows_read_as_nan() {
        let ds = sample();
        let y = ds.column("Y");
        assert_eq!(y[0], 12.0);
        assert!(y[1].is_nan());
        assert!(ds.column("Z").iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_lookup() {
        let ds = sample();
        let b = ds.find("B").unwrap();
        assert_eq!(ds.value(b, "X"), 20.0);
        assert_eq!(ds.finite_values().count(), 3);
    }
}
