// src/model/bond.rs

/// Forming-bond lengths of one transition state computed with one method
#[derive(Debug, Clone, PartialEq)]
pub struct BondRecord {
    pub system: String,
    pub method: String,
    pub r1: f64, // Å
    pub r2: f64, // Å
}

impl BondRecord {
    /// |R1 - R2|: zero for a perfectly synchronous TS
    pub fn asynchronicity(&self) -> f64 {
        (self.r1 - self.r2).abs()
    }
}

/// Long bond table: one row per (system, method) pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BondDataset {
    pub records: Vec<BondRecord>,
}

impl BondDataset {
    pub fn new(records: Vec<BondRecord>) -> Self {
        Self { records }
    }

    /// Distinct methods in first-appearance order
    pub fn methods(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.method.as_str()))
    }

    /// Distinct systems in first-appearance order
    pub fn systems(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.system.as_str()))
    }

    /// First record matching the pair
    pub fn find(&self, system: &str, method: &str) -> Option<&BondRecord> {
        self.records
            .iter()
            .find(|r| r.system == system && r.method == method)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub(crate) fn distinct<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.iter().any(|o| o == item) {
            out.push(item.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(system: &str, method: &str, r1: f64, r2: f64) -> BondRecord {
        BondRecord { system: system.into(), method: method.into(), r1, r2 }
    }

    #[test]
    fn test_distinct_order() {
        let ds = BondDataset::new(vec![
            rec("B", "M2", 2.0, 2.1),
            rec("A", "M1", 2.0, 2.2),
            rec("B", "M1", 2.0, 2.0),
        ]);
        assert_eq!(ds.systems(), vec!["B", "A"]);
        assert_eq!(ds.methods(), vec!["M2", "M1"]);
    }

    #[test]
    fn test_first_match_wins() {
        let ds = BondDataset::new(vec![rec("A", "M1", 2.0, 2.3), rec("A", "M1", 2.0, 2.0)]);
        let hit = ds.find("A", "M1").unwrap();
        assert!((hit.asynchronicity() - 0.3).abs() < 1e-12);
    }
}
