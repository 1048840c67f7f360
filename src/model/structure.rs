// src/model/structure.rs

use super::bond::distinct;

/// Geometric deviation of one method's optimized TS from the benchmark geometry
#[derive(Debug, Clone, PartialEq)]
pub struct StructureRecord {
    pub system: String,
    pub method: String,
    pub rmsd: f64, // Å
}

/// Long structure table: one row per (system, method) pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureDataset {
    pub records: Vec<StructureRecord>,
}

impl StructureDataset {
    pub fn new(records: Vec<StructureRecord>) -> Self {
        Self { records }
    }

    pub fn methods(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.method.as_str()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
