// src/io/validate.rs

use super::error::ValidationError;
use crate::model::{
    BondDataset, BondRecord, EnergyDataset, EnergyRecord, Row, StructureDataset, StructureRecord,
};

pub const SYSTEM: &str = "System";
pub const METHOD: &str = "Method";
pub const R1: &str = "R1";
pub const R2: &str = "R2";
pub const RMSD: &str = "RMSD";

/// The shapes a row set can be validated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Energy,
    Bond,
    Structure,
}

impl Shape {
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            Shape::Energy => &[SYSTEM],
            Shape::Bond => &[SYSTEM, METHOD, R1, R2],
            Shape::Structure => &[SYSTEM, METHOD, RMSD],
        }
    }
}

/// Only the first row is inspected; later rows are taken as they come.
fn check_first_row(rows: &[Row], shape: Shape) -> Result<&Row, ValidationError> {
    let first = rows.first().ok_or(ValidationError::NoRows)?;
    for col in shape.required_columns() {
        if !first.has(col) {
            return Err(ValidationError::MissingColumn(col.to_string()));
        }
    }
    Ok(first)
}

/// Wide table: `System` plus one column per method.
/// The method list is fixed by the first row's keys, in column order.
pub fn energy(rows: &[Row]) -> Result<EnergyDataset, ValidationError> {
    let first = check_first_row(rows, Shape::Energy)?;

    let methods: Vec<String> = first
        .keys()
        .filter(|k| *k != SYSTEM)
        .map(str::to_string)
        .collect();
    if methods.is_empty() {
        return Err(ValidationError::NoMethods);
    }

    let records = rows
        .iter()
        .map(|row| EnergyRecord {
            system: row.text(SYSTEM),
            values: methods.iter().map(|m| row.number(m)).collect(),
        })
        .collect();

    Ok(EnergyDataset::new(methods, records))
}

/// Long table: `System, Method, R1, R2`. Extra columns are ignored.
pub fn bond(rows: &[Row]) -> Result<BondDataset, ValidationError> {
    check_first_row(rows, Shape::Bond)?;

    let records = rows
        .iter()
        .map(|row| BondRecord {
            system: row.text(SYSTEM),
            method: row.text(METHOD),
            r1: row.number(R1),
            r2: row.number(R2),
        })
        .collect();

    Ok(BondDataset::new(records))
}

/// Long table: `System, Method, RMSD`
pub fn structure(rows: &[Row]) -> Result<StructureDataset, ValidationError> {
    check_first_row(rows, Shape::Structure)?;

    let records = rows
        .iter()
        .map(|row| StructureRecord {
            system: row.text(SYSTEM),
            method: row.text(METHOD),
            rmsd: row.number(RMSD),
        })
        .collect();

    Ok(StructureDataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cell;

    fn bond_row(r1: impl Into<Cell>, r2: impl Into<Cell>) -> Row {
        Row::new()
            .with("System", "TS_01")
            .with("Method", "B3LYP")
            .with("R1", r1)
            .with("R2", r2)
    }

    #[test]
    fn test_energy_requires_system() {
        let rows = vec![Row::new().with("X", 1.0).with("Y", 2.0)];
        assert_eq!(energy(&rows), Err(ValidationError::MissingColumn("System".into())));
        assert_eq!(energy(&[]), Err(ValidationError::NoRows));
    }

    #[test]
    fn test_energy_requires_a_method() {
        let rows = vec![Row::new().with("System", "A")];
        assert_eq!(energy(&rows), Err(ValidationError::NoMethods));
    }

    #[test]
    fn test_energy_methods_from_first_row() {
        let rows = vec![
            Row::new().with("System", "A").with("X", 10.0).with("Y", 12.0),
            // Later rows may have fewer or extra keys
            Row::new().with("System", "B").with("X", 20.0).with("Z", 99.0),
            Row::new().with("System", "C").with("X", "oops").with("Y", 3.0),
        ];
        let ds = energy(&rows).unwrap();
        assert_eq!(ds.methods, vec!["X", "Y"]);
        assert_eq!(ds.records.len(), 3);
        assert!(ds.records[1].values[1].is_nan());
        assert!(ds.records[2].values[0].is_nan());
        assert_eq!(ds.records[2].values[1], 3.0);
    }

    #[test]
    fn test_bond_missing_columns() {
        for missing in ["System", "Method", "R1", "R2"] {
            let mut row = Row::new();
            for col in ["System", "Method", "R1", "R2"] {
                if col != missing {
                    row.insert(col, 2.0);
                }
            }
            assert_eq!(
                bond(&[row]),
                Err(ValidationError::MissingColumn(missing.to_string())),
                "column {missing}"
            );
        }
    }

    #[test]
    fn test_bond_zero_is_valid() {
        let ds = bond(&[bond_row(0.0, 2.1)]).unwrap();
        assert_eq!(ds.records[0].r1, 0.0);
        let ds = bond(&[bond_row(2.1, 0.0)]).unwrap();
        assert_eq!(ds.records[0].r2, 0.0);
    }

    #[test]
    fn test_bond_blank_is_missing() {
        assert_eq!(
            bond(&[bond_row(Cell::Empty, 2.1)]),
            Err(ValidationError::MissingColumn("R1".into()))
        );
    }

    #[test]
    fn test_bond_only_first_row_checked() {
        let rows = vec![bond_row(2.0, 2.2), Row::new().with("System", "TS_02")];
        let ds = bond(&rows).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.records[1].r1.is_nan());
        assert_eq!(ds.records[1].method, "");
    }

    #[test]
    fn test_structure_requires_rmsd() {
        let rows = vec![Row::new().with("System", "A").with("Method", "M1")];
        assert_eq!(structure(&rows), Err(ValidationError::MissingColumn("RMSD".into())));
        let rows = vec![Row::new().with("System", "A").with("Method", "M1").with("RMSD", 0.0)];
        assert_eq!(structure(&rows).unwrap().records[0].rmsd, 0.0);
    }
}
