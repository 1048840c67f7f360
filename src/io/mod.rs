// src/io/mod.rs
pub mod error;
pub mod sample;
pub mod spreadsheet;
pub mod validate;

pub use error::{DecodeError, LoadError, ValidationError};
pub use validate::Shape;

use crate::model::{BondDataset, EnergyDataset, StructureDataset};
use std::path::Path;

pub fn load_energy(path: &Path) -> Result<EnergyDataset, LoadError> {
    let rows = spreadsheet::read_rows(path)?;
    Ok(validate::energy(&rows)?)
}

pub fn load_bonds(path: &Path) -> Result<BondDataset, LoadError> {
    let rows = spreadsheet::read_rows(path)?;
    Ok(validate::bond(&rows)?)
}

pub fn load_structures(path: &Path) -> Result<StructureDataset, LoadError> {
    let rows = spreadsheet::read_rows(path)?;
    Ok(validate::structure(&rows)?)
}
