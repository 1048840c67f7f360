//src/model/mod.rs
pub mod row;
pub mod energy;
pub mod bond;
pub mod structure;

// Re-exports for cleaner imports
pub use row::{Cell, Row};
pub use energy::{EnergyDataset, EnergyRecord};
pub use bond::{BondDataset, BondRecord};
pub use structure::{StructureDataset, StructureRecord};
