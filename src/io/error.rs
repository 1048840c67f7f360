// src/io/error.rs

use thiserror::Error;

/// The file could not be turned into rows
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("workbook has no worksheets")]
    NoSheets,
    #[error("file content is empty")]
    Empty,
}

/// The rows do not have the shape required by the target slot
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no rows to validate")]
    NoRows,
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("energy table needs at least one method column besides 'System'")]
    NoMethods,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("invalid data: {0}")]
    Validation(#[from] ValidationError),
}
