// src/utils/mod.rs
#[cfg(feature = "gui")]
pub mod logger;
pub mod report;
