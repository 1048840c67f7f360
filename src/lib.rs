// src/lib.rs
pub mod analysis;
pub mod config;
pub mod io;
pub mod model;
pub mod rendering;
pub mod state;
pub mod utils;

#[cfg(feature = "gui")]
pub mod menu;
#[cfg(feature = "gui")]
pub mod panels;
#[cfg(feature = "gui")]
pub mod ui;
