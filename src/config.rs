// src/config.rs

use crate::analysis::Tolerances;
use crate::rendering::{ChartTheme, ExportFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// --- Marker size control (inclusive range) ---
pub const MIN_MARKER_SIZE: u32 = 4;
pub const MAX_MARKER_SIZE: u32 = 20;
pub const DEFAULT_MARKER_SIZE: u32 = 10;

pub fn clamp_marker_size(size: u32) -> u32 {
  size.clamp(MIN_MARKER_SIZE, MAX_MARKER_SIZE)
}

fn default_marker_size() -> u32 {
  DEFAULT_MARKER_SIZE
}

fn default_export_size() -> (u32, u32) {
  (1600, 900)
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  #[serde(default)]
  pub theme: ChartTheme,

  #[serde(default = "default_marker_size")]
  pub marker_size: u32,

  #[serde(default)]
  pub tolerances: Tolerances,

  pub default_export_format: ExportFormat,

  #[serde(default = "default_export_size")]
  pub export_size: (u32, u32),
}

impl Default for Config {
  fn default() -> Self {
    Self {
      theme: ChartTheme::Light,
      marker_size: DEFAULT_MARKER_SIZE,
      tolerances: Tolerances::default(),
      default_export_format: ExportFormat::Png,
      export_size: default_export_size(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/tsview/settings.json)
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &Path) -> (Self, String) {
    if path.exists() {
      match File::open(path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader::<_, Config>(reader) {
            Ok(mut cfg) => {
              cfg.marker_size = clamp_marker_size(cfg.marker_size);
              (cfg, format!("Config loaded from {:?}", path))
            }
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    self.save_to(&Self::get_path())
  }

  pub fn save_to(&self, path: &Path) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  fn get_path() -> PathBuf {
    // Matches the application id in ui::run
    if let Some(proj) = ProjectDirs::from("org", "tsview", "tsview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
