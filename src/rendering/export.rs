// src/rendering/export.rs

use super::chart::{draw_chart, ChartStyle};
use crate::analysis::ChartProjection;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Png,
    Pdf,
    Svg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Svg => "svg",
        }
    }

    /// Format implied by the file extension, None if unknown
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "png" => Some(ExportFormat::Png),
            "pdf" => Some(ExportFormat::Pdf),
            "svg" => Some(ExportFormat::Svg),
            _ => None,
        }
    }
}

// --- File Export Entry Point ---
pub fn export_chart(
    chart: &ChartProjection,
    style: &ChartStyle,
    path: &Path,
    size: (u32, u32),
    fallback: ExportFormat,
) -> Result<(), String> {
    let format = ExportFormat::from_path(path).unwrap_or(fallback);
    log::info!("Exporting '{}' as {:?} to {:?}", chart.title, format, path);
    match format {
        ExportFormat::Svg => export_svg(chart, style, path, size),
        #[cfg(feature = "gui")]
        ExportFormat::Png => export_png(chart, style, path, size),
        #[cfg(feature = "gui")]
        ExportFormat::Pdf => export_pdf(chart, style, path, size),
        #[cfg(not(feature = "gui"))]
        other => Err(format!("{:?} export needs the cairo backend (build with --features gui)", other)),
    }
}

/// Vector output through plotters' own SVG backend
pub fn export_svg(chart: &ChartProjection, style: &ChartStyle, path: &Path, size: (u32, u32)) -> Result<(), String> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_chart(&root, chart, style).map_err(|e| e.to_string())?;
    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(feature = "gui")]
pub fn export_png(chart: &ChartProjection, style: &ChartStyle, path: &Path, size: (u32, u32)) -> Result<(), String> {
    use plotters_cairo::CairoBackend;

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size.0 as i32, size.1 as i32)
        .map_err(|e| e.to_string())?;
    {
        let cr = cairo::Context::new(&surface).map_err(|e| e.to_string())?;
        let backend = CairoBackend::new(&cr, size).map_err(|e| format!("{:?}", e))?;
        let root = backend.into_drawing_area();
        draw_chart(&root, chart, style).map_err(|e| e.to_string())?;
        root.present().map_err(|e| e.to_string())?;
    }
    let mut file = std::fs::File::create(path).map_err(|e| e.to_string())?;
    surface.write_to_png(&mut file).map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(feature = "gui")]
pub fn export_pdf(chart: &ChartProjection, style: &ChartStyle, path: &Path, size: (u32, u32)) -> Result<(), String> {
    use plotters_cairo::CairoBackend;

    let surface = cairo::PdfSurface::new(size.0 as f64, size.1 as f64, path).map_err(|e| e.to_string())?;
    {
        let cr = cairo::Context::new(&surface).map_err(|e| e.to_string())?;
        let backend = CairoBackend::new(&cr, size).map_err(|e| format!("{:?}", e))?;
        let root = backend.into_drawing_area();
        draw_chart(&root, chart, style).map_err(|e| e.to_string())?;
        root.present().map_err(|e| e.to_string())?;
    }
    surface.finish();
    Ok(())
}
