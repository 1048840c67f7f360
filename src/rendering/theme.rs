// src/rendering/theme.rs

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Named color presets selectable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartTheme {
    #[default]
    Light,
    Dark,
    Colorblind,
    Print,
}

pub struct Palette {
    pub background: RGBColor,
    pub foreground: RGBColor,
    pub grid: RGBColor,
    pub series: &'static [RGBColor],
    pub heat_low: RGBColor,
    pub heat_high: RGBColor,
    pub safe: RGBColor,
    pub warning: RGBColor,
    pub failure: RGBColor,
}

// Plotly-like defaults
const LIGHT_SERIES: [RGBColor; 8] = [
    RGBColor(99, 110, 250),
    RGBColor(239, 85, 59),
    RGBColor(0, 204, 150),
    RGBColor(171, 99, 250),
    RGBColor(255, 161, 90),
    RGBColor(25, 211, 243),
    RGBColor(255, 102, 146),
    RGBColor(182, 232, 128),
];

const DARK_SERIES: [RGBColor; 8] = [
    RGBColor(92, 176, 255),
    RGBColor(247, 200, 67),
    RGBColor(63, 182, 139),
    RGBColor(240, 99, 92),
    RGBColor(190, 140, 255),
    RGBColor(255, 160, 80),
    RGBColor(120, 220, 232),
    RGBColor(230, 237, 247),
];

// Okabe-Ito
const COLORBLIND_SERIES: [RGBColor; 8] = [
    RGBColor(0, 114, 178),
    RGBColor(230, 159, 0),
    RGBColor(0, 158, 115),
    RGBColor(213, 94, 0),
    RGBColor(86, 180, 233),
    RGBColor(204, 121, 167),
    RGBColor(240, 228, 66),
    RGBColor(0, 0, 0),
];

const PRINT_SERIES: [RGBColor; 6] = [
    RGBColor(0, 0, 0),
    RGBColor(90, 90, 90),
    RGBColor(150, 150, 150),
    RGBColor(40, 40, 120),
    RGBColor(120, 40, 40),
    RGBColor(40, 100, 40),
];

impl ChartTheme {
    pub const ALL: [ChartTheme; 4] = [
        ChartTheme::Light,
        ChartTheme::Dark,
        ChartTheme::Colorblind,
        ChartTheme::Print,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartTheme::Light => "Light",
            ChartTheme::Dark => "Dark",
            ChartTheme::Colorblind => "Colorblind",
            ChartTheme::Print => "Print",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn palette(self) -> Palette {
        match self {
            ChartTheme::Light => Palette {
                background: RGBColor(255, 255, 255),
                foreground: RGBColor(30, 30, 30),
                grid: RGBColor(200, 200, 210),
                series: &LIGHT_SERIES,
                heat_low: RGBColor(255, 255, 204),
                heat_high: RGBColor(189, 0, 38),
                safe: RGBColor(0, 128, 0),
                warning: RGBColor(255, 215, 0),
                failure: RGBColor(255, 0, 0),
            },
            ChartTheme::Dark => Palette {
                background: RGBColor(17, 26, 38),
                foreground: RGBColor(230, 237, 247),
                grid: RGBColor(80, 90, 110),
                series: &DARK_SERIES,
                heat_low: RGBColor(13, 8, 135),
                heat_high: RGBColor(240, 249, 33),
                safe: RGBColor(63, 182, 139),
                warning: RGBColor(247, 200, 67),
                failure: RGBColor(240, 99, 92),
            },
            ChartTheme::Colorblind => Palette {
                background: RGBColor(255, 255, 255),
                foreground: RGBColor(20, 20, 20),
                grid: RGBColor(210, 210, 210),
                series: &COLORBLIND_SERIES,
                heat_low: RGBColor(247, 251, 255),
                heat_high: RGBColor(8, 48, 107),
                safe: RGBColor(0, 158, 115),
                warning: RGBColor(230, 159, 0),
                failure: RGBColor(213, 94, 0),
            },
            ChartTheme::Print => Palette {
                background: RGBColor(255, 255, 255),
                foreground: RGBColor(0, 0, 0),
                grid: RGBColor(190, 190, 190),
                series: &PRINT_SERIES,
                heat_low: RGBColor(255, 255, 255),
                heat_high: RGBColor(0, 0, 0),
                safe: RGBColor(120, 120, 120),
                warning: RGBColor(170, 170, 170),
                failure: RGBColor(60, 60, 60),
            },
        }
    }
}

impl Palette {
    pub fn series_color(&self, i: usize) -> RGBColor {
        self.series[i % self.series.len()]
    }

    /// Linear blend between the two heat colors, t clamped to [0, 1]
    pub fn heat(&self, t: f64) -> RGBColor {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        RGBColor(
            mix(self.heat_low.0, self.heat_high.0),
            mix(self.heat_low.1, self.heat_high.1),
            mix(self.heat_low.2, self.heat_high.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_presets_in_dropdown_order() {
        assert_eq!(ChartTheme::ALL.len(), 4);
        for (i, theme) in ChartTheme::ALL.iter().enumerate() {
            assert_eq!(theme.index(), i);
        }
        assert_eq!(ChartTheme::Colorblind.name(), "Colorblind");
    }

    #[test]
    fn test_heat_endpoints() {
        let p = ChartTheme::Light.palette();
        assert_eq!(p.heat(0.0), p.heat_low);
        assert_eq!(p.heat(1.0), p.heat_high);
        assert_eq!(p.heat(7.0), p.heat_high);
        assert_eq!(p.heat(f64::NAN), p.heat_low);
    }

    #[test]
    fn test_series_colors_wrap() {
        let p = ChartTheme::Print.palette();
        assert_eq!(p.series_color(0), p.series_color(p.series.len()));
    }
}
