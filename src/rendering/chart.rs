// src/rendering/chart.rs

use crate::analysis::projection::{
    finite_bounds, Abscissa, ChartProjection, Guide, Heatmap, Series, SeriesKind, Zone,
};
use crate::analysis::stats::BoxSummary;
use super::theme::{ChartTheme, Palette};

use plotters::backend::DrawingBackend;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::*;
use plotters::style::TextStyle;

type Plot<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;
type DrawResult = Result<(), Box<dyn std::error::Error>>;

/// Rendering options that do not change the projection itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub theme: ChartTheme,
    /// Marker diameter in pixels
    pub marker_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self { theme: ChartTheme::Light, marker_size: 10 }
    }
}

const FONT: &str = "sans-serif";

/// Draws any projection onto any backend (screen, SVG, PDF, PNG)
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartProjection,
    style: &ChartStyle,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let palette = style.theme.palette();
    root.fill(&palette.background)?;

    if let Some(heatmap) = &chart.heatmap {
        return draw_heatmap(root, chart, heatmap, &palette);
    }

    if chart.is_empty() {
        return draw_placeholder(root, "No data. Load a file or sample data.", &palette);
    }

    let area = if chart.square {
        let (w, h) = root.dim_in_pixel();
        let side = w.min(h);
        root.clone().shrink(((w - side) / 2, (h - side) / 2), (side, side))
    } else {
        root.clone()
    };

    match chart.series.first().map(|s| s.kind) {
        Some(SeriesKind::Distribution) => draw_distributions(&area, chart, &palette, style),
        Some(SeriesKind::Line) | Some(SeriesKind::Bar) => draw_categorical(&area, chart, &palette, style),
        _ => draw_scatter(&area, chart, &palette, style),
    }
}

pub fn draw_placeholder<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    message: &str,
    palette: &Palette,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let (w, h) = root.dim_in_pixel();
    let style = TextStyle::from((FONT, 20).into_font()).color(&palette.foreground);
    root.draw_text(message, &style, (w as i32 / 2 - 170, h as i32 / 2))?;
    Ok(())
}

/// Pads a range by 5% of its span (or by 1 when the span is zero)
fn padded(bounds: Option<(f64, f64)>) -> (f64, f64) {
    match bounds {
        Some((lo, hi)) if hi > lo => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
        Some((v, _)) => (v - 1.0, v + 1.0),
        None => (0.0, 1.0),
    }
}

/// Category name for an integer tick, blank elsewhere
fn category_label(categories: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    categories.get(idx as usize).cloned().unwrap_or_default()
}

fn build_plot<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    chart: &ChartProjection,
    palette: &Palette,
    x: (f64, f64),
    y: (f64, f64),
) -> Result<Plot<'a, DB>, Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    let plot = ChartBuilder::on(area)
        .caption(&chart.title, (FONT, 20).into_font().color(&palette.foreground))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x.0..x.1, y.0..y.1)?;
    Ok(plot)
}

fn draw_legend<'a, DB: DrawingBackend + 'a>(plot: &mut Plot<'a, DB>, palette: &Palette) -> DrawResult
where
    DB::ErrorType: 'static,
{
    plot.configure_series_labels()
        .background_style(palette.background.mix(0.8))
        .border_style(palette.foreground)
        .label_font((FONT, 13).into_font().color(&palette.foreground))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;
    Ok(())
}

/// Bands go under the data, lines over it
fn draw_bands<DB: DrawingBackend>(plot: &mut Plot<'_, DB>, guides: &[Guide], palette: &Palette) -> DrawResult
where
    DB::ErrorType: 'static,
{
    for guide in guides {
        if let Guide::Band { x0, x1, y0, y1, zone } = guide {
            let color = match zone {
                Zone::Safe => palette.safe,
                Zone::ElectronicError => palette.warning,
                Zone::StructuralFailure => palette.failure,
            };
            plot.draw_series(std::iter::once(Rectangle::new(
                [(*x0, *y0), (*x1, *y1)],
                color.mix(0.08).filled(),
            )))?;
        }
    }
    Ok(())
}

fn draw_lines<DB: DrawingBackend>(
    plot: &mut Plot<'_, DB>,
    guides: &[Guide],
    palette: &Palette,
    x: (f64, f64),
    y: (f64, f64),
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let line_style = palette.foreground.mix(0.5).stroke_width(2);
    let font = (FONT, 13).into_font().color(&palette.foreground);

    for guide in guides {
        match guide {
            Guide::HLine { y: level, label } => {
                plot.draw_series(LineSeries::new(vec![(x.0, *level), (x.1, *level)], line_style))?;
                plot.draw_series(std::iter::once(Text::new(
                    label.clone(),
                    (x.0 + (x.1 - x.0) * 0.01, *level),
                    font.clone(),
                )))?;
            }
            Guide::VLine { x: at, label } => {
                plot.draw_series(LineSeries::new(vec![(*at, y.0), (*at, y.1)], line_style))?;
                plot.draw_series(std::iter::once(Text::new(
                    label.clone(),
                    (*at, y.1 - (y.1 - y.0) * 0.02),
                    font.clone(),
                )))?;
            }
            Guide::Diagonal { min, max } => {
                plot.draw_series(LineSeries::new(
                    vec![(*min, *min), (*max, *max)],
                    palette.foreground.mix(0.4).stroke_width(1),
                ))?;
            }
            Guide::Band { .. } => {}
        }
    }
    Ok(())
}

fn configure_mesh<DB: DrawingBackend>(
    plot: &mut Plot<'_, DB>,
    chart: &ChartProjection,
    palette: &Palette,
    categories: Option<&[String]>,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let fmt = |x: &f64| match categories {
        Some(cats) => category_label(cats, *x),
        None => format!("{:.2}", x),
    };
    let mut mesh = plot.configure_mesh();
    mesh.x_desc(chart.x_title.as_str())
        .y_desc(chart.y_title.as_str())
        .axis_desc_style((FONT, 16).into_font().color(&palette.foreground))
        .label_style((FONT, 12).into_font().color(&palette.foreground))
        .axis_style(palette.foreground)
        .bold_line_style(palette.grid.mix(0.5))
        .light_line_style(palette.grid.mix(0.15))
        .x_label_formatter(&fmt);
    if let Some(cats) = categories {
        mesh.x_labels(cats.len().clamp(1, 40));
    }
    mesh.draw()?;
    Ok(())
}

// --- Scatter (correlation, synchronicity, diagnostic) ---

fn draw_scatter<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &ChartProjection,
    palette: &Palette,
    style: &ChartStyle,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let points: Vec<(f64, f64)> = chart.series.iter().flat_map(Series::finite_points).collect();
    let diagonal = chart.diagonal();

    let x = chart.x_range.unwrap_or_else(|| {
        let xs = points.iter().map(|p| p.0);
        padded(finite_bounds(xs.chain(diagonal.into_iter().flat_map(|(a, b)| [a, b]))))
    });
    let y = chart.y_range.unwrap_or_else(|| {
        let ys = points.iter().map(|p| p.1);
        padded(finite_bounds(ys.chain(diagonal.into_iter().flat_map(|(a, b)| [a, b]))))
    });

    let mut plot = build_plot(area, chart, palette, x, y)?;
    configure_mesh(&mut plot, chart, palette, None)?;
    draw_bands(&mut plot, &chart.guides, palette)?;

    let radius = (style.marker_size / 2).max(1);
    for (i, series) in chart.series.iter().enumerate() {
        let color = palette.series_color(i);
        plot.draw_series(
            series
                .finite_points()
                .into_iter()
                .map(move |p| Circle::new(p, radius, color.mix(0.75).filled())),
        )?
        .label(series.name.clone())
        .legend(move |(lx, ly)| Circle::new((lx + 10, ly), 5, color.filled()));
    }

    draw_lines(&mut plot, &chart.guides, palette, x, y)?;
    draw_legend(&mut plot, palette)
}

// --- Line and grouped bar charts over systems ---

fn draw_categorical<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &ChartProjection,
    palette: &Palette,
    style: &ChartStyle,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let categories: Vec<String> = chart
        .series
        .iter()
        .find_map(|s| match &s.x {
            Abscissa::Categories(c) => Some(c.clone()),
            _ => None,
        })
        .unwrap_or_default();
    let n = categories.len().max(1) as f64;
    let bars = chart.series.iter().any(|s| s.kind == SeriesKind::Bar);

    let values = chart.series.iter().flat_map(|s| s.y.iter().copied());
    // Bars grow from zero
    let y = if bars {
        padded(finite_bounds(values.chain(std::iter::once(0.0))))
    } else {
        padded(finite_bounds(values))
    };
    let x = (-0.5, n - 0.5);

    let mut plot = build_plot(area, chart, palette, x, y)?;
    configure_mesh(&mut plot, chart, palette, Some(&categories))?;

    let group_width = 0.8;
    let bar_width = group_width / chart.series.len().max(1) as f64;
    let radius = (style.marker_size / 3).max(2);

    for (j, series) in chart.series.iter().enumerate() {
        let color = palette.series_color(j);
        let pts: Vec<(f64, f64)> = series
            .y
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, v)| (i as f64, *v))
            .collect();

        let anno = match series.kind {
            SeriesKind::Bar => {
                let left = -group_width / 2.0 + j as f64 * bar_width;
                plot.draw_series(pts.iter().map(move |(i, v)| {
                    Rectangle::new([(i + left, 0.0), (i + left + bar_width, *v)], color.mix(0.85).filled())
                }))?
            }
            _ => {
                plot.draw_series(LineSeries::new(pts.clone(), color.stroke_width(2)))?;
                plot.draw_series(pts.iter().map(move |p| Circle::new(*p, radius, color.filled())))?
            }
        };
        anno.label(series.name.clone())
            .legend(move |(lx, ly)| Rectangle::new([(lx, ly - 5), (lx + 16, ly + 5)], color.filled()));
    }

    draw_lines(&mut plot, &chart.guides, palette, x, y)?;
    draw_legend(&mut plot, palette)
}

// --- Box plots, one slot per method ---

fn draw_distributions<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &ChartProjection,
    palette: &Palette,
    style: &ChartStyle,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let names: Vec<String> = chart.series.iter().map(|s| s.name.clone()).collect();
    let guide_levels = chart.guides.iter().filter_map(|g| match g {
        Guide::HLine { y, .. } => Some(*y),
        _ => None,
    });
    let values = chart.series.iter().flat_map(|s| s.y.iter().copied());
    let y = padded(finite_bounds(values.chain(guide_levels).chain(std::iter::once(0.0))));
    let x = (-0.5, names.len().max(1) as f64 - 0.5);

    let mut plot = build_plot(area, chart, palette, x, y)?;
    configure_mesh(&mut plot, chart, palette, Some(&names))?;

    let half = 0.2;
    let radius = (style.marker_size / 4).max(2);
    for (i, series) in chart.series.iter().enumerate() {
        let color = palette.series_color(i);
        let cx = i as f64;
        let Some(b) = BoxSummary::from_values(&series.y) else {
            continue;
        };

        plot.draw_series(std::iter::once(Rectangle::new(
            [(cx - half, b.q1), (cx + half, b.q3)],
            color.mix(0.3).filled(),
        )))?;
        plot.draw_series(std::iter::once(Rectangle::new(
            [(cx - half, b.q1), (cx + half, b.q3)],
            color.stroke_width(2),
        )))?;
        for segment in [
            vec![(cx - half, b.median), (cx + half, b.median)],
            vec![(cx, b.q3), (cx, b.max)],
            vec![(cx, b.q1), (cx, b.min)],
            vec![(cx - half / 2.0, b.max), (cx + half / 2.0, b.max)],
            vec![(cx - half / 2.0, b.min), (cx + half / 2.0, b.min)],
        ] {
            plot.draw_series(LineSeries::new(segment, color.stroke_width(2)))?;
        }

        // Individual systems beside the box
        let px = cx + half * 1.5;
        plot.draw_series(
            series
                .y
                .iter()
                .filter(|v| v.is_finite())
                .map(move |v| Circle::new((px, *v), radius, color.mix(0.6).filled())),
        )?;
    }

    draw_lines(&mut plot, &chart.guides, palette, x, y)
}

// --- Heatmap ---

fn draw_heatmap<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartProjection,
    heatmap: &Heatmap,
    palette: &Palette,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    if heatmap.rows.is_empty() || heatmap.columns.is_empty() {
        return draw_placeholder(root, "No bond data loaded.", palette);
    }

    let n_rows = heatmap.rows.len();
    let n_cols = heatmap.columns.len();
    // Row label for a y tick, honouring the reversed order
    let row_names: Vec<String> = if heatmap.reverse_rows {
        heatmap.rows.iter().rev().cloned().collect()
    } else {
        heatmap.rows.clone()
    };

    let x = (-0.5, n_cols as f64 - 0.5);
    let y = (-0.5, n_rows as f64 - 0.5);
    let mut plot = build_plot(root, chart, palette, x, y)?;

    let x_fmt = |v: &f64| category_label(&heatmap.columns, *v);
    let y_fmt = |v: &f64| category_label(&row_names, *v);
    plot.configure_mesh()
        .disable_mesh()
        .x_desc(chart.x_title.as_str())
        .y_desc(chart.y_title.as_str())
        .axis_desc_style((FONT, 16).into_font().color(&palette.foreground))
        .label_style((FONT, 12).into_font().color(&palette.foreground))
        .axis_style(palette.foreground)
        .x_labels(n_cols)
        .y_labels(n_rows.min(60))
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .draw()?;

    let max = heatmap.max_value();
    let scale = if max > 0.0 { max } else { 1.0 };
    let font = (FONT, 11).into_font().color(&palette.foreground);

    for (r, row) in heatmap.values.iter().enumerate() {
        let yi = (if heatmap.reverse_rows { n_rows - 1 - r } else { r }) as f64;
        for (c, value) in row.iter().enumerate() {
            let xi = c as f64;
            plot.draw_series(std::iter::once(Rectangle::new(
                [(xi - 0.5, yi - 0.5), (xi + 0.5, yi + 0.5)],
                palette.heat(value / scale).filled(),
            )))?;
            if n_rows <= 30 {
                plot.draw_series(std::iter::once(Text::new(
                    format!("{:.3}", value),
                    (xi - 0.15, yi),
                    font.clone(),
                )))?;
            }
        }
    }
    Ok(())
}
