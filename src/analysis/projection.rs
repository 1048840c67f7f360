// src/analysis/projection.rs
//
// Chart-ready output of the projection functions. Nothing here knows how
// it will be drawn; see `rendering::chart` for that.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Box-and-whisker over the y values
    Distribution,
    Line,
    Scatter,
    Bar,
}

/// What the y values of a series are plotted against
#[derive(Debug, Clone, PartialEq)]
pub enum Abscissa {
    /// Distribution series: one slot per series, no per-point x
    Slot,
    Categories(Vec<String>),
    Values(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub x: Abscissa,
    pub y: Vec<f64>,
    /// Per-point labels (system names); empty when unused
    pub labels: Vec<String>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// (x, y) pairs of a numeric series, skipping non-finite points
    pub fn finite_points(&self) -> Vec<(f64, f64)> {
        match &self.x {
            Abscissa::Values(xs) => xs
                .iter()
                .zip(self.y.iter())
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|(x, y)| (*x, *y))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Background classification of the structure/energy diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Safe,
    ElectronicError,
    StructuralFailure,
}

impl Zone {
    pub fn label(self) -> &'static str {
        match self {
            Zone::Safe => "Safe",
            Zone::ElectronicError => "Electronic error",
            Zone::StructuralFailure => "Structural failure",
        }
    }
}

/// Reference shapes drawn with the data
#[derive(Debug, Clone, PartialEq)]
pub enum Guide {
    HLine { y: f64, label: String },
    VLine { x: f64, label: String },
    /// y = x from (min, min) to (max, max)
    Diagonal { min: f64, max: f64 },
    Band { x0: f64, x1: f64, y0: f64, y1: f64, zone: Zone },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    /// values[row][column]
    pub values: Vec<Vec<f64>>,
    /// First row drawn at the top
    pub reverse_rows: bool,
}

impl Heatmap {
    pub fn cell(&self, row: &str, column: &str) -> Option<f64> {
        let r = self.rows.iter().position(|s| s == row)?;
        let c = self.columns.iter().position(|s| s == column)?;
        self.values.get(r).and_then(|v| v.get(c)).copied()
    }

    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartProjection {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub series: Vec<Series>,
    pub guides: Vec<Guide>,
    pub x_range: Option<(f64, f64)>,
    pub y_range: Option<(f64, f64)>,
    /// Equal x/y scaling
    pub square: bool,
    pub heatmap: Option<Heatmap>,
}

impl ChartProjection {
    pub fn new(title: impl Into<String>, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_title: x_title.into(),
            y_title: y_title.into(),
            ..Default::default()
        }
    }

    pub fn series(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn diagonal(&self) -> Option<(f64, f64)> {
        self.guides.iter().find_map(|g| match g {
            Guide::Diagonal { min, max } => Some((*min, *max)),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.heatmap.is_none() && self.series.iter().all(Series::is_empty)
    }
}

/// Min and max over finite values, None when there are none
pub fn finite_bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
