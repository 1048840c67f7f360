// src/state.rs

use crate::analysis::{
    correlation, diagnostic, error_distribution, grouped, heatmap, synchronicity, trend,
    ChartProjection, SystemFilter, Tolerances,
};
use crate::config::{clamp_marker_size, Config};
use crate::io::{self, sample, LoadError};
use crate::model::{BondDataset, EnergyDataset, StructureDataset};
use crate::rendering::{ChartStyle, ChartTheme};
use crate::utils::report;
use std::path::Path;

/// One tab per chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    ErrorDistribution,
    Trend,
    Correlation,
    Grouped,
    Synchronicity,
    Heatmap,
    Diagnostic,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::ErrorDistribution,
        ChartKind::Trend,
        ChartKind::Correlation,
        ChartKind::Grouped,
        ChartKind::Synchronicity,
        ChartKind::Heatmap,
        ChartKind::Diagnostic,
    ];

    pub fn tab_label(self) -> &'static str {
        match self {
            ChartKind::ErrorDistribution => "Error Distribution",
            ChartKind::Trend => "Energy Trend",
            ChartKind::Correlation => "Correlation",
            ChartKind::Grouped => "Method Comparison",
            ChartKind::Synchronicity => "Synchronicity",
            ChartKind::Heatmap => "Asynchronicity Map",
            ChartKind::Diagnostic => "Structure vs Energy",
        }
    }

    /// The per-chart dropdown, if the chart has one
    pub fn selector(self) -> Option<Selector> {
        match self {
            ChartKind::ErrorDistribution | ChartKind::Diagnostic => Some(Selector::Benchmark),
            ChartKind::Trend => Some(Selector::SortBy),
            ChartKind::Correlation => Some(Selector::XMethod),
            ChartKind::Grouped => Some(Selector::System),
            ChartKind::Synchronicity | ChartKind::Heatmap => None,
        }
    }
}

/// User-chosen chart parameters backed by a dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Benchmark,
    SortBy,
    XMethod,
    System,
}

impl Selector {
    pub fn label(self) -> &'static str {
        match self {
            Selector::Benchmark => "Benchmark:",
            Selector::SortBy => "Sort by:",
            Selector::XMethod => "X axis:",
            Selector::System => "System:",
        }
    }
}

/// Independent dataset slots; a failed upload only touches its own slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Energy,
    Bond,
    Structure,
}

impl Slot {
    pub fn label(self) -> &'static str {
        match self {
            Slot::Energy => "energy",
            Slot::Bond => "bond",
            Slot::Structure => "structure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// The single user-visible message slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartParams {
    pub benchmark: String,
    pub sort_by: String,
    pub x_method: String,
    pub system_filter: SystemFilter,
}

pub struct AppState {
    pub energy: Option<EnergyDataset>,
    pub bonds: Option<BondDataset>,
    pub structures: Option<StructureDataset>,
    pub active_chart: ChartKind,
    pub params: ChartParams,
    pub theme: ChartTheme,
    pub marker_size: u32,
    pub tolerances: Tolerances,
    pub status: Option<Status>,
    /// Energy/diagnostic summary most recently written to the console
    pub last_report: Option<String>,
    pub config: Config,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            energy: None,
            bonds: None,
            structures: None,
            active_chart: ChartKind::ErrorDistribution,
            params: ChartParams::default(),
            theme: config.theme,
            marker_size: clamp_marker_size(config.marker_size),
            tolerances: config.tolerances,
            status: None,
            last_report: None,
            config,
        }
    }

    pub fn load_config(&mut self) {
        let (config, msg) = Config::load();
        log::info!("{}", msg);
        *self = Self::with_config(config);
    }

    /// Copies the live view settings into the config and writes it out
    pub fn save_config(&mut self) -> String {
        self.config.theme = self.theme;
        self.config.marker_size = self.marker_size;
        self.config.tolerances = self.tolerances;
        self.config.save()
    }

    // --- Dataset actions ---

    /// Decodes and validates a file into `slot`.
    /// On failure the error lands in the status slot and the previous dataset stays.
    pub fn upload(&mut self, slot: Slot, path: &Path) -> bool {
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        if !io::spreadsheet::is_supported(path) {
            log::warn!("{} has no workbook extension, trying to decode anyway", source);
        }

        let result: Result<(), LoadError> = match slot {
            Slot::Energy => io::load_energy(path).map(|ds| self.set_energy(ds, &source)),
            Slot::Bond => io::load_bonds(path).map(|ds| self.set_bonds(ds, &source)),
            Slot::Structure => io::load_structures(path).map(|ds| self.set_structures(ds, &source)),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to load {} data from {}: {}", slot.label(), source, e);
                self.status = Some(Status {
                    level: StatusLevel::Error,
                    message: format!("Could not load {} data: {}", slot.label(), e),
                });
                false
            }
        }
    }

    pub fn set_energy(&mut self, data: EnergyDataset, source: &str) {
        let count = data.len();
        self.energy = Some(data);
        self.reconcile_params();
        self.info(format!("Loaded {} systems from {}", count, source));
        self.publish_energy_report(source);
    }

    pub fn set_bonds(&mut self, data: BondDataset, source: &str) {
        log::info!("\n{}", report::bond_summary(&data, source));
        self.info(format!("Loaded {} bond records from {}", data.len(), source));
        self.bonds = Some(data);
    }

    /// New RMSD values change the diagnostic join, so the energy report is redone
    pub fn set_structures(&mut self, data: StructureDataset, source: &str) {
        log::info!("\n{}", report::structure_summary(&data, source));
        self.info(format!("Loaded {} structure records from {}", data.len(), source));
        self.structures = Some(data);
        self.publish_energy_report(source);
    }

    /// Replaces all three slots with fresh synthetic data
    pub fn load_sample(&mut self) {
        let source = "sample data";
        let (energy, bonds, structures) = sample::generate();
        log::info!("\n{}", report::bond_summary(&bonds, source));
        log::info!("\n{}", report::structure_summary(&structures, source));

        // All slots first, so the report joins this batch only
        self.energy = Some(energy);
        self.bonds = Some(bonds);
        self.structures = Some(structures);
        self.reconcile_params();
        self.publish_energy_report(source);
        self.info("Sample data loaded".to_string());
    }

    fn info(&mut self, message: String) {
        self.status = Some(Status { level: StatusLevel::Info, message });
    }

    /// Keeps selections that still exist, otherwise falls back to the first option
    fn reconcile_params(&mut self) {
        let methods = self.method_options();
        let first = methods.first().cloned().unwrap_or_default();
        for param in [&mut self.params.benchmark, &mut self.params.sort_by, &mut self.params.x_method] {
            if !methods.contains(param) {
                *param = first.clone();
            }
        }
        if let SystemFilter::System(s) = &self.params.system_filter {
            let known = self.energy.as_ref().map_or(false, |d| d.find(s).is_some());
            if !known {
                self.params.system_filter = SystemFilter::All;
            }
        }
    }

    // --- Parameter actions ---

    pub fn options(&self, selector: Selector) -> Vec<String> {
        match selector {
            Selector::System => self.system_options(),
            _ => self.method_options(),
        }
    }

    pub fn selected(&self, selector: Selector) -> String {
        match selector {
            Selector::Benchmark => self.params.benchmark.clone(),
            Selector::SortBy => self.params.sort_by.clone(),
            Selector::XMethod => self.params.x_method.clone(),
            Selector::System => self.params.system_filter.label().to_string(),
        }
    }

    /// Applies a dropdown choice; unknown choices are ignored
    pub fn select(&mut self, selector: Selector, choice: &str) -> bool {
        if !self.options(selector).iter().any(|o| o == choice) {
            log::warn!("Ignoring unknown {:?} choice '{}'", selector, choice);
            return false;
        }
        match selector {
            Selector::Benchmark => {
                self.params.benchmark = choice.to_string();
                self.publish_energy_report("current data");
            }
            Selector::SortBy => self.params.sort_by = choice.to_string(),
            Selector::XMethod => self.params.x_method = choice.to_string(),
            Selector::System => self.params.system_filter = SystemFilter::from_choice(choice),
        }
        true
    }

    /// Method names of the current energy table, in column order
    pub fn method_options(&self) -> Vec<String> {
        self.energy.as_ref().map(|d| d.methods.clone()).unwrap_or_default()
    }

    /// "All" followed by every system of the energy table
    pub fn system_options(&self) -> Vec<String> {
        let mut out = vec![grouped::ALL_SYSTEMS.to_string()];
        if let Some(d) = &self.energy {
            out.extend(d.systems());
        }
        out
    }

    pub fn set_marker_size(&mut self, size: u32) {
        self.marker_size = clamp_marker_size(size);
    }

    pub fn set_theme(&mut self, theme: ChartTheme) {
        self.theme = theme;
    }

    pub fn set_tolerances(&mut self, tolerances: Tolerances) {
        self.tolerances = tolerances;
    }

    pub fn set_active_chart(&mut self, kind: ChartKind) {
        self.active_chart = kind;
    }

    // --- Projections ---

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle { theme: self.theme, marker_size: self.marker_size }
    }

    /// Recomputed on every call; None when the chart's input is not loaded
    pub fn projection(&self, kind: ChartKind) -> Option<ChartProjection> {
        let p = &self.params;
        match kind {
            ChartKind::ErrorDistribution => self.energy.as_ref().map(|d| error_distribution::project(d, &p.benchmark)),
            ChartKind::Trend => self.energy.as_ref().map(|d| trend::project(d, &p.sort_by)),
            ChartKind::Correlation => self.energy.as_ref().map(|d| correlation::project(d, &p.x_method)),
            ChartKind::Grouped => self.energy.as_ref().map(|d| grouped::project(d, &p.system_filter)),
            ChartKind::Synchronicity => self.bonds.as_ref().map(synchronicity::project),
            ChartKind::Heatmap => self.bonds.as_ref().map(heatmap::project),
            ChartKind::Diagnostic => match (&self.energy, &self.structures) {
                (Some(e), Some(s)) => Some(diagnostic::project(e, s, &p.benchmark, &self.tolerances)),
                _ => None,
            },
        }
    }

    pub fn active_projection(&self) -> Option<ChartProjection> {
        self.projection(self.active_chart)
    }

    /// Which upload a chart is waiting for
    pub fn missing_input(&self, kind: ChartKind) -> Option<&'static str> {
        match kind {
            ChartKind::Synchronicity | ChartKind::Heatmap if self.bonds.is_none() => {
                Some("Load bond data (System, Method, R1, R2) or sample data.")
            }
            ChartKind::Diagnostic if self.structures.is_none() => {
                Some("Load structure data (System, Method, RMSD) or sample data.")
            }
            ChartKind::ErrorDistribution
            | ChartKind::Trend
            | ChartKind::Correlation
            | ChartKind::Grouped
            | ChartKind::Diagnostic
                if self.energy.is_none() =>
            {
                Some("Load energy data (System + method columns) or sample data.")
            }
            _ => None,
        }
    }

    fn publish_energy_report(&mut self, source: &str) {
        if let Some(text) = self.energy_report(source) {
            log::info!("\n{}", text);
            self.last_report = Some(text);
        }
    }

    fn energy_report(&self, source: &str) -> Option<String> {
        let data = self.energy.as_ref()?;
        let mut text = report::energy_summary(data, &self.params.benchmark, source);
        if let Some(structures) = &self.structures {
            let points = diagnostic::join(data, structures, &self.params.benchmark);
            text.push_str(&report::diagnostic_summary(&points, &self.tolerances));
        }
        Some(text)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Abscissa;
    use crate::model::{EnergyRecord, Row};
    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    fn energy() -> EnergyDataset {
        EnergyDataset::new(
            vec!["X".into(), "Y".into()],
            vec![
                EnergyRecord { system: "A".into(), values: vec![10.0, 12.0] },
                EnergyRecord { system: "B".into(), values: vec![20.0, 18.0] },
            ],
        )
    }

    #[test]
    fn test_starts_empty() {
        let st = AppState::new();
        assert!(st.energy.is_none() && st.bonds.is_none() && st.structures.is_none());
        for kind in ChartKind::ALL {
            assert!(st.projection(kind).is_none());
            assert!(st.missing_input(kind).is_some());
        }
        assert_eq!(st.system_options(), vec!["All"]);
    }

    #[test]
    fn test_params_follow_dataset() {
        let mut st = AppState::new();
        st.set_energy(energy(), "test");
        assert_eq!(st.params.benchmark, "X");
        assert_eq!(st.params.sort_by, "X");
        assert_eq!(st.system_options(), vec!["All", "A", "B"]);

        assert!(st.select(Selector::Benchmark, "Y"));
        assert!(st.select(Selector::System, "B"));
        assert!(!st.select(Selector::SortBy, "Nope"));
        assert_eq!(st.params.sort_by, "X");

        // Reloading with a different schema resets stale choices
        let other = EnergyDataset::new(
            vec!["P".into(), "Y".into()],
            vec![EnergyRecord { system: "C".into(), values: vec![1.0, 2.0] }],
        );
        st.set_energy(other, "test");
        assert_eq!(st.params.benchmark, "Y");
        assert_eq!(st.params.sort_by, "P");
        assert_eq!(st.params.system_filter, SystemFilter::All);
    }

    #[test]
    fn test_projection_uses_selection() {
        let mut st = AppState::new();
        st.set_energy(energy(), "test");
        st.select(Selector::Benchmark, "X");
        let chart = st.projection(ChartKind::ErrorDistribution).unwrap();
        assert_eq!(chart.series("Y").unwrap().y, vec![2.0, 2.0]);

        st.select(Selector::System, "A");
        let chart = st.projection(ChartKind::Grouped).unwrap();
        assert!(chart.series.iter().all(|s| s.x == Abscissa::Categories(vec!["A".into()])));
    }

    #[test]
    fn test_failed_upload_keeps_previous() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "X").unwrap();
        sheet.write_string(1, 0, "A").unwrap();
        sheet.write_number(1, 1, 1.0).unwrap();
        workbook.save(&path).unwrap();

        let mut st = AppState::new();
        st.set_energy(energy(), "test");
        st.set_bonds(BondDataset::default(), "test");

        assert!(!st.upload(Slot::Energy, &path));
        let status = st.status.clone().unwrap();
        assert_eq!(status.level, StatusLevel::Error);
        assert!(status.message.contains("System"), "{}", status.message);
        assert_eq!(st.energy, Some(energy()));
        assert!(st.bonds.is_some());

        assert!(!st.upload(Slot::Bond, &dir.path().join("missing.xlsx")));
        assert_eq!(st.bonds, Some(BondDataset::default()));
    }

    #[test]
    fn test_successful_upload_replaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bonds.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (c, h) in ["System", "Method", "R1", "R2", "Note"].iter().enumerate() {
            sheet.write_string(0, c as u16, *h).unwrap();
        }
        sheet.write_string(1, 0, "TS_01").unwrap();
        sheet.write_string(1, 1, "B3LYP").unwrap();
        sheet.write_number(1, 2, 0.0).unwrap();
        sheet.write_number(1, 3, 2.2).unwrap();
        sheet.write_string(1, 4, "ignored").unwrap();
        workbook.save(&path).unwrap();

        let mut st = AppState::new();
        assert!(st.upload(Slot::Bond, &path));
        let bonds = st.bonds.as_ref().unwrap();
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds.records[0].r1, 0.0);
        assert_eq!(st.status.as_ref().unwrap().level, StatusLevel::Info);
        assert!(st.projection(ChartKind::Heatmap).is_some());
    }

    #[test]
    fn test_sample_fills_every_chart() {
        let mut st = AppState::new();
        st.load_sample();
        for kind in ChartKind::ALL {
            assert!(st.missing_input(kind).is_none(), "{:?}", kind);
            let chart = st.projection(kind).unwrap();
            assert!(!chart.is_empty(), "{:?} is empty", kind);
        }
        assert_eq!(st.params.benchmark, sample::REFERENCE_METHOD);
    }

    fn expected_diagnostic(st: &AppState) -> String {
        let points = diagnostic::join(
            st.energy.as_ref().unwrap(),
            st.structures.as_ref().unwrap(),
            &st.params.benchmark,
        );
        report::diagnostic_summary(&points, &st.tolerances)
    }

    #[test]
    fn test_sample_report_joins_current_batch() {
        let mut st = AppState::new();
        st.load_sample();
        let first = st.last_report.clone().unwrap();
        assert!(first.contains("Diagnostic ("), "{}", first);
        assert!(first.ends_with(&expected_diagnostic(&st)));

        // A second batch must not be joined with the previous RMSD values
        st.load_sample();
        let second = st.last_report.clone().unwrap();
        assert!(second.ends_with(&expected_diagnostic(&st)), "{}", second);
    }

    #[test]
    fn test_structure_upload_refreshes_report() {
        use crate::model::StructureRecord;

        let mut st = AppState::new();
        st.set_energy(energy(), "test");
        assert!(!st.last_report.clone().unwrap().contains("Diagnostic ("));

        let rec = |s: &str, rmsd: f64| StructureRecord { system: s.into(), method: "Y".into(), rmsd };
        st.set_structures(StructureDataset::new(vec![rec("A", 0.05), rec("B", 0.5)]), "rmsd.xlsx");
        let text = st.last_report.clone().unwrap();
        assert!(text.contains("2 points"), "{}", text);
        assert!(text.ends_with(&expected_diagnostic(&st)));
    }

    #[test]
    fn test_marker_size_is_clamped() {
        let mut st = AppState::new();
        st.set_marker_size(1);
        assert_eq!(st.marker_size, crate::config::MIN_MARKER_SIZE);
        st.set_marker_size(500);
        assert_eq!(st.marker_size, crate::config::MAX_MARKER_SIZE);
        st.set_marker_size(12);
        assert_eq!(st.chart_style().marker_size, 12);
    }

    #[test]
    fn test_rows_to_state() {
        let rows = vec![Row::new().with("System", "A").with("X", 1.0)];
        let mut st = AppState::new();
        st.set_energy(io::validate::energy(&rows).unwrap(), "rows");
        assert_eq!(st.method_options(), vec!["X"]);
    }
}
