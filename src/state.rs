use crate::data::extract::{parse_number, to_points};
use crate::data::filter::{filter_by_x_range, x_extent};
use crate::data::model::{Point, RawTable};
use crate::data::parser;
use crate::data::samples::Sample;
use crate::data::stats::Statistics;

/// σ multiplier used when the confidence field is empty or invalid.
pub const DEFAULT_CONFIDENCE: f64 = 1.0;
/// 1-based column shown in the X field after a load.
const DEFAULT_X_COLUMN: &str = "1";
const DEFAULT_Y_COLUMN: &str = "2";

// ---------------------------------------------------------------------------
// Plot options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotKind {
    #[default]
    Line,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    RegressionLine,
    MeanLine,
    ErrorBars,
}

/// Independent on/off switches for the chart overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    pub regression_line: bool,
    pub mean_line: bool,
    pub error_bars: bool,
}

impl Overlays {
    pub fn is_on(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::RegressionLine => self.regression_line,
            Overlay::MeanLine => self.mean_line,
            Overlay::ErrorBars => self.error_bars,
        }
    }

    pub fn toggle(&mut self, overlay: Overlay) {
        let flag = match overlay {
            Overlay::RegressionLine => &mut self.regression_line,
            Overlay::MeanLine => &mut self.mean_line,
            Overlay::ErrorBars => &mut self.error_bars,
        };
        *flag = !*flag;
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Every user-visible state change goes through one of these.
#[derive(Debug, Clone)]
pub enum Action {
    /// A background file read has begun.
    LoadStarted(String),
    /// A table replaces the current one wholesale.
    LoadTable { source: String, table: RawTable },
    LoadFailed(String),
    SetXColumn(String),
    SetYColumn(String),
    SetXLabel(String),
    SetYLabel(String),
    SetXMin(String),
    SetXMax(String),
    /// Clear both range fields, back to the full x extent.
    ResetRange,
    SetConfidence(String),
    ToggleOverlay(Overlay),
    SetPlotKind(PlotKind),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Text fields hold exactly what the user typed; the derived values below
/// them are rebuilt from scratch after every [`Action`].
pub struct AppState {
    /// Loaded table (None until a file or sample is loaded).
    pub table: Option<RawTable>,
    /// File path or sample name the table came from.
    pub source: Option<String>,

    /// 1-based column indices as typed.
    pub x_column: String,
    pub y_column: String,
    pub x_label: String,
    pub y_label: String,
    pub x_min: String,
    pub x_max: String,
    pub confidence: String,

    pub overlays: Overlays,
    pub plot_kind: PlotKind,

    /// Points of the selected columns, before the range filter.
    pub points: Vec<Point>,
    /// Points inside the current x window.
    pub visible: Vec<Point>,
    /// Statistics over `visible`.
    pub statistics: Option<Statistics>,
    /// x extent of the unfiltered points, used to restore the full range.
    pub original_x_range: Option<(f64, f64)>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            source: None,
            x_column: DEFAULT_X_COLUMN.to_string(),
            y_column: DEFAULT_Y_COLUMN.to_string(),
            x_label: String::new(),
            y_label: String::new(),
            x_min: String::new(),
            x_max: String::new(),
            confidence: DEFAULT_CONFIDENCE.to_string(),
            overlays: Overlays::default(),
            plot_kind: PlotKind::default(),
            points: Vec::new(),
            visible: Vec::new(),
            statistics: None,
            original_x_range: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Apply one action and recompute everything derived from the table.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LoadStarted(source) => {
                self.loading = true;
                self.status_message = Some(format!("Loading {source}…"));
            }
            Action::LoadTable { source, table } => {
                log::info!(
                    "Loaded {source}: {} rows, columns {:?}, {} skipped",
                    table.len(),
                    table.header,
                    table.skipped
                );
                self.x_column = DEFAULT_X_COLUMN.to_string();
                self.y_column = if table.column_count() > 1 {
                    DEFAULT_Y_COLUMN
                } else {
                    DEFAULT_X_COLUMN
                }
                .to_string();
                self.table = Some(table);
                self.source = Some(source);
                self.x_label.clear();
                self.y_label.clear();
                self.clear_range();
                self.status_message = None;
                self.loading = false;
            }
            Action::LoadFailed(message) => {
                log::error!("Failed to load: {message}");
                self.status_message = Some(format!("Error: {message}"));
                self.loading = false;
            }
            Action::SetXColumn(text) => {
                self.x_column = text;
                self.clear_range();
            }
            Action::SetYColumn(text) => {
                self.y_column = text;
                self.clear_range();
            }
            Action::SetXLabel(text) => self.x_label = text,
            Action::SetYLabel(text) => self.y_label = text,
            Action::SetXMin(text) => self.x_min = text,
            Action::SetXMax(text) => self.x_max = text,
            Action::ResetRange => self.clear_range(),
            Action::SetConfidence(text) => self.confidence = text,
            Action::ToggleOverlay(overlay) => self.overlays.toggle(overlay),
            Action::SetPlotKind(kind) => self.plot_kind = kind,
        }
        self.recompute();
    }

    /// Parse a built-in sample and load it like a file.
    pub fn load_sample(&mut self, sample: &Sample) {
        let action = match parser::parse(sample.text) {
            Some(table) => Action::LoadTable {
                source: sample.name.to_string(),
                table,
            },
            None => Action::LoadFailed(format!("sample {} has no header", sample.name)),
        };
        self.apply(action);
    }

    /// Rebuild points, the filtered view and statistics from the table.
    fn recompute(&mut self) {
        self.points = match (&self.table, self.selected_columns()) {
            (Some(table), Some((x, y))) => to_points(x, y, table).unwrap_or_default(),
            _ => Vec::new(),
        };
        self.original_x_range = x_extent(&self.points);

        let (lo, hi) = self.x_bounds();
        self.visible = filter_by_x_range(&self.points, lo, hi);
        self.statistics = Statistics::compute(&self.visible);

        log::debug!(
            "recomputed: {} points, {} visible",
            self.points.len(),
            self.visible.len()
        );
    }

    fn clear_range(&mut self) {
        self.x_min.clear();
        self.x_max.clear();
    }

    /// 0-based (x, y) column indices. Empty or invalid fields fall back to
    /// the first and second column (the first for single-column tables).
    pub fn selected_columns(&self) -> Option<(usize, usize)> {
        let table = self.table.as_ref()?;
        let default_y = if table.column_count() > 1 { 1 } else { 0 };
        let x = parse_column(&self.x_column).unwrap_or(0);
        let y = parse_column(&self.y_column).unwrap_or(default_y);
        Some((x, y))
    }

    /// Range bounds from the text fields; unparseable means no bound.
    pub fn x_bounds(&self) -> (Option<f64>, Option<f64>) {
        (parse_number(&self.x_min), parse_number(&self.x_max))
    }

    /// σ multiplier for error bars.
    pub fn confidence_multiplier(&self) -> f64 {
        parse_number(&self.confidence)
            .filter(|c| *c >= 0.0)
            .unwrap_or(DEFAULT_CONFIDENCE)
    }

    /// Error-bar half-height for the visible points, if any.
    pub fn error_bar_half_width(&self) -> Option<f64> {
        self.statistics
            .as_ref()
            .map(|s| s.error_bar_half_width(self.confidence_multiplier()))
    }

    pub fn x_axis_label(&self) -> String {
        self.axis_label(&self.x_label, self.selected_columns().map(|(x, _)| x), "X")
    }

    pub fn y_axis_label(&self) -> String {
        self.axis_label(&self.y_label, self.selected_columns().map(|(_, y)| y), "Y")
    }

    fn axis_label(&self, typed: &str, column: Option<usize>, fallback: &str) -> String {
        if !typed.trim().is_empty() {
            return typed.trim().to_string();
        }
        column
            .and_then(|c| self.table.as_ref()?.column_name(c))
            .unwrap_or(fallback)
            .to_string()
    }
}

/// 1-based column text → 0-based index.
fn parse_column(text: &str) -> Option<usize> {
    text.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::samples;

    fn loaded(text: &str) -> AppState {
        let mut state = AppState::default();
        state.apply(Action::LoadTable {
            source: "test".into(),
            table: parser::parse(text).unwrap(),
        });
        state
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert!(state.table.is_none());
        assert!(state.statistics.is_none());
        assert_eq!(state.selected_columns(), None);
        assert_eq!(state.x_axis_label(), "X");
        assert_eq!(state.confidence_multiplier(), 1.0);
    }

    #[test]
    fn test_load_computes_statistics() {
        let state = loaded("x,y\n1,2\n2,4\n3,6\n");
        assert_eq!(state.selected_columns(), Some((0, 1)));
        assert_eq!(state.points.len(), 3);
        let stats = state.statistics.as_ref().unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(state.original_x_range, Some((1.0, 3.0)));
        assert_eq!(state.x_axis_label(), "x");
        assert_eq!(state.y_axis_label(), "y");
    }

    #[test]
    fn test_one_based_columns() {
        let mut state = loaded("a,b,c\n1,10,100\n2,20,200\n");
        state.apply(Action::SetXColumn("2".into()));
        state.apply(Action::SetYColumn("3".into()));
        assert_eq!(state.selected_columns(), Some((1, 2)));
        assert_eq!(state.points[0], Point::new(10.0, 100.0));
        assert_eq!(state.y_axis_label(), "c");
    }

    #[test]
    fn test_invalid_column_falls_back() {
        let mut state = loaded("a,b\n1,2\n");
        state.apply(Action::SetXColumn("zero".into()));
        state.apply(Action::SetYColumn("0".into()));
        assert_eq!(state.selected_columns(), Some((0, 1)));
    }

    #[test]
    fn test_out_of_range_column_yields_nothing() {
        let mut state = loaded("a,b\n1,2\n");
        state.apply(Action::SetYColumn("9".into()));
        assert!(state.points.is_empty());
        assert!(state.statistics.is_none());
        assert_eq!(state.y_axis_label(), "Y");
    }

    #[test]
    fn test_single_column_table() {
        let state = loaded("value\n1\n2\n3\n");
        assert_eq!(state.selected_columns(), Some((0, 0)));
        assert_eq!(state.points.len(), 3);
    }

    #[test]
    fn test_range_filter_and_reset() {
        let mut state = loaded("x,y\n1,1\n2,3\n3,2\n4,5\n");
        state.apply(Action::SetXMin("2".into()));
        state.apply(Action::SetXMax("3".into()));
        assert_eq!(state.visible.len(), 2);
        assert_eq!(state.statistics.as_ref().unwrap().count, 2);
        assert_eq!(state.original_x_range, Some((1.0, 4.0)));

        state.apply(Action::ResetRange);
        assert_eq!(state.visible.len(), 4);
        assert!(state.x_min.is_empty() && state.x_max.is_empty());
    }

    #[test]
    fn test_range_outside_data_is_identity() {
        let mut state = loaded("x,y\n1,1\n2,3\n3,2\n");
        state.apply(Action::SetXMin("-50".into()));
        state.apply(Action::SetXMax("50".into()));
        assert_eq!(state.visible, state.points);
    }

    #[test]
    fn test_non_numeric_bound_ignored() {
        let mut state = loaded("x,y\n1,1\n2,3\n3,2\n");
        state.apply(Action::SetXMin("abc".into()));
        assert_eq!(state.x_bounds(), (None, None));
        assert_eq!(state.visible.len(), 3);
    }

    #[test]
    fn test_column_change_clears_range() {
        let mut state = loaded("a,b,c\n1,2,3\n4,5,6\n");
        state.apply(Action::SetXMin("3".into()));
        assert_eq!(state.visible.len(), 1);
        state.apply(Action::SetXColumn("3".into()));
        assert!(state.x_min.is_empty());
        assert_eq!(state.visible.len(), 2);
        assert_eq!(state.original_x_range, Some((3.0, 6.0)));
    }

    #[test]
    fn test_confidence_parsing() {
        let mut state = loaded("x,y\n1,2\n2,4\n3,6\n");
        state.apply(Action::SetConfidence("2".into()));
        assert_eq!(state.confidence_multiplier(), 2.0);
        assert_eq!(state.error_bar_half_width(), Some(4.0));
        state.apply(Action::SetConfidence("-1".into()));
        assert_eq!(state.confidence_multiplier(), DEFAULT_CONFIDENCE);
        state.apply(Action::SetConfidence("".into()));
        assert_eq!(state.confidence_multiplier(), DEFAULT_CONFIDENCE);
    }

    #[test]
    fn test_labels_override_headers() {
        let mut state = loaded("x,y\n1,2\n");
        state.apply(Action::SetXLabel("Distance (Mpc)".into()));
        assert_eq!(state.x_axis_label(), "Distance (Mpc)");
        state.apply(Action::SetXLabel("   ".into()));
        assert_eq!(state.x_axis_label(), "x");
    }

    #[test]
    fn test_overlays_and_plot_kind() {
        let mut state = AppState::default();
        state.apply(Action::ToggleOverlay(Overlay::ErrorBars));
        state.apply(Action::ToggleOverlay(Overlay::MeanLine));
        state.apply(Action::ToggleOverlay(Overlay::MeanLine));
        assert!(state.overlays.is_on(Overlay::ErrorBars));
        assert!(!state.overlays.is_on(Overlay::MeanLine));
        assert!(!state.overlays.is_on(Overlay::RegressionLine));
        state.apply(Action::SetPlotKind(PlotKind::Scatter));
        assert_eq!(state.plot_kind, PlotKind::Scatter);
    }

    #[test]
    fn test_new_load_replaces_table_and_resets_fields() {
        let mut state = loaded("a,b,c\n1,2,3\n");
        state.apply(Action::SetXColumn("3".into()));
        state.apply(Action::SetXLabel("custom".into()));
        state.apply(Action::ToggleOverlay(Overlay::RegressionLine));
        state.load_sample(&samples::HUBBLE_1929);
        assert_eq!(state.source.as_deref(), Some("Hubble 1929"));
        assert_eq!(state.x_column, "1");
        assert!(state.x_label.is_empty());
        assert_eq!(state.points.len(), 24);
        assert!(state.overlays.regression_line);
    }

    #[test]
    fn test_load_failure_keeps_previous_table() {
        let mut state = loaded("x,y\n1,2\n");
        state.apply(Action::LoadStarted("big.csv".into()));
        assert!(state.loading);
        state.apply(Action::LoadFailed("no header line found in big.csv".into()));
        assert!(!state.loading);
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
        assert_eq!(state.points.len(), 1);
    }

    #[test]
    fn test_constant_y_column() {
        let state = loaded("x,y\n1,5\n2,5\n3,5\n");
        let stats = state.statistics.as_ref().unwrap();
        assert_eq!(stats.std_dev_y, 0.0);
        assert!(stats.correlation.is_none());
        assert!(stats.regression.is_none());
    }

    #[test]
    fn test_non_numeric_first_row_keeps_header() {
        let state = loaded("x,y\na,b\n1,2\n2,4\n3,6\n");
        assert_eq!(state.x_axis_label(), "x");
        assert_eq!(state.y_axis_label(), "y");
        assert_eq!(state.points.len(), 3);
        let stats = state.statistics.as_ref().unwrap();
        assert!((stats.regression.unwrap().slope - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_every_sample_has_statistics() {
        for sample in samples::ALL {
            let mut state = AppState::default();
            state.load_sample(&sample);
            let stats = state.statistics.as_ref().unwrap();
            assert!(stats.count > 10, "{}", sample.name);
            assert!(stats.regression.is_some(), "{}", sample.name);
        }
    }
}
