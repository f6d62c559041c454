use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use eframe::egui;

use crate::color::SeriesColors;
use crate::data::loader::{self, LoadError};
use crate::data::model::RawTable;
use crate::state::{Action, AppState};
use crate::ui::{panels, plot, table};

type PendingLoad = Receiver<(PathBuf, Result<RawTable, LoadError>)>;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct XyExplorerApp {
    pub state: AppState,
    colors: SeriesColors,
    /// Result channel of the file read currently in flight.
    pending_load: Option<PendingLoad>,
}

impl XyExplorerApp {
    /// Create the app, optionally reading `initial` in the background.
    pub fn new(initial: Option<PathBuf>) -> Self {
        let mut app = Self {
            state: AppState::default(),
            colors: SeriesColors::default(),
            pending_load: None,
        };
        if let Some(path) = initial {
            app.start_load(path);
        }
        app
    }

    /// Read and parse a file off the UI thread. A newer load supersedes an
    /// older one still in flight.
    fn start_load(&mut self, path: PathBuf) {
        self.state.apply(Action::LoadStarted(path.display().to_string()));
        self.pending_load = Some(loader::spawn_load(path));
    }

    fn poll_pending_load(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.pending_load else {
            return;
        };
        match rx.try_recv() {
            Ok((path, Ok(table))) => {
                self.pending_load = None;
                self.state.apply(Action::LoadTable {
                    source: path.display().to_string(),
                    table,
                });
            }
            Ok((_, Err(e))) => {
                self.pending_load = None;
                self.state.apply(Action::LoadFailed(e.to_string()));
            }
            Err(TryRecvError::Empty) => {
                ctx.request_repaint_after(Duration::from_millis(50));
            }
            Err(TryRecvError::Disconnected) => {
                self.pending_load = None;
                self.state
                    .apply(Action::LoadFailed("loader thread exited without a result".into()));
            }
        }
    }
}

impl eframe::App for XyExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending_load(ctx);

        // ---- Top panel: menu bar ----
        let mut picked = None;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            picked = panels::top_bar(ui, &mut self.state);
        });
        if let Some(path) = picked {
            self.start_load(path);
        }

        // ---- Left side panel: controls + statistics ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: raw data ----
        egui::TopBottomPanel::bottom("data_preview")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| {
                table::data_preview(ui, &self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::xy_plot(ui, &self.state, &self.colors);
        });
    }
}
