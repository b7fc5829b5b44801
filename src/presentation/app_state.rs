// Application state for HTTP handlers
use crate::infrastructure::map_canvas::MapCanvas;
use crate::infrastructure::plot_store::PlotStore;
use crate::infrastructure::status_board::StatusBoard;
use std::sync::{Arc, Mutex, MutexGuard};

pub struct AppState {
    pub canvas: Arc<MapCanvas>,
    pub plots: Arc<PlotStore>,
    pub status: Arc<StatusBoard>,
    /// Set once the dataset loaded
    pub ready: bool,
    ui_turn: Mutex<()>,
}

impl AppState {
    pub fn new(
        canvas: Arc<MapCanvas>,
        plots: Arc<PlotStore>,
        status: Arc<StatusBoard>,
        ready: bool,
    ) -> Self {
        Self {
            canvas,
            plots,
            status,
            ready,
            ui_turn: Mutex::new(()),
        }
    }

    /// Serializes map and chart access, one interaction at a time.
    pub fn ui_turn(&self) -> MutexGuard<'_, ()> {
        self.ui_turn.lock().unwrap_or_else(|e| e.into_inner())
    }
}
