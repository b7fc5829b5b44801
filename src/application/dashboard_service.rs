// Dashboard service - Use case wiring loader, map and charts together
use crate::application::chart_renderer::ChartRenderer;
use crate::application::data_loader::DataLoader;
use crate::application::map_renderer::{MapRenderer, SelectionCallback};
use crate::domain::error::DataLoadFailure;
use crate::domain::location::{Dataset, Location};
use std::sync::Arc;

/// Text shown in place of the dashboard when the dataset cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Erro ao carregar dados.";

/// Element that shows a user-visible failure message.
pub trait StatusDisplay: Send + Sync {
    fn show_failure(&self, message: &str);
}

#[derive(Clone)]
pub struct DashboardService {
    loader: DataLoader,
    map: MapRenderer,
    charts: Arc<ChartRenderer>,
    status: Arc<dyn StatusDisplay>,
}

impl DashboardService {
    pub fn new(
        loader: DataLoader,
        map: MapRenderer,
        charts: Arc<ChartRenderer>,
        status: Arc<dyn StatusDisplay>,
    ) -> Self {
        Self {
            loader,
            map,
            charts,
            status,
        }
    }

    /// Load the dataset, place the markers and draw the first location.
    /// On load failure only the failure message is shown.
    pub async fn bootstrap(&self) -> Result<Arc<Dataset>, DataLoadFailure> {
        let dataset = match self.loader.load().await {
            Ok(dataset) => Arc::new(dataset),
            Err(e) => {
                self.status.show_failure(LOAD_FAILURE_MESSAGE);
                return Err(e);
            }
        };

        let charts = self.charts.clone();
        let on_select: SelectionCallback = Arc::new(move |location: &Location| {
            // Rejected input is already logged by the renderer
            let _ = charts.update(location);
        });

        if self.map.initialize(dataset.clone(), on_select).is_err() {
            return Ok(dataset);
        }

        if let Some(first) = dataset.first() {
            let _ = self.charts.render_initial(first);
        }

        Ok(dataset)
    }
}
