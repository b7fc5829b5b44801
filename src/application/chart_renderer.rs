// Chart renderer - Draws and restyles the three location charts
use crate::domain::chart::{ChartTarget, Figure, Restyle};
use crate::domain::dashboard::{chart_title, figure_for, restyle_for};
use crate::domain::error::RenderError;
use crate::domain::location::Location;
use std::sync::{Arc, Mutex};

/// Drawing surface of the charting library.
pub trait ChartBackend: Send + Sync {
    /// Create the plot at `target`, replacing any plot already there
    fn new_plot(&self, target: ChartTarget, figure: Figure);

    /// Replace the data of the plot at `target` in place
    fn restyle(&self, target: ChartTarget, restyle: Restyle) -> Result<(), RenderError>;

    /// Replace the title of the plot at `target` in place
    fn relayout(&self, target: ChartTarget, title: String) -> Result<(), RenderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartState {
    NoChart,
    Rendered,
    Updated,
}

pub struct ChartRenderer {
    backend: Arc<dyn ChartBackend>,
    state: Mutex<ChartState>,
}

impl ChartRenderer {
    pub fn new(backend: Arc<dyn ChartBackend>) -> Self {
        Self {
            backend,
            state: Mutex::new(ChartState::NoChart),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ChartState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn render_initial(&self, location: &Location) -> Result<(), RenderError> {
        ensure_measurements(location, "render")?;

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        self.draw(location);
        *state = ChartState::Rendered;
        Ok(())
    }

    pub fn update(&self, location: &Location) -> Result<(), RenderError> {
        ensure_measurements(location, "update")?;

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if *state == ChartState::NoChart {
            tracing::debug!("No charts drawn yet, rendering '{}' from scratch", location.name);
            self.draw(location);
            *state = ChartState::Rendered;
            return Ok(());
        }

        // Everything is computed before the first backend call
        let changes: Vec<(ChartTarget, Restyle, String)> = ChartTarget::ALL
            .iter()
            .map(|&target| {
                (
                    target,
                    restyle_for(target, location),
                    chart_title(target, &location.name),
                )
            })
            .collect();

        for (target, restyle, title) in changes {
            let applied = self
                .backend
                .restyle(target, restyle)
                .and_then(|_| self.backend.relayout(target, title));

            if let Err(e) = applied {
                tracing::warn!("{}; drawing a fresh plot", e);
                self.backend.new_plot(target, figure_for(target, location));
            }
        }

        *state = ChartState::Updated;
        tracing::debug!("Charts updated for '{}'", location.name);
        Ok(())
    }

    fn draw(&self, location: &Location) {
        let figures: Vec<(ChartTarget, Figure)> = ChartTarget::ALL
            .iter()
            .map(|&target| (target, figure_for(target, location)))
            .collect();

        for (target, figure) in figures {
            self.backend.new_plot(target, figure);
        }
        tracing::debug!("Charts rendered for '{}'", location.name);
    }
}

fn ensure_measurements(location: &Location, operation: &str) -> Result<(), RenderError> {
    if location.measurements.is_empty() {
        tracing::error!(
            "Invalid location data for chart {}: '{}' has no measurements",
            operation,
            location.name
        );
        return Err(RenderError::NoMeasurements(location.name.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::tests::location;
    use crate::domain::quality::QualityClass;
    use crate::infrastructure::plot_store::PlotStore;

    fn setup() -> (Arc<PlotStore>, ChartRenderer) {
        let store = Arc::new(PlotStore::new());
        let renderer = ChartRenderer::new(store.clone());
        (store, renderer)
    }

    #[test]
    fn test_render_initial_draws_three_targets() {
        let (store, renderer) = setup();
        let loc = location("Sé", &[QualityClass::Good, QualityClass::Moderate]);

        renderer.render_initial(&loc).unwrap();

        let plots = store.snapshot();
        assert_eq!(plots.len(), 3);
        for target in ChartTarget::ALL {
            assert_eq!(plots.get(&target), Some(&figure_for(target, &loc)));
        }
        assert_eq!(renderer.state(), ChartState::Rendered);
    }

    #[test]
    fn test_update_with_same_location_is_idempotent() {
        let (store, renderer) = setup();
        let loc = location("Sé", &[QualityClass::Good, QualityClass::Critical]);

        renderer.render_initial(&loc).unwrap();
        let rendered = store.snapshot();

        renderer.update(&loc).unwrap();
        renderer.update(&loc).unwrap();
        assert_eq!(store.snapshot(), rendered);
        assert_eq!(renderer.state(), ChartState::Updated);
    }

    #[test]
    fn test_update_replaces_previous_location() {
        let (store, renderer) = setup();
        let a = location("Sé", &[QualityClass::Good, QualityClass::Good, QualityClass::Good]);
        let b = location("Lapa", &[QualityClass::Critical]);

        renderer.render_initial(&a).unwrap();
        renderer.update(&b).unwrap();

        let plots = store.snapshot();
        assert_eq!(plots.len(), 3);
        for target in ChartTarget::ALL {
            let figure = &plots[&target];
            assert_eq!(figure, &figure_for(target, &b));
            assert!(figure.layout.title.text.ends_with("- Lapa"));
            assert!(figure.data.iter().all(|trace| trace.x.len() == 1));
        }
    }

    #[test]
    fn test_invalid_location_draws_nothing() {
        let (store, renderer) = setup();
        let empty = location("Vazio", &[]);

        assert_eq!(
            renderer.render_initial(&empty),
            Err(RenderError::NoMeasurements("Vazio".to_string()))
        );
        assert!(renderer.update(&empty).is_err());
        assert!(store.snapshot().is_empty());
        assert_eq!(renderer.state(), ChartState::NoChart);
    }

    #[test]
    fn test_update_before_render_draws_from_scratch() {
        let (store, renderer) = setup();
        let loc = location("Mooca", &[QualityClass::Moderate]);

        renderer.update(&loc).unwrap();

        assert_eq!(store.snapshot().len(), 3);
        assert_eq!(renderer.state(), ChartState::Rendered);
    }

    #[test]
    fn test_update_redraws_cleared_target() {
        let (store, renderer) = setup();
        let a = location("Sé", &[QualityClass::Good]);
        let b = location("Lapa", &[QualityClass::Critical, QualityClass::Moderate]);

        renderer.render_initial(&a).unwrap();
        store.clear(ChartTarget::Weather);
        renderer.update(&b).unwrap();

        assert_eq!(
            store.snapshot().get(&ChartTarget::Weather),
            Some(&figure_for(ChartTarget::Weather, &b))
        );
    }
}
