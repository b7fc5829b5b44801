// In-memory plot surface, one live figure per target
use crate::application::chart_renderer::ChartBackend;
use crate::domain::chart::{ChartTarget, Figure, Restyle};
use crate::domain::error::RenderError;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct PlotStore {
    plots: RwLock<BTreeMap<ChartTarget, Figure>>,
}

impl PlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> BTreeMap<ChartTarget, Figure> {
        self.plots.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Drop the plot at `target`, as when its element is torn down.
    #[cfg(test)]
    pub fn clear(&self, target: ChartTarget) {
        self.plots
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&target);
    }
}

impl ChartBackend for PlotStore {
    fn new_plot(&self, target: ChartTarget, figure: Figure) {
        self.plots
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(target, figure);
    }

    fn restyle(&self, target: ChartTarget, restyle: Restyle) -> Result<(), RenderError> {
        let mut plots = self.plots.write().unwrap_or_else(|e| e.into_inner());
        let figure = plots
            .get_mut(&target)
            .ok_or(RenderError::PlotMissing(target))?;

        if restyle.traces.len() != figure.data.len() {
            tracing::warn!(
                "Restyle of {} carries {} traces for {} plotted",
                target,
                restyle.traces.len(),
                figure.data.len()
            );
        }
        for (trace, data) in figure.data.iter_mut().zip(restyle.traces) {
            trace.apply(data);
        }
        Ok(())
    }

    fn relayout(&self, target: ChartTarget, title: String) -> Result<(), RenderError> {
        let mut plots = self.plots.write().unwrap_or_else(|e| e.into_inner());
        let figure = plots
            .get_mut(&target)
            .ok_or(RenderError::PlotMissing(target))?;
        figure.layout.title.text = title;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::TraceData;
    use crate::domain::dashboard::pollutant_figure;
    use crate::domain::dashboard::tests::location;
    use crate::domain::quality::QualityClass;

    #[test]
    fn test_new_plot_replaces_instead_of_duplicating() {
        let store = PlotStore::new();
        let a = pollutant_figure(&location("A", &[QualityClass::Good]));
        let b = pollutant_figure(&location("B", &[QualityClass::Good]));

        store.new_plot(ChartTarget::Pollutants, a);
        store.new_plot(ChartTarget::Pollutants, b.clone());

        let plots = store.snapshot();
        assert_eq!(plots.len(), 1);
        assert_eq!(plots[&ChartTarget::Pollutants], b);
    }

    #[test]
    fn test_restyle_requires_existing_plot() {
        let store = PlotStore::new();
        let restyle = Restyle {
            traces: vec![TraceData::new(Vec::new(), Vec::new())],
        };

        assert_eq!(
            store.restyle(ChartTarget::Weather, restyle),
            Err(RenderError::PlotMissing(ChartTarget::Weather))
        );
        assert_eq!(
            store.relayout(ChartTarget::Weather, "t".to_string()),
            Err(RenderError::PlotMissing(ChartTarget::Weather))
        );
    }

    #[test]
    fn test_relayout_changes_only_title() {
        let store = PlotStore::new();
        let figure = pollutant_figure(&location("A", &[QualityClass::Good]));
        store.new_plot(ChartTarget::Pollutants, figure.clone());

        store
            .relayout(ChartTarget::Pollutants, "Novo".to_string())
            .unwrap();

        let updated = &store.snapshot()[&ChartTarget::Pollutants];
        assert_eq!(updated.layout.title.text, "Novo");
        assert_eq!(updated.data, figure.data);
    }
}
