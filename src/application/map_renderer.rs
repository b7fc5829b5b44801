// Map renderer - Places one classified marker per location
use crate::domain::error::RenderError;
use crate::domain::location::{Dataset, Location};
use crate::domain::map::{popup_html, LatLon, MapView, MarkerIcon, MarkerId, TileLayer};
use std::sync::Arc;

/// Invoked by the map backend when its marker is clicked.
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// Receives the full record of the location whose marker was clicked.
pub type SelectionCallback = Arc<dyn Fn(&Location) + Send + Sync>;

/// Drawing surface of the mapping library.
pub trait MapBackend: Send + Sync {
    fn create_map(&self, view: MapView);
    fn add_tile_layer(&self, layer: TileLayer);
    fn add_marker(&self, position: LatLon, icon: MarkerIcon) -> MarkerId;
    fn bind_click(&self, marker: MarkerId, handler: ClickHandler);
    fn bind_popup(&self, marker: MarkerId, html: String);
}

#[derive(Clone)]
pub struct MapRenderer {
    backend: Arc<dyn MapBackend>,
    view: MapView,
    tiles: TileLayer,
}

impl MapRenderer {
    pub fn new(backend: Arc<dyn MapBackend>, view: MapView, tiles: TileLayer) -> Self {
        Self {
            backend,
            view,
            tiles,
        }
    }

    pub fn initialize(
        &self,
        dataset: Arc<Dataset>,
        on_select: SelectionCallback,
    ) -> Result<(), RenderError> {
        if dataset.is_empty() {
            tracing::error!("Map data is empty, the map was not initialized");
            return Err(RenderError::EmptyDataset);
        }

        self.backend.create_map(self.view.clone());
        self.backend.add_tile_layer(self.tiles.clone());

        for (index, location) in dataset.iter().enumerate() {
            // Latest observation decides the color, no aggregation over history
            let Some(latest) = location.latest() else {
                tracing::warn!("Skipping marker for '{}': no measurements", location.name);
                continue;
            };
            let quality = latest.quality_class;

            let marker = self.backend.add_marker(
                LatLon::new(location.latitude, location.longitude),
                MarkerIcon::for_quality(quality),
            );

            let dataset = dataset.clone();
            let on_select = on_select.clone();
            self.backend.bind_click(
                marker,
                Arc::new(move || {
                    let selected = &dataset[index];
                    tracing::info!("Marker for '{}' clicked", selected.name);
                    on_select(selected);
                }),
            );

            self.backend
                .bind_popup(marker, popup_html(&location.name, quality));
        }

        tracing::debug!("Map initialized with {} locations", dataset.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::tests::location;
    use crate::domain::quality::QualityClass;
    use crate::infrastructure::map_canvas::MapCanvas;
    use std::sync::Mutex;

    fn renderer(canvas: &Arc<MapCanvas>) -> MapRenderer {
        MapRenderer::new(
            canvas.clone(),
            MapView {
                center: LatLon::new(-23.55052, -46.633308),
                zoom: 10,
            },
            TileLayer {
                url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                max_zoom: 19,
                attribution: "OpenStreetMap".to_string(),
            },
        )
    }

    fn ignore_selection() -> SelectionCallback {
        Arc::new(|_: &Location| {})
    }

    #[test]
    fn test_one_marker_per_location_colored_by_latest() {
        let canvas = Arc::new(MapCanvas::new());
        let dataset = Arc::new(vec![
            location("Sé", &[QualityClass::Critical, QualityClass::Good]),
            location("Mooca", &[QualityClass::Good, QualityClass::Moderate]),
            location("Lapa", &[QualityClass::Moderate, QualityClass::Critical]),
        ]);

        renderer(&canvas)
            .initialize(dataset.clone(), ignore_selection())
            .unwrap();

        let snapshot = canvas.snapshot();
        assert_eq!(snapshot.markers.len(), 3);
        for (marker, location) in snapshot.markers.iter().zip(dataset.iter()) {
            let expected = location.latest().unwrap().quality_class;
            assert_eq!(marker.icon, MarkerIcon::for_quality(expected));
            assert_eq!(
                marker.popup.as_deref(),
                Some(popup_html(&location.name, expected).as_str())
            );
        }
        assert_eq!(snapshot.view.map(|v| v.zoom), Some(10));
        assert!(snapshot.tile_layer.is_some());
    }

    #[test]
    fn test_empty_dataset_draws_nothing() {
        let canvas = Arc::new(MapCanvas::new());
        let result = renderer(&canvas).initialize(Arc::new(Vec::new()), ignore_selection());

        assert_eq!(result, Err(RenderError::EmptyDataset));
        let snapshot = canvas.snapshot();
        assert!(snapshot.view.is_none());
        assert!(snapshot.markers.is_empty());
    }

    #[test]
    fn test_location_without_readings_is_skipped() {
        let canvas = Arc::new(MapCanvas::new());
        let dataset = Arc::new(vec![
            location("Sé", &[QualityClass::Good]),
            location("Vazio", &[]),
        ]);

        renderer(&canvas)
            .initialize(dataset, ignore_selection())
            .unwrap();
        assert_eq!(canvas.snapshot().markers.len(), 1);
    }

    #[test]
    fn test_click_selects_full_record_once() {
        let canvas = Arc::new(MapCanvas::new());
        let dataset = Arc::new(vec![
            location("Sé", &[QualityClass::Good]),
            location(
                "Mooca",
                &[QualityClass::Good, QualityClass::Moderate, QualityClass::Critical],
            ),
        ]);

        let selections: Arc<Mutex<Vec<Location>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = selections.clone();
        let on_select: SelectionCallback =
            Arc::new(move |l: &Location| sink.lock().unwrap().push(l.clone()));

        renderer(&canvas)
            .initialize(dataset.clone(), on_select)
            .unwrap();

        let mooca = canvas.snapshot().markers[1].id;
        assert!(canvas.click(mooca));

        let selections = selections.lock().unwrap();
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0], dataset[1]);
        assert_eq!(selections[0].measurements.len(), 3);
    }
}
