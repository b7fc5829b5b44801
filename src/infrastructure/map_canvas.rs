// In-memory map surface replayed by the dashboard page
use crate::application::map_renderer::{ClickHandler, MapBackend};
use crate::domain::map::{LatLon, MapView, MarkerIcon, MarkerId, TileLayer};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedMarker {
    pub id: MarkerId,
    pub position: LatLon,
    pub icon: MarkerIcon,
    pub popup: Option<String>,
    pub clickable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapSnapshot {
    pub view: Option<MapView>,
    pub tile_layer: Option<TileLayer>,
    pub markers: Vec<PlacedMarker>,
}

#[derive(Default)]
struct CanvasState {
    map: MapSnapshot,
    handlers: HashMap<MarkerId, ClickHandler>,
}

#[derive(Default)]
pub struct MapCanvas {
    state: RwLock<CanvasState>,
}

impl MapCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MapSnapshot {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .map
            .clone()
    }

    /// Dispatch a click on `marker`. Returns false when no handler is bound.
    pub fn click(&self, marker: MarkerId) -> bool {
        let handler = self
            .state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .handlers
            .get(&marker)
            .cloned();

        // Lock is released before the handler runs
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    fn with_marker(&self, marker: MarkerId, f: impl FnOnce(&mut PlacedMarker)) -> bool {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        match state.map.markers.iter_mut().find(|m| m.id == marker) {
            Some(placed) => {
                f(placed);
                true
            }
            None => false,
        }
    }
}

impl MapBackend for MapCanvas {
    fn create_map(&self, view: MapView) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = CanvasState::default();
        state.map.view = Some(view);
    }

    fn add_tile_layer(&self, layer: TileLayer) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.map.tile_layer = Some(layer);
    }

    fn add_marker(&self, position: LatLon, icon: MarkerIcon) -> MarkerId {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let id = MarkerId(state.map.markers.len());
        state.map.markers.push(PlacedMarker {
            id,
            position,
            icon,
            popup: None,
            clickable: false,
        });
        id
    }

    fn bind_click(&self, marker: MarkerId, handler: ClickHandler) {
        if !self.with_marker(marker, |placed| placed.clickable = true) {
            tracing::warn!("Ignoring click binding for unknown marker {:?}", marker);
            return;
        }
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.handlers.insert(marker, handler);
    }

    fn bind_popup(&self, marker: MarkerId, html: String) {
        if !self.with_marker(marker, |placed| placed.popup = Some(html)) {
            tracing::warn!("Ignoring popup for unknown marker {:?}", marker);
        }
    }
}
