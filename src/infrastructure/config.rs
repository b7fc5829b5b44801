use crate::domain::map::{LatLon, MapView, TileLayer};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub map: MapSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    /// File path, or an http(s) URL
    pub source: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub tile_url: String,
    pub max_zoom: u8,
    pub attribution: String,
}

impl MapSettings {
    pub fn view(&self) -> MapView {
        MapView {
            center: LatLon::new(self.center_lat, self.center_lon),
            zoom: self.zoom,
        }
    }

    pub fn tile_layer(&self) -> TileLayer {
        TileLayer {
            url_template: self.tile_url.clone(),
            max_zoom: self.max_zoom,
            attribution: self.attribution.clone(),
        }
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(builder
        .set_default("server.bind_address", "0.0.0.0:8080")?
        .set_default("data.source", "data/data.json")?
        .set_default("map.center_lat", -23.55052)?
        .set_default("map.center_lon", -46.633308)?
        .set_default("map.zoom", 10)?
        .set_default(
            "map.tile_url",
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        )?
        .set_default("map.max_zoom", 19)?
        .set_default(
            "map.attribution",
            "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>",
        )?)
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_dashboard_config_from("config/dashboard")
}

/// Every key has a default; the file is optional.
pub fn load_dashboard_config_from(name: &str) -> anyhow::Result<DashboardConfig> {
    let settings = with_defaults(config::Config::builder())?
        .add_source(config::File::with_name(name).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
