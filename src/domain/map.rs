// Map view, tile layer and marker descriptions
use super::quality::QualityClass;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLon,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub max_zoom: u8,
    pub attribution: String,
}

/// Handle returned by the map backend for each added marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MarkerId(pub usize);

const MARKER_SIZE_PX: u32 = 15;

/// Html-bodied marker icon, a colored dot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub class_name: String,
    pub html: String,
    pub size: [u32; 2],
}

impl MarkerIcon {
    pub fn dot(color: &str) -> Self {
        Self {
            class_name: "custom-div-icon".to_string(),
            html: format!(
                "<div style='background-color: {}; width: {}px; height: {}px; border-radius: 50%; border: 2px solid #fff;'></div>",
                color, MARKER_SIZE_PX, MARKER_SIZE_PX
            ),
            size: [MARKER_SIZE_PX, MARKER_SIZE_PX],
        }
    }

    pub fn for_quality(quality: QualityClass) -> Self {
        Self::dot(quality.color())
    }
}

/// Popup body shown when a marker is interacted with.
pub fn popup_html(name: &str, quality: QualityClass) -> String {
    format!(
        "<b>{}</b><br>Qualidade do Ar: {}",
        escape_html(name),
        quality.label()
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
