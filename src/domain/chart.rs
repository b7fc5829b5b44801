// Plot descriptions handed to the charting library
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Fixed display region holding one live plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ChartTarget {
    #[serde(rename = "poluentes-graph")]
    Pollutants,
    #[serde(rename = "meteo-graph")]
    Weather,
    #[serde(rename = "qualidade-ar-graph")]
    QualityIndex,
}

impl ChartTarget {
    pub const ALL: [ChartTarget; 3] = [
        ChartTarget::Pollutants,
        ChartTarget::Weather,
        ChartTarget::QualityIndex,
    ];

    /// Element id of the target in the dashboard page.
    pub fn element_id(self) -> &'static str {
        match self {
            ChartTarget::Pollutants => "poluentes-graph",
            ChartTarget::Weather => "meteo-graph",
            ChartTarget::QualityIndex => "qualidade-ar-graph",
        }
    }
}

impl fmt::Display for ChartTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceMode {
    #[serde(rename = "lines+markers")]
    LinesAndMarkers,
    #[serde(rename = "markers")]
    Markers,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub color: Vec<String>,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub x: Vec<NaiveDateTime>,
    pub y: Vec<f64>,
    pub mode: TraceMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
}

impl Trace {
    pub fn line(name: &str, color: &str, x: Vec<NaiveDateTime>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            mode: TraceMode::LinesAndMarkers,
            name: Some(name.to_string()),
            yaxis: None,
            line: Some(LineStyle {
                color: color.to_string(),
            }),
            marker: None,
            text: None,
            hoverinfo: None,
        }
    }

    pub fn on_axis(mut self, axis: &str) -> Self {
        self.yaxis = Some(axis.to_string());
        self
    }

    /// Overwrite the data-carrying attributes, leaving styling alone.
    pub fn apply(&mut self, data: TraceData) {
        self.x = data.x;
        self.y = data.y;
        if let Some(colors) = data.marker_color {
            match self.marker.as_mut() {
                Some(marker) => marker.color = colors,
                None => {
                    self.marker = Some(MarkerStyle {
                        color: colors,
                        size: 6,
                    })
                }
            }
        }
        if let Some(text) = data.text {
            self.text = Some(text);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: String,
    pub size: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticktext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub margin: Margin,
    pub responsive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// New data for one existing trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceData {
    pub x: Vec<NaiveDateTime>,
    pub y: Vec<f64>,
    pub marker_color: Option<Vec<String>>,
    pub text: Option<Vec<String>>,
}

impl TraceData {
    pub fn new(x: Vec<NaiveDateTime>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            marker_color: None,
            text: None,
        }
    }
}

/// In-place data replacement for a live plot; entry `i` targets trace `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Restyle {
    pub traces: Vec<TraceData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_serializes_as_element_id() {
        for target in ChartTarget::ALL {
            let json = serde_json::to_value(target).unwrap();
            assert_eq!(json, serde_json::json!(target.element_id()));
        }
    }

    #[test]
    fn test_trace_skips_unset_attributes() {
        let trace = Trace::line("CO", "#FF7F0E", Vec::new(), Vec::new()).on_axis("y2");
        let json = serde_json::to_value(&trace).unwrap();

        assert_eq!(json["mode"], "lines+markers");
        assert_eq!(json["yaxis"], "y2");
        assert_eq!(json["line"]["color"], "#FF7F0E");
        assert!(json.get("marker").is_none());
        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_apply_keeps_styling() {
        let mut trace = Trace::line("CO", "#FF7F0E", Vec::new(), vec![1.0]);
        trace.apply(TraceData::new(Vec::new(), vec![2.0, 3.0]));

        assert_eq!(trace.y, vec![2.0, 3.0]);
        assert_eq!(trace.name.as_deref(), Some("CO"));
        assert_eq!(trace.line.as_ref().map(|l| l.color.as_str()), Some("#FF7F0E"));
    }
}
