// Dashboard figures built from one location's readings
use super::chart::{
    Axis, ChartTarget, Figure, Font, Layout, Margin, MarkerStyle, Restyle, Title, Trace,
    TraceData, TraceMode,
};
use super::location::Location;
use super::quality::QualityClass;
use super::telemetry::{MeasurementColumns, QualitySeries};

const BACKGROUND: &str = "rgba(255, 255, 255, 0.9)";
const QUALITY_MARKER_SIZE: u32 = 15;

/// Display name and line color for each plotted pollutant.
const POLLUTANTS: [(&str, &str); 3] = [
    ("Monóxido de Carbono (CO)", "#FF7F0E"),
    ("Dióxido de Carbono (CO₂)", "#1F77B4"),
    ("Óxidos de Nitrogênio (NOx)", "#2CA02C"),
];

const TEMPERATURE: (&str, &str) = ("Temperatura (°C)", "#D62728");
const HUMIDITY: (&str, &str) = ("Umidade (%)", "#008080");

pub fn chart_title(target: ChartTarget, location_name: &str) -> String {
    let prefix = match target {
        ChartTarget::Pollutants => "Níveis de Poluentes",
        ChartTarget::Weather => "Condições Meteorológicas",
        ChartTarget::QualityIndex => "Índice de Qualidade do Ar",
    };
    format!("{} - {}", prefix, location_name)
}

fn base_layout(title: String, y_title: &str) -> Layout {
    Layout {
        title: Title {
            text: title,
            font: Some(Font {
                family: "Arial, sans-serif".to_string(),
                size: 18,
                color: "#333".to_string(),
            }),
        },
        xaxis: Axis {
            title: Some("Hora do Dia".to_string()),
            tickformat: Some("%H:%M".to_string()),
            showgrid: Some(true),
            zeroline: Some(false),
            ..Axis::default()
        },
        yaxis: Axis {
            title: Some(y_title.to_string()),
            showgrid: Some(true),
            zeroline: Some(false),
            ..Axis::default()
        },
        yaxis2: None,
        paper_bgcolor: BACKGROUND.to_string(),
        plot_bgcolor: BACKGROUND.to_string(),
        margin: Margin {
            t: 50,
            b: 50,
            l: 50,
            r: 20,
        },
        responsive: true,
    }
}

pub fn pollutant_figure(location: &Location) -> Figure {
    let columns = MeasurementColumns::from_readings(&location.measurements);
    let values = [columns.co, columns.co2, columns.nox];

    let data = POLLUTANTS
        .iter()
        .zip(values)
        .map(|((name, color), y)| Trace::line(name, color, columns.timestamps.clone(), y))
        .collect();

    Figure {
        data,
        layout: base_layout(
            chart_title(ChartTarget::Pollutants, &location.name),
            "Concentração (ppm)",
        ),
    }
}

pub fn weather_figure(location: &Location) -> Figure {
    let columns = MeasurementColumns::from_readings(&location.measurements);

    let temperature = Trace::line(
        TEMPERATURE.0,
        TEMPERATURE.1,
        columns.timestamps.clone(),
        columns.temperature,
    )
    .on_axis("y");
    let humidity = Trace::line(HUMIDITY.0, HUMIDITY.1, columns.timestamps, columns.humidity)
        .on_axis("y2");

    let mut layout = base_layout(chart_title(ChartTarget::Weather, &location.name), "Valor");
    layout.yaxis2 = Some(Axis {
        title: Some(HUMIDITY.0.to_string()),
        overlaying: Some("y".to_string()),
        side: Some("right".to_string()),
        ..Axis::default()
    });

    Figure {
        data: vec![temperature, humidity],
        layout,
    }
}

pub fn quality_figure(location: &Location) -> Figure {
    let series = QualitySeries::from_readings(&location.measurements);

    let trace = Trace {
        x: series.timestamps,
        y: series.ordinals.iter().map(|o| f64::from(*o)).collect(),
        mode: TraceMode::Markers,
        name: None,
        yaxis: None,
        line: None,
        marker: Some(MarkerStyle {
            color: series.colors,
            size: QUALITY_MARKER_SIZE,
        }),
        text: Some(series.hover_text),
        hoverinfo: Some("text+x".to_string()),
    };

    let mut layout = base_layout(
        chart_title(ChartTarget::QualityIndex, &location.name),
        "Qualidade",
    );
    layout.yaxis = Axis {
        title: Some("Índice de Qualidade".to_string()),
        tickmode: Some("array".to_string()),
        tickvals: Some(
            QualityClass::ALL
                .iter()
                .map(|q| f64::from(q.ordinal()))
                .collect(),
        ),
        ticktext: Some(
            QualityClass::ALL
                .iter()
                .map(|q| q.label().to_string())
                .collect(),
        ),
        range: Some([0.5, 3.5]),
        ..Axis::default()
    };

    Figure {
        data: vec![trace],
        layout,
    }
}

pub fn figure_for(target: ChartTarget, location: &Location) -> Figure {
    match target {
        ChartTarget::Pollutants => pollutant_figure(location),
        ChartTarget::Weather => weather_figure(location),
        ChartTarget::QualityIndex => quality_figure(location),
    }
}

/// Data replacement for an already drawn target, trace for trace.
pub fn restyle_for(target: ChartTarget, location: &Location) -> Restyle {
    match target {
        ChartTarget::Pollutants => {
            let columns = MeasurementColumns::from_readings(&location.measurements);
            let x = columns.timestamps;
            Restyle {
                traces: vec![
                    TraceData::new(x.clone(), columns.co),
                    TraceData::new(x.clone(), columns.co2),
                    TraceData::new(x, columns.nox),
                ],
            }
        }
        ChartTarget::Weather => {
            let columns = MeasurementColumns::from_readings(&location.measurements);
            Restyle {
                traces: vec![
                    TraceData::new(columns.timestamps.clone(), columns.temperature),
                    TraceData::new(columns.timestamps, columns.humidity),
                ],
            }
        }
        ChartTarget::QualityIndex => {
            let series = QualitySeries::from_readings(&location.measurements);
            Restyle {
                traces: vec![TraceData {
                    x: series.timestamps,
                    y: series.ordinals.iter().map(|o| f64::from(*o)).collect(),
                    marker_color: Some(series.colors),
                    text: Some(series.hover_text),
                }],
            }
        }
    }
}
