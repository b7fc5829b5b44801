// Column views over a location's readings
use super::location::Reading;
use chrono::NaiveDateTime;

/// Parallel arrays extracted from a reading history, one entry per reading,
/// in the readings' own order.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementColumns {
    pub timestamps: Vec<NaiveDateTime>,
    pub co: Vec<f64>,
    pub co2: Vec<f64>,
    pub nox: Vec<f64>,
    pub temperature: Vec<f64>,
    pub humidity: Vec<f64>,
}

impl MeasurementColumns {
    pub fn from_readings(readings: &[Reading]) -> Self {
        Self {
            timestamps: readings.iter().map(|r| r.timestamp).collect(),
            co: readings.iter().map(|r| r.co).collect(),
            co2: readings.iter().map(|r| r.co2).collect(),
            nox: readings.iter().map(|r| r.nox).collect(),
            temperature: readings.iter().map(|r| r.temperature).collect(),
            humidity: readings.iter().map(|r| r.humidity).collect(),
        }
    }
}

/// Quality classification laid out for the categorical scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct QualitySeries {
    pub timestamps: Vec<NaiveDateTime>,
    pub ordinals: Vec<u8>,
    pub colors: Vec<String>,
    pub hover_text: Vec<String>,
}

impl QualitySeries {
    pub fn from_readings(readings: &[Reading]) -> Self {
        Self {
            timestamps: readings.iter().map(|r| r.timestamp).collect(),
            ordinals: readings.iter().map(|r| r.quality_class.ordinal()).collect(),
            colors: readings
                .iter()
                .map(|r| r.quality_class.color().to_string())
                .collect(),
            hover_text: readings
                .iter()
                .map(|r| format!("Qualidade: {}", r.quality_class))
                .collect(),
        }
    }
}
