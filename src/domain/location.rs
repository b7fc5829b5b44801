// Monitored locations and their readings
use super::quality::QualityClass;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Display-ordered list of every monitored location.
pub type Dataset = Vec<Location>;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "data_hora", deserialize_with = "deserialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub co: f64,
    pub co2: f64,
    pub nox: f64,
    #[serde(rename = "temp")]
    pub temperature: f64,
    #[serde(rename = "umidade")]
    pub humidity: f64,
    #[serde(rename = "qualidade")]
    pub quality_class: QualityClass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "local")]
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(rename = "dados")]
    pub measurements: Vec<Reading>,
}

impl Location {
    /// Most recent reading; drives the marker color.
    pub fn latest(&self) -> Option<&Reading> {
        self.measurements.last()
    }

    pub fn is_chronological(&self) -> bool {
        self.measurements
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    }
}

/// Parse a reading timestamp.
/// Offset-carrying values are normalized to UTC; naive values are kept as-is.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "local": "Parque Ibirapuera",
            "lat": -23.5874,
            "lon": -46.6576,
            "dados": [
                {"data_hora": "2024-05-01T08:00:00", "co": 0.4, "co2": 410.0, "nox": 21.0,
                 "temp": 18.5, "umidade": 72.0, "qualidade": "Bom"},
                {"data_hora": "2024-05-01T09:00:00", "co": 0.9, "co2": 432.0, "nox": 38.0,
                 "temp": 20.1, "umidade": 65.0, "qualidade": "Moderado"}
            ]
        }
    ]"#;

    #[test]
    fn test_parse_dataset() {
        let dataset: Dataset = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 1);

        let location = &dataset[0];
        assert_eq!(location.name, "Parque Ibirapuera");
        assert_eq!(location.measurements.len(), 2);
        assert_eq!(location.measurements[1].temperature, 20.1);
        assert_eq!(location.measurements[1].humidity, 65.0);
        assert_eq!(
            location.latest().map(|r| r.quality_class),
            Some(QualityClass::Moderate)
        );
        assert!(location.is_chronological());
    }

    #[test]
    fn test_parse_timestamp_forms() {
        let expected =
            NaiveDateTime::parse_from_str("2024-05-01 08:30:00", "%Y-%m-%d %H:%M:%S").unwrap();

        assert_eq!(parse_timestamp("2024-05-01T08:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01 08:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T08:30"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T05:30:00-03:00"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_out_of_order_readings_detected() {
        let mut dataset: Dataset = serde_json::from_str(SAMPLE).unwrap();
        dataset[0].measurements.reverse();
        assert!(!dataset[0].is_chronological());
    }

    #[test]
    fn test_empty_location_has_no_latest() {
        let location = Location {
            name: "Vazio".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            measurements: Vec::new(),
        };
        assert!(location.latest().is_none());
        assert!(location.is_chronological());
    }
}
