// Air quality classification
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed three-level rating attached to every reading.
///
/// The wire labels are the dataset's own (`Bom`, `Moderado`, `Crítico`).
/// Anything else fails deserialization so a mislabelled reading surfaces as a
/// load failure instead of a silently recolored marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityClass {
    #[serde(rename = "Bom")]
    Good,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Crítico", alias = "Critico")]
    Critical,
}

impl QualityClass {
    pub const ALL: [QualityClass; 3] = [
        QualityClass::Good,
        QualityClass::Moderate,
        QualityClass::Critical,
    ];

    pub fn color(self) -> &'static str {
        match self {
            QualityClass::Good => "#4CAF50",
            QualityClass::Moderate => "#FFC107",
            QualityClass::Critical => "#F44336",
        }
    }

    /// Position on the quality-index chart's y axis.
    pub fn ordinal(self) -> u8 {
        match self {
            QualityClass::Good => 1,
            QualityClass::Moderate => 2,
            QualityClass::Critical => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityClass::Good => "Bom",
            QualityClass::Moderate => "Moderado",
            QualityClass::Critical => "Crítico",
        }
    }
}

impl fmt::Display for QualityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
