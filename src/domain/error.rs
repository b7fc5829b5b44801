// Error types - Load and render failures
use super::chart::ChartTarget;
use thiserror::Error;

/// The dataset could not be retrieved or parsed. The dashboard cannot proceed.
#[derive(Debug, Error)]
pub enum DataLoadFailure {
    #[error("Failed to read dataset from {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch dataset from {location}: {message}")]
    Http { location: String, message: String },

    #[error("Dataset request to {location} returned status {status}")]
    Status { location: String, status: u16 },

    #[error("Dataset is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A render operation was invoked with input it cannot draw.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Dataset is empty, nothing to place on the map")]
    EmptyDataset,

    #[error("Location '{0}' has no measurements")]
    NoMeasurements(String),

    #[error("No plot has been drawn at target {0}")]
    PlotMissing(ChartTarget),
}
