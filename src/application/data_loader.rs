// Data loader - Use case for retrieving the dataset once at startup
use crate::application::dataset_source::DatasetSource;
use crate::domain::error::DataLoadFailure;
use crate::domain::location::Dataset;
use std::sync::Arc;

#[derive(Clone)]
pub struct DataLoader {
    source: Arc<dyn DatasetSource>,
}

impl DataLoader {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    /// Fetch and parse the dataset. No retry and no cache.
    pub async fn load(&self) -> Result<Dataset, DataLoadFailure> {
        let location = self.source.location().to_string();

        let dataset = match self.fetch_and_parse().await {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::error!("Failed to load dataset from {}: {}", location, e);
                return Err(e);
            }
        };

        for entry in &dataset {
            if !entry.is_chronological() {
                tracing::warn!(
                    "Readings for '{}' are not in chronological order",
                    entry.name
                );
            }
        }

        tracing::info!("Loaded {} locations from {}", dataset.len(), location);
        Ok(dataset)
    }

    async fn fetch_and_parse(&self) -> Result<Dataset, DataLoadFailure> {
        let raw = self.source.fetch().await?;
        Ok(serde_json::from_str(&raw)?)
    }
}
