// Dataset sources - HTTP document and local file
use crate::application::dataset_source::DatasetSource;
use crate::domain::error::DataLoadFailure;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct HttpDatasetSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDatasetSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, DataLoadFailure> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DataLoadFailure::Http {
                location: self.url.clone(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DataLoadFailure::Status {
                location: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|e| DataLoadFailure::Http {
            location: self.url.clone(),
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    path: PathBuf,
    display: String,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    fn location(&self) -> &str {
        &self.display
    }

    async fn fetch(&self) -> Result<String, DataLoadFailure> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DataLoadFailure::Io {
                location: self.display.clone(),
                source,
            })
    }
}

/// Pick the source for a configured location: URLs go over HTTP, anything
/// else is read from disk.
pub fn source_for(location: &str) -> Arc<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpDatasetSource::new(location.to_string()))
    } else {
        Arc::new(FileDatasetSource::new(location))
    }
}
