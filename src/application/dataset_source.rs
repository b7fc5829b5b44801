// Source trait for the static dataset document
use crate::domain::error::DataLoadFailure;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Where the document lives, for log and error messages
    fn location(&self) -> &str;

    /// Retrieve the raw document in a single attempt
    async fn fetch(&self) -> Result<String, DataLoadFailure>;
}
