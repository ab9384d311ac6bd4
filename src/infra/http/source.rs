use tracing::debug;

use crate::domain::entities::dataset::{Dataset, Record};
use crate::usecase::ports::source::{DatasetSource, SourceError};

/// A single GET against a fixed URL. No timeout and no retry.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<Dataset, SourceError> {
        debug!(url = %self.url, "fetching dataset");
        let records: Vec<Record> = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(Dataset::new(records))
    }
}
