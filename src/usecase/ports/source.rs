use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::dataset::Dataset;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed json dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed csv dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Somewhere a whole dataset can be read from in one go.
#[allow(async_fn_in_trait)]
pub trait DatasetSource {
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Dataset, SourceError>;
}
