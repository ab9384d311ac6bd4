use tracing::{error, info};

use crate::domain::entities::dataset::Dataset;
use crate::usecase::ports::source::DatasetSource;

pub struct LoadService<S: DatasetSource> {
    source: S,
}

impl<S: DatasetSource> LoadService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Reads the source once. A failed read is logged and leaves the table
    /// empty; nothing is retried.
    pub async fn load(&self) -> Dataset {
        let origin = self.source.describe();
        match self.source.load().await {
            Ok(dataset) => {
                info!(origin = %origin, records = dataset.len(), "dataset loaded");
                dataset
            }
            Err(err) => {
                error!(origin = %origin, "failed to load dataset: {err}");
                Dataset::empty()
            }
        }
    }
}
