use std::path::{Path, PathBuf};

use crate::domain::entities::dataset::Dataset;
use crate::infra::import::csv::decode_csv_dataset;
use crate::infra::import::json::decode_json_dataset;
use crate::usecase::ports::source::{DatasetSource, SourceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        if ext == "csv" {
            FileFormat::Csv
        } else {
            FileFormat::Json
        }
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Dataset, SourceError> {
        let bytes = std::fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        match FileFormat::from_path(&self.path) {
            FileFormat::Csv => decode_csv_dataset(bytes.as_slice()),
            FileFormat::Json => decode_json_dataset(&String::from_utf8_lossy(&bytes)),
        }
    }
}
