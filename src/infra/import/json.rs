use crate::domain::entities::dataset::{Dataset, Record};
use crate::usecase::ports::source::SourceError;

/// Expects a top-level array of flat objects.
pub fn decode_json_dataset(text: &str) -> Result<Dataset, SourceError> {
    let records: Vec<Record> = serde_json::from_str(text)?;
    Ok(Dataset::new(records))
}
