use std::io::Read;

use crate::domain::entities::dataset::{Dataset, Record};
use crate::usecase::ports::source::SourceError;

/// Header row names the fields; short rows leave the trailing fields empty.
pub fn decode_csv_dataset<R: Read>(input: R) -> Result<Dataset, SourceError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record = Record::from_pairs(
            headers
                .iter()
                .enumerate()
                .map(|(col_idx, header)| (header, row.get(col_idx).unwrap_or(""))),
        );
        records.push(record);
    }

    Ok(Dataset::new(records))
}
