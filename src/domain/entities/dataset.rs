use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// One row of the source dataset. Fields keep the order they were read in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = Self::default();
        for (key, value) in pairs {
            record.insert(key.into(), value.into());
        }
        record
    }

    /// A repeated key overwrites the value but keeps its first position.
    fn insert(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(known, _)| *known == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(known, _)| known == key)
            .map(|(_, value)| value.as_str())
    }

    /// Field value as `f64`; NaN when the field is missing or not a number.
    pub fn numeric(&self, key: &str) -> f64 {
        self.get(key).map_or(f64::NAN, parse_numeric_value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }
}

impl From<Map<String, Value>> for Record {
    fn from(raw: Map<String, Value>) -> Self {
        Self::from_pairs(
            raw.into_iter()
                .map(|(key, value)| (key, value_to_text(value))),
        )
    }
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn parse_numeric_value(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Records in fetch order. Fixed once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every field key in first-seen order.
    pub fn field_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for record in &self.records {
            for key in record.keys() {
                if !keys.iter().any(|known| known == key) {
                    keys.push(key.to_string());
                }
            }
        }
        keys
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub numeric: bool,
}

impl Column {
    pub fn new(key: &str, label: &str, numeric: bool) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            numeric,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn aria_sort(self) -> &'static str {
        match self {
            SortDirection::Asc => "ascending",
            SortDirection::Desc => "descending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    pub key: String,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(key: &str, direction: SortDirection) -> Self {
        Self {
            key: key.to_string(),
            direction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page numbers start at 1")]
    ZeroPage,
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A 1-based page number and a page size, both non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Result<Self, PageError> {
        if page == 0 {
            return Err(PageError::ZeroPage);
        }
        if size == 0 {
            return Err(PageError::ZeroPageSize);
        }
        Ok(Self { page, size })
    }

    pub fn first(size: usize) -> Result<Self, PageError> {
        Self::new(1, size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub records: Vec<Record>,
    pub page: usize,
    pub total_pages: usize,
    /// 1-based ordinal of the first row on this page.
    pub first_shown: usize,
    /// Not clamped to `total_records`: a short last page still reports
    /// `first_shown + page_size - 1`.
    pub last_shown: usize,
    pub total_records: usize,
}

impl PageView {
    pub fn summary(&self) -> String {
        format!(
            "Showing {} - {} out of {}",
            self.first_shown, self.last_shown, self.total_records
        )
    }
}
