use crate::domain::entities::dataset::{Column, DEFAULT_PAGE_SIZE};

pub const DEFAULT_ENDPOINT_URL: &str =
    "https://raw.githubusercontent.com/saaslabsco/frontend-assignment/refs/heads/master/frontend-assignment.json";
pub const ENDPOINT_ENV_VAR: &str = "FUNDING_TABLE_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub endpoint_url: String,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub columns: Vec<Column>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Kickstarter projects".to_string(),
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![5, 10, 20, 50, 75, 100],
            columns: vec![
                Column::new("s.no", "S.No.", false),
                Column::new("percentage.funded", "Percentage funded", true),
                Column::new("amt.pledged", "Amount pledged", true),
            ],
        }
    }
}

impl AppConfig {
    /// Defaults, with the endpoint taken from `FUNDING_TABLE_URL` when set.
    pub fn from_env() -> Self {
        Self::default().with_endpoint_override(endpoint_from_env())
    }

    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(url) = endpoint.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.endpoint_url = url;
        }
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn endpoint_from_env() -> Option<String> {
    std::env::var(ENDPOINT_ENV_VAR).ok()
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_env() -> Option<String> {
    None
}
