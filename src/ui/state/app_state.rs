use dioxus::prelude::{use_signal, Signal};

use crate::config::AppConfig;
use crate::domain::entities::dataset::Dataset;
use crate::ui::state::pager::Pager;

pub struct AppState {
    pub dataset: Signal<Dataset>,
    pub pager: Signal<Pager>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let page_size = config.default_page_size;
        Self {
            dataset: use_signal(Dataset::empty),
            pager: use_signal(move || Pager::new(page_size).unwrap_or_default()),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
