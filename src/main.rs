mod app;
mod config;
mod domain;
mod infra;
mod ui;
mod usecase;


#[cfg(feature = "desktop")]
use std::path::{Path, PathBuf};

#[cfg(feature = "desktop")]
use anyhow::{anyhow, Context, Result};
#[cfg(feature = "desktop")]
use directories::ProjectDirs;

use crate::app::App;
use crate::domain::entities::dataset::{Column, Dataset, SortDirection, SortDirective};

const NONE_OPTION_VALUE: &str = "__none__";

#[cfg(feature = "desktop")]
fn main() {
    init_logging();

    let title = config::AppConfig::from_env().title;
    let mut desktop_config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title(title));
    match default_webview_data_dir() {
        Ok(dir) => desktop_config = desktop_config.with_data_directory(dir),
        Err(err) => tracing::warn!("falling back to the default webview data directory: {err:#}"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logging: {err}");
    }
}

#[cfg(feature = "desktop")]
fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

#[cfg(feature = "desktop")]
fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "fundingtable", "funding-table")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

/// Configured columns present in the data, or the data's own keys when
/// none of them are.
fn visible_columns(configured: &[Column], dataset: &Dataset) -> Vec<Column> {
    if dataset.is_empty() {
        return configured.to_vec();
    }

    let keys = dataset.field_keys();
    let matching: Vec<Column> = configured
        .iter()
        .filter(|column| keys.iter().any(|key| key == &column.key))
        .cloned()
        .collect();
    if !matching.is_empty() {
        return matching;
    }

    keys.iter()
        .map(|key| Column::new(key, key, column_is_numeric(dataset, key)))
        .collect()
}

fn column_is_numeric(dataset: &Dataset, key: &str) -> bool {
    let mut seen_value = false;
    for record in dataset.records() {
        let Some(value) = record.get(key).map(str::trim).filter(|v| !v.is_empty()) else {
            continue;
        };
        if value.parse::<f64>().is_err() {
            return false;
        }
        seen_value = true;
    }
    seen_value
}

fn sort_option_value(sort: Option<&SortDirective>) -> String {
    match sort {
        Some(directive) => format!("{}:{}", directive.key, directive.direction.as_str()),
        None => NONE_OPTION_VALUE.to_string(),
    }
}

fn parse_sort_option(value: &str) -> Option<SortDirective> {
    let (key, direction) = value.rsplit_once(':')?;
    let direction = match direction {
        "asc" => SortDirection::Asc,
        "desc" => SortDirection::Desc,
        _ => return None,
    };
    if key.is_empty() {
        return None;
    }
    Some(SortDirective::new(key, direction))
}

/// `(value, label)` pairs for the sort selector, "no sorting" first.
/// Only numeric columns are offered.
fn sort_options(columns: &[Column]) -> Vec<(String, String)> {
    let mut options = vec![(NONE_OPTION_VALUE.to_string(), "No sorting".to_string())];
    for column in columns.iter().filter(|column| column.numeric) {
        for (direction, word) in [(SortDirection::Asc, "Least"), (SortDirection::Desc, "Most")] {
            let directive = SortDirective::new(&column.key, direction);
            options.push((
                sort_option_value(Some(&directive)),
                format!("{word} {}", column.label.to_lowercase()),
            ));
        }
    }
    options
}

fn aria_sort_for(column_key: &str, sort: Option<&SortDirective>) -> &'static str {
    match sort {
        Some(directive) if directive.key == column_key => directive.direction.aria_sort(),
        _ => "none",
    }
}

fn format_number_with_commas(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    let digits = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

fn format_cell_value(column: &Column, raw: &str) -> String {
    if !column.numeric {
        return raw.to_string();
    }
    let trimmed = raw.trim();
    if trimmed.contains(['e', 'E']) {
        return raw.to_string();
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            let decimals = trimmed
                .split_once('.')
                .map(|(_, frac)| frac.len())
                .unwrap_or(0);
            format_number_with_commas(value, decimals)
        }
        _ => raw.to_string(),
    }
}

fn column_alignment(column: &Column) -> &'static str {
    if column.numeric {
        "right"
    } else {
        "left"
    }
}

fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; overflow: hidden; font-family: sans-serif; padding: 0 12px; box-sizing: border-box;"
}

fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd; border-radius: 6px;"
}

fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f5f5f5; border-bottom: 1px solid #ccc; padding: 6px 10px; text-align: left;"
}

fn table_cell_style(alignment: &str) -> String {
    format!("padding: 6px 10px; border-bottom: 1px solid #eee; text-align: {alignment};")
}
