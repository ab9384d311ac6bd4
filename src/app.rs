use std::path::PathBuf;

use dioxus::prelude::*;
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::entities::dataset::Dataset;
use crate::infra::http::source::HttpSource;
use crate::infra::import::file::FileSource;
use crate::ui::state::app_state::AppState;
use crate::ui::state::pager::Pager;
use crate::usecase::ports::source::DatasetSource;
use crate::usecase::services::load_service::LoadService;
use crate::usecase::services::page_service::derive;
use crate::{
    aria_sort_for, column_alignment, format_cell_value, parse_sort_option, root_container_style,
    sort_option_value, sort_options, table_cell_style, table_container_style,
    table_header_cell_style, visible_columns,
};

#[derive(Clone, Debug, PartialEq)]
struct SelectOption {
    value: String,
    label: String,
}

#[component]
fn SelectControl(
    label: &'static str,
    options: Vec<SelectOption>,
    selected: String,
    disabled: bool,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            style: "display: inline-flex; align-items: center; gap: 6px;",
            span { "{label}" }
            select {
                disabled: disabled,
                value: "{selected}",
                onchange: move |event| on_select.call(event.value()),
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
fn OpenFileButton(disabled: bool, on_pick: EventHandler<PathBuf>) -> Element {
    rsx! {
        button {
            disabled: disabled,
            onclick: move |_| {
                let Some(path) = rfd::FileDialog::new()
                    .add_filter("Dataset", &["json", "csv"])
                    .pick_file() else {
                    return;
                };
                on_pick.call(path);
            },
            "Open file…"
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[component]
fn OpenFileButton(disabled: bool, on_pick: EventHandler<PathBuf>) -> Element {
    let _ = (disabled, on_pick);
    rsx! {}
}

/// Swaps in whatever `source` yields and sends the pager back to page 1.
async fn replace_dataset<S: DatasetSource>(
    source: S,
    mut dataset: Signal<Dataset>,
    mut pager: Signal<Pager>,
    mut status: Signal<String>,
    mut busy: Signal<bool>,
) {
    busy.set(true);
    let service = LoadService::new(source);
    status.set(format!("Loading {}", service.describe()));

    let loaded = service.load().await;
    let count = loaded.len();
    dataset.set(loaded);
    pager.write().reset();

    status.set(format!("{count} records"));
    busy.set(false);
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::from_env);
    let AppState {
        dataset,
        mut pager,
        busy,
        status,
    } = AppState::new(&config);

    let endpoint = config.endpoint_url.clone();
    use_future(move || {
        let endpoint = endpoint.clone();
        async move {
            replace_dataset(HttpSource::new(endpoint), dataset, pager, status, busy).await;
        }
    });

    let view = use_memo(move || {
        let pager_state = pager.read();
        derive(&dataset.read(), pager_state.request(), pager_state.sort())
    });

    let current = view();
    let columns = visible_columns(&config.columns, &dataset.read());
    let pager_state = pager.read().clone();
    let total = current.total_pages;
    let summary = current.summary();
    let can_previous = pager_state.can_go_previous();
    let can_next = pager_state.can_go_next(total);
    let current_page = current.page;
    let max_page = total.max(1);
    let sort = pager_state.sort().cloned();

    let header_style = table_header_cell_style();
    let headers: Vec<(String, String, &'static str)> = columns
        .iter()
        .map(|column| {
            (
                column.key.clone(),
                column.label.clone(),
                aria_sort_for(&column.key, sort.as_ref()),
            )
        })
        .collect();
    let rows: Vec<Vec<(String, String)>> = current
        .records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| {
                    let raw = record.get(&column.key).unwrap_or("");
                    (
                        format_cell_value(column, raw),
                        table_cell_style(column_alignment(column)),
                    )
                })
                .collect()
        })
        .collect();
    let column_count = columns.len().max(1);
    let empty_cell_style = table_cell_style("center");
    let root_style = root_container_style();
    let container_style = table_container_style();

    let page_size_options: Vec<SelectOption> = config
        .page_size_options
        .iter()
        .map(|size| SelectOption {
            value: size.to_string(),
            label: size.to_string(),
        })
        .collect();
    let sort_select_options: Vec<SelectOption> = sort_options(&columns)
        .into_iter()
        .map(|(value, label)| SelectOption { value, label })
        .collect();

    rsx! {
        div {
            style: "{root_style}",
            header {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                h1 { style: "font-size: 18px; margin: 0;", "{config.title}" }
                OpenFileButton {
                    disabled: busy(),
                    on_pick: move |path: PathBuf| {
                        spawn(async move {
                            replace_dataset(FileSource::new(path), dataset, pager, status, busy).await;
                        });
                    },
                }
                span { style: "color: #555;", "{status}" }
            }

            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 0 0 8px 0;",
                SelectControl {
                    label: "Rows per page",
                    options: page_size_options,
                    selected: pager_state.page_size().to_string(),
                    disabled: busy(),
                    on_select: move |value: String| {
                        let Ok(size) = value.parse::<usize>() else {
                            warn!("ignoring page size {value:?}");
                            return;
                        };
                        if let Err(err) = pager.write().set_page_size(size) {
                            warn!("ignoring page size {size}: {err}");
                        }
                    },
                }
                SelectControl {
                    label: "Sort by",
                    options: sort_select_options,
                    selected: sort_option_value(sort.as_ref()),
                    disabled: busy(),
                    on_select: move |value: String| {
                        pager.write().set_sort(parse_sort_option(&value));
                    },
                }
            }

            div {
                style: "{container_style}",
                table {
                    style: "border-collapse: collapse; width: 100%;",
                    caption {
                        style: "position: absolute; left: -10000px;",
                        "{config.title}"
                    }
                    thead {
                        tr {
                            for (key, label, aria_sort) in headers.iter() {
                                th {
                                    key: "{key}",
                                    style: "{header_style}",
                                    "scope": "col",
                                    "aria-sort": "{aria_sort}",
                                    "{label}"
                                }
                            }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td {
                                    colspan: "{column_count}",
                                    style: "{empty_cell_style}",
                                    "No records"
                                }
                            }
                        }
                        for (row_idx, row) in rows.iter().enumerate() {
                            tr {
                                key: "{row_idx}",
                                for (col_idx, (text, cell_style)) in row.iter().enumerate() {
                                    td {
                                        key: "{col_idx}",
                                        style: "{cell_style}",
                                        "{text}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            nav {
                "aria-label": "Pagination",
                style: "display: flex; gap: 8px; align-items: center; padding: 8px 0;",
                button {
                    "aria-label": "Previous page",
                    disabled: !can_previous,
                    onclick: move |_| {
                        pager.write().go_previous();
                    },
                    "Previous"
                }
                label {
                    style: "display: inline-flex; align-items: center; gap: 6px;",
                    span { "Page" }
                    input {
                        r#type: "number",
                        min: "1",
                        max: "{max_page}",
                        value: "{current_page}",
                        "aria-label": "Go to page",
                        onchange: move |event| {
                            let pages = view.peek().total_pages;
                            match event.value().trim().parse::<usize>() {
                                Ok(target) => pager.write().jump_to(target, pages),
                                Err(_) => warn!("ignoring page number {:?}", event.value()),
                            }
                        },
                    }
                    span { "of {total}" }
                }
                button {
                    "aria-label": "Next page",
                    disabled: !can_next,
                    onclick: move |_| {
                        let pages = view.peek().total_pages;
                        pager.write().go_next(pages);
                    },
                    "Next"
                }
                span { "aria-live": "polite", "{summary}" }
            }
        }
    }
}
