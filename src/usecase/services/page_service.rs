use std::cmp::Ordering;

use crate::domain::entities::dataset::{
    Dataset, PageRequest, PageView, Record, SortDirection, SortDirective,
};

pub fn total_pages(total_records: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_records.div_ceil(page_size)
}

/// Cuts the requested page out of `dataset` and, when a directive is given,
/// orders that page only. Rows on other pages never move onto this one.
pub fn derive(dataset: &Dataset, request: PageRequest, sort: Option<&SortDirective>) -> PageView {
    let offset = request.offset();
    let records = dataset.records();
    let start = offset.min(records.len());
    let end = offset.saturating_add(request.size()).min(records.len());

    let mut slice: Vec<Record> = records[start..end].to_vec();
    if let Some(directive) = sort {
        sort_records(&mut slice, directive);
    }

    PageView {
        records: slice,
        page: request.page(),
        total_pages: total_pages(records.len(), request.size()),
        first_shown: offset.saturating_add(1),
        last_shown: offset.saturating_add(request.size()),
        total_records: records.len(),
    }
}

/// Stable; unparsable values go last whichever way the sort runs.
pub fn sort_records(records: &mut [Record], directive: &SortDirective) {
    records.sort_by(|a, b| {
        compare_numeric(
            a.numeric(&directive.key),
            b.numeric(&directive.key),
            directive.direction,
        )
    });
}

pub fn compare_numeric(a: f64, b: f64, direction: SortDirection) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    }
}
