//! Data-view pipeline: records -> filter -> sort -> paginate
//!
//! `view` is a pure function of its inputs. The page slice and the pagination
//! totals come out of the same pass, so the totals always describe the rows
//! being returned.

use tracing::debug;

use crate::common::PaginationConfig;
use crate::domains::providers::models::ProviderRecord;

use super::filter::{filter_records, FilterState};
use super::sort::{sort_records, SortConfig};

/// Rows to render plus the pagination they were cut with.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// Visible page, in display order.
    pub rows: Vec<&'a ProviderRecord>,
    /// Totals of the filtered set and the (clamped) current page.
    pub pagination: PaginationConfig,
}

impl<'a> PageView<'a> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Filtered and sorted records, before pagination.
pub fn filtered_sorted<'a>(
    records: &'a [ProviderRecord],
    search_term: &str,
    filters: &FilterState,
    sort: &SortConfig,
) -> Vec<&'a ProviderRecord> {
    let mut matched = filter_records(records, search_term, filters);
    sort_records(&mut matched, sort);
    matched
}

/// Compute the visible page.
///
/// `pagination.total_items`/`total_pages` on input are ignored; they are
/// recomputed from the filtered set and the current page is clamped into
/// `[1, max(1, total_pages)]`.
pub fn view<'a>(
    records: &'a [ProviderRecord],
    search_term: &str,
    filters: &FilterState,
    sort: &SortConfig,
    pagination: PaginationConfig,
) -> PageView<'a> {
    let mut matched = filtered_sorted(records, search_term, filters, sort);
    let pagination = pagination.with_totals(matched.len());

    let range = pagination.slice_range();
    matched.truncate(range.end);
    let rows = matched.split_off(range.start);

    debug!(
        total_items = pagination.total_items,
        total_pages = pagination.total_pages,
        current_page = pagination.current_page,
        rows = rows.len(),
        "Provider view recomputed"
    );

    PageView { rows, pagination }
}
