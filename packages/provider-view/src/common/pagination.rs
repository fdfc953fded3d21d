//! Page-number pagination over an in-memory result set
//!
//! `PaginationConfig` carries the requested page and page size together with
//! the totals of the result set it was last applied to. Totals are never set
//! by hand: `with_totals` recomputes them from the filtered item count and
//! clamps the current page in the same step, so a stale page number can not
//! outlive the result set that produced it.
//!
//! # Usage
//!
//! ```rust
//! use provider_view::{PageLabel, PaginationConfig};
//!
//! let pagination = PaginationConfig::new(10).with_totals(25).go_to(3);
//! assert_eq!(pagination.total_pages, 3);
//! assert_eq!(pagination.slice_range(), 20..25);
//! assert_eq!(pagination.summary(), "Showing 21 to 25 of 25 results");
//! assert_eq!(
//!     pagination.labels(),
//!     vec![PageLabel::Page(1), PageLabel::Page(2), PageLabel::Page(3)]
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

// ============================================================================
// PaginationConfig
// ============================================================================

/// Page state for the provider table.
///
/// Invariant (after `with_totals`): `1 <= current_page <= max(1, total_pages)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Current page, 1-indexed.
    pub current_page: usize,
    /// Rows per page, at least 1.
    pub items_per_page: usize,
    /// Number of records surviving search and filters.
    pub total_items: usize,
    /// `ceil(total_items / items_per_page)`; 0 when there are no items.
    pub total_pages: usize,
}

impl PaginationConfig {
    /// Page 1 of an empty result set.
    pub fn new(items_per_page: usize) -> Self {
        PaginationConfig {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items: 0,
            total_pages: 0,
        }
    }

    /// Recompute totals for a result set of `total_items` and clamp the current page.
    pub fn with_totals(self, total_items: usize) -> Self {
        let total_pages = page_count(total_items, self.items_per_page);
        PaginationConfig {
            current_page: clamp_page(self.current_page, total_pages),
            total_items,
            total_pages,
            ..self
        }
    }

    /// Request a page. Clamped against the totals this config currently carries.
    pub fn go_to(self, page: usize) -> Self {
        PaginationConfig {
            current_page: clamp_page(page, self.total_pages),
            ..self
        }
    }

    /// Back to page 1, keeping page size and totals.
    pub fn first(self) -> Self {
        PaginationConfig {
            current_page: 1,
            ..self
        }
    }

    /// Index range of the visible page inside the filtered result set.
    pub fn slice_range(&self) -> Range<usize> {
        let start = (self.current_page.saturating_sub(1))
            .saturating_mul(self.items_per_page)
            .min(self.total_items);
        let end = start
            .saturating_add(self.items_per_page)
            .min(self.total_items);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Target of the "Previous" button.
    pub fn previous_page(&self) -> usize {
        self.current_page.saturating_sub(1).max(1)
    }

    /// Target of the "Next" button.
    pub fn next_page(&self) -> usize {
        (self.current_page + 1).min(self.total_pages).max(1)
    }

    /// 1-based `(from, to)` of the visible rows, `None` when nothing matches.
    pub fn showing(&self) -> Option<(usize, usize)> {
        let range = self.slice_range();
        if range.is_empty() {
            None
        } else {
            Some((range.start + 1, range.end))
        }
    }

    /// Footer line, e.g. "Showing 11 to 20 of 25 results".
    pub fn summary(&self) -> String {
        match self.showing() {
            Some((from, to)) => format!(
                "Showing {} to {} of {} results",
                from, to, self.total_items
            ),
            None => "No results".to_string(),
        }
    }

    /// Labels for the page-number control.
    pub fn labels(&self) -> Vec<PageLabel> {
        page_labels(self.current_page, self.total_pages)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ITEMS_PER_PAGE)
    }
}

/// Number of pages needed for `total_items`.
pub fn page_count(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1))
}

/// Clamp a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

// ============================================================================
// Page labels
// ============================================================================

/// One entry of the page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLabel {
    /// Navigates to this page when activated.
    Page(usize),
    /// Stands for a run of hidden pages. Not interactive.
    Ellipsis,
}

impl PageLabel {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageLabel::Page(n) => Some(*n),
            PageLabel::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLabel::Page(n) => write!(f, "{}", n),
            PageLabel::Ellipsis => f.write_str("..."),
        }
    }
}

/// Page labels around `current_page`.
///
/// Page 1 and the last page are always present, plus the pages directly
/// before and after the current one. Every run of hidden pages collapses into
/// a single [`PageLabel::Ellipsis`]. No pages yields no labels.
pub fn page_labels(current_page: usize, total_pages: usize) -> Vec<PageLabel> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = clamp_page(current_page, total_pages);
    let mut labels = vec![PageLabel::Page(1)];

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);

    if start > 2 {
        labels.push(PageLabel::Ellipsis);
    }

    // empty when total_pages <= 2
    for page in start..=end {
        labels.push(PageLabel::Page(page));
    }

    if start <= end && end + 1 < total_pages {
        labels.push(PageLabel::Ellipsis);
    }

    if total_pages > 1 {
        labels.push(PageLabel::Page(total_pages));
    }

    labels
}
