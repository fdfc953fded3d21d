//! Pure building blocks of the provider table view

pub mod filter;
pub mod pipeline;
pub mod selection;
pub mod sort;

pub use filter::{filter_records, FilterState, RecordPredicate};
pub use pipeline::{filtered_sorted, view, PageView};
pub use selection::SelectionSet;
pub use sort::{compare_records, sort_records, SortConfig, SortDirection, SortField};
