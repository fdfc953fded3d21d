//! View state machine.
//!
//! All state of the provider page (search term, committed filters, sort,
//! pagination, selection) lives in one [`ViewState`] snapshot. A snapshot is
//! never edited in place by the shell: [`reduce`] takes the previous snapshot
//! and one [`ViewEvent`] and returns the next snapshot plus, optionally, a
//! notification for the user.
//!
//! # Key Properties
//!
//! - **Pure transitions**: no IO, no clocks, same input gives the same output
//! - **One event → at most one notification**
//! - **Totals never go stale**: every transition recomputes pagination totals
//!   from the filtered set and clamps the current page
//!
//! # Example
//!
//! ```rust
//! use provider_view::{BrowserSession, RecordStore, SortField, ViewEvent};
//!
//! let mut session = BrowserSession::new(RecordStore::sample().unwrap(), 10);
//! session.dispatch(ViewEvent::SortRequested { field: SortField::Email });
//! session.dispatch(ViewEvent::NextPage);
//!
//! let page = session.page();
//! assert_eq!(page.pagination.current_page, 2);
//! assert_eq!(page.rows.len(), 10);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::common::{PaginationConfig, ProviderId};
use crate::config::ViewConfig;
use crate::domains::providers::data::{find_record, RecordStore};
use crate::domains::providers::events::ViewEvent;
use crate::domains::providers::models::ProviderRecord;
use crate::domains::providers::notification::Notification;
use crate::domains::providers::view::{
    filter_records, view, FilterState, PageView, SelectionSet, SortConfig,
};
use crate::error::Result;

/// Snapshot of everything the provider page shows besides the records themselves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Raw search box contents. The predicate trims and case-folds it.
    pub search_term: String,
    /// Committed filters (the filter panel's draft is not part of the snapshot).
    pub filters: FilterState,
    pub sort: SortConfig,
    pub pagination: PaginationConfig,
    pub selection: SelectionSet,
}

impl ViewState {
    /// Page 1, no search, no filters, store order, nothing selected.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            search_term: String::new(),
            filters: FilterState::default(),
            sort: SortConfig::unsorted(),
            pagination: PaginationConfig::new(items_per_page),
            selection: SelectionSet::new(),
        }
    }

    /// Initial snapshot with totals computed against `records`.
    pub fn initial(records: &[ProviderRecord], items_per_page: usize) -> Self {
        settle(Self::new(items_per_page), records, false)
    }

    /// Visible page for this snapshot.
    pub fn page<'a>(&self, records: &'a [ProviderRecord]) -> PageView<'a> {
        view(
            records,
            &self.search_term,
            &self.filters,
            &self.sort,
            self.pagination,
        )
    }
}

/// Result of one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ViewState,
    pub notification: Option<Notification>,
}

impl Transition {
    fn quiet(state: ViewState) -> Self {
        Self {
            state,
            notification: None,
        }
    }

    fn notify(state: ViewState, notification: Notification) -> Self {
        Self {
            state,
            notification: Some(notification),
        }
    }
}

/// Advance `state` by one event.
pub fn reduce(state: &ViewState, records: &[ProviderRecord], event: &ViewEvent) -> Transition {
    let mut next = state.clone();

    match event {
        ViewEvent::SearchChanged { term } => {
            next.search_term = term.clone();
            next.pagination = next.pagination.first();
            Transition::quiet(settle(next, records, true))
        }

        ViewEvent::SearchSubmitted { term } => {
            next.search_term = term.trim().to_string();
            next.pagination = next.pagination.first();
            Transition::quiet(settle(next, records, true))
        }

        ViewEvent::FiltersApplied { filters } => {
            if let Err(err) = filters.validate() {
                warn!(error = %err, "Rejected filter update");
                return Transition::notify(
                    settle(next, records, false),
                    Notification::error(format!("Could not apply filters: {}", err)),
                );
            }

            next.filters = filters.clone();
            next.pagination = next.pagination.first();
            Transition::notify(
                settle(next, records, true),
                Notification::success("Filters applied successfully!"),
            )
        }

        ViewEvent::FiltersCleared => {
            next.filters = FilterState::default();
            next.search_term.clear();
            next.pagination = next.pagination.first();
            Transition::notify(
                settle(next, records, true),
                Notification::success("Filters cleared successfully!"),
            )
        }

        ViewEvent::SortRequested { field } => {
            next.sort = next.sort.toggle(*field);
            Transition::quiet(settle(next, records, false))
        }

        ViewEvent::PageRequested { page } => {
            let mut next = settle(next, records, false);
            next.pagination = next.pagination.go_to(*page);
            Transition::quiet(next)
        }

        ViewEvent::PreviousPage => {
            let mut next = settle(next, records, false);
            next.pagination = next.pagination.go_to(next.pagination.previous_page());
            Transition::quiet(next)
        }

        ViewEvent::NextPage => {
            let mut next = settle(next, records, false);
            next.pagination = next.pagination.go_to(next.pagination.next_page());
            Transition::quiet(next)
        }

        ViewEvent::SelectAll { checked } => {
            let mut next = settle(next, records, false);
            let page = next.page(records);
            next.selection.select_all(&page.rows, *checked);
            Transition::quiet(next)
        }

        ViewEvent::SelectRow { id, checked } => {
            next.selection.select_row(id, *checked);
            Transition::quiet(settle(next, records, false))
        }

        ViewEvent::EditRequested { id } => {
            let next = settle(next, records, false);
            match find_record(records, id) {
                Some(record) => Transition::notify(
                    next,
                    Notification::success(format!("Edit action triggered for {}", record.email)),
                ),
                None => {
                    warn!(provider_id = %id, "Edit requested for unknown provider");
                    Transition::notify(
                        next,
                        Notification::error(format!("Provider {} not found", id)),
                    )
                }
            }
        }
    }
}

/// Recompute totals (clamping the page) and optionally drop selected ids that
/// no longer match the search and filters.
fn settle(mut state: ViewState, records: &[ProviderRecord], prune_selection: bool) -> ViewState {
    let matched = filter_records(records, &state.search_term, &state.filters);
    state.pagination = state.pagination.with_totals(matched.len());

    if prune_selection && !state.selection.is_empty() {
        let matching: HashSet<&ProviderId> = matched.iter().map(|record| &record.id).collect();
        state.selection.retain(|id| matching.contains(id));
    }

    state
}

/// The single owning context of a provider page: the record store plus the
/// current view snapshot.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    store: RecordStore,
    state: ViewState,
}

impl BrowserSession {
    pub fn new(store: RecordStore, items_per_page: usize) -> Self {
        let state = ViewState::initial(store.records(), items_per_page);
        Self { store, state }
    }

    /// Load the configured record source and start at page 1.
    pub fn from_config(config: &ViewConfig) -> Result<Self> {
        config.validate()?;
        let store = RecordStore::load_or_sample(config.data_path.as_deref())?;
        Ok(Self::new(store, config.items_per_page))
    }

    /// Apply one event. Returns the notification the transition produced, if any.
    ///
    /// Called synchronously and serially by the shell's event loop.
    pub fn dispatch(&mut self, event: ViewEvent) -> Option<Notification> {
        debug!(?event, "Dispatching view event");

        let Transition {
            state,
            notification,
        } = reduce(&self.state, self.store.records(), &event);
        self.state = state;

        if let Some(notification) = &notification {
            info!(
                severity = ?notification.severity,
                message = %notification.message,
                "View notification"
            );
        }

        notification
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Visible page for the current snapshot.
    pub fn page(&self) -> PageView<'_> {
        self.state.page(self.store.records())
    }

    pub fn is_all_selected(&self) -> bool {
        self.state.selection.is_all_selected(&self.page().rows)
    }

    pub fn is_indeterminate(&self) -> bool {
        self.state.selection.is_indeterminate(&self.page().rows)
    }
}
