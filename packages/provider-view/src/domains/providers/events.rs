//! Provider view events - USER INTENT FROM THE PRESENTATION SHELL
//!
//! Each event maps 1:1 to a transition of the view state machine. Events carry
//! everything the transition needs; the shell never mutates view state itself.

use serde::{Deserialize, Serialize};

use crate::common::ProviderId;

use super::view::{FilterState, SortField};

/// Provider view events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    // =========================================================================
    // Search & filters (reset to page 1)
    // =========================================================================
    /// Search box edited (live search, every keystroke)
    SearchChanged { term: String },

    /// Search box submitted with Enter (term is trimmed)
    SearchSubmitted { term: String },

    /// Filter panel applied - replaces the committed filters wholesale
    FiltersApplied { filters: FilterState },

    /// Filter panel cleared - also clears the search term
    FiltersCleared,

    // =========================================================================
    // Sorting & paging
    // =========================================================================
    /// Column header activated
    SortRequested { field: SortField },

    /// Page number activated (clamped to the available pages)
    PageRequested { page: usize },

    PreviousPage,

    NextPage,

    // =========================================================================
    // Selection
    // =========================================================================
    /// Header checkbox toggled
    SelectAll { checked: bool },

    /// Row checkbox toggled
    SelectRow { id: ProviderId, checked: bool },

    // =========================================================================
    // Row actions
    // =========================================================================
    /// Edit action on a row
    EditRequested { id: ProviderId },
}
