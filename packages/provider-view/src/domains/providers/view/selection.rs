//! Row selection tracker
//!
//! Select-all is scoped to the visible page: checking it selects exactly the
//! rows on screen, unchecking it clears everything.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::common::ProviderId;
use crate::domains::providers::models::ProviderRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: BTreeSet<ProviderId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header checkbox. Checked selects exactly `visible`; unchecked clears all.
    pub fn select_all(&mut self, visible: &[&ProviderRecord], checked: bool) {
        self.ids.clear();
        if checked {
            self.ids.extend(visible.iter().map(|record| record.id.clone()));
        }
    }

    /// Row checkbox.
    pub fn select_row(&mut self, id: &ProviderId, checked: bool) {
        if checked {
            self.ids.insert(id.clone());
        } else {
            self.ids.remove(id);
        }
    }

    /// Drop identifiers for which `keep` is false.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&ProviderId) -> bool,
    {
        self.ids.retain(keep);
    }

    pub fn contains(&self, id: &ProviderId) -> bool {
        self.ids.contains(id)
    }

    /// Header checkbox checked: the page has rows and all of them are selected.
    pub fn is_all_selected(&self, visible: &[&ProviderRecord]) -> bool {
        !visible.is_empty() && visible.iter().all(|record| self.ids.contains(&record.id))
    }

    /// Header checkbox indeterminate: some, but not all, of the page is
    /// selected and nothing outside the page is.
    pub fn is_indeterminate(&self, visible: &[&ProviderRecord]) -> bool {
        if self.ids.is_empty() || self.ids.len() >= visible.len() {
            return false;
        }
        self.ids
            .iter()
            .all(|id| visible.iter().any(|record| &record.id == id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProviderId> {
        self.ids.iter()
    }
}
