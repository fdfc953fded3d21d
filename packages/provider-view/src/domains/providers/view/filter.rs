//! Filter predicate builder
//!
//! Turns the committed filter state plus the free-text search term into one
//! predicate over a provider record. Every active constraint is ANDed; an
//! inactive one (empty text, `None` enum) accepts everything.

use serde::{Deserialize, Serialize};

use crate::domains::providers::models::{
    parse_iso_date, ProviderRecord, ProviderStatus, ServiceOffering, VendorType,
};
use crate::error::{Result, ViewError};

/// Filter panel state. Replaced wholesale on apply/clear, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Case-insensitive substring of the postcode.
    pub postcode: String,
    pub status: Option<ProviderStatus>,
    /// Inclusive lower bound on the signup date, `YYYY-MM-DD`.
    pub date_start: String,
    /// Inclusive upper bound on the signup date, `YYYY-MM-DD`.
    pub date_end: String,
    pub vendor_type: Option<VendorType>,
    pub service_offering: Option<ServiceOffering>,
}

impl FilterState {
    /// No field constrains anything.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of fields that currently constrain the result set.
    pub fn active_count(&self) -> usize {
        [
            !self.postcode.trim().is_empty(),
            self.status.is_some(),
            !self.date_start.trim().is_empty(),
            !self.date_end.trim().is_empty(),
            self.vendor_type.is_some(),
            self.service_offering.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Date bounds must be real calendar dates and must not be inverted.
    pub fn validate(&self) -> Result<()> {
        let start = non_empty(&self.date_start);
        let end = non_empty(&self.date_end);

        let start_date = start.map(parse_iso_date).transpose()?;
        let end_date = end.map(parse_iso_date).transpose()?;

        if let (Some(start_date), Some(end_date)) = (start_date, end_date) {
            if start_date > end_date {
                return Err(ViewError::InvertedDateRange {
                    start: self.date_start.trim().to_string(),
                    end: self.date_end.trim().to_string(),
                });
            }
        }

        Ok(())
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Predicate built once per pipeline pass.
///
/// The search term and postcode are case-folded here so `matches` does not
/// redo it for every record.
#[derive(Debug, Clone)]
pub struct RecordPredicate<'f> {
    search: Option<String>,
    postcode: Option<String>,
    date_start: Option<&'f str>,
    date_end: Option<&'f str>,
    filters: &'f FilterState,
}

impl<'f> RecordPredicate<'f> {
    pub fn new(search_term: &str, filters: &'f FilterState) -> Self {
        Self {
            search: non_empty(search_term).map(str::to_lowercase),
            postcode: non_empty(&filters.postcode).map(str::to_lowercase),
            date_start: non_empty(&filters.date_start),
            date_end: non_empty(&filters.date_end),
            filters,
        }
    }

    /// True when nothing is constrained and every record passes.
    pub fn accepts_all(&self) -> bool {
        self.search.is_none() && self.filters.is_empty()
    }

    pub fn matches(&self, record: &ProviderRecord) -> bool {
        if let Some(term) = &self.search {
            let hit = [
                record.email.as_str(),
                record.phone_number.as_str(),
                record.postcode.as_str(),
                record.vendor_type.label(),
                record.service_offering.label(),
            ]
            .into_iter()
            .any(|field| contains_folded(field, term));

            if !hit {
                return false;
            }
        }

        if let Some(postcode) = &self.postcode {
            if !contains_folded(&record.postcode, postcode) {
                return false;
            }
        }

        if let Some(status) = self.filters.status {
            if record.status != status {
                return false;
            }
        }

        if let Some(vendor_type) = self.filters.vendor_type {
            if record.vendor_type != vendor_type {
                return false;
            }
        }

        if let Some(offering) = self.filters.service_offering {
            if record.service_offering != offering {
                return false;
            }
        }

        if self.date_start.is_some() || self.date_end.is_some() {
            // ISO dates: lexicographic order is chronological order
            let signup = record.signup_date_iso();
            if let Some(start) = self.date_start {
                if signup.as_str() < start {
                    return false;
                }
            }
            if let Some(end) = self.date_end {
                if signup.as_str() > end {
                    return false;
                }
            }
        }

        true
    }
}

/// `needle` must already be lowercase.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Records passing search and filters, in store order.
pub fn filter_records<'a>(
    records: &'a [ProviderRecord],
    search_term: &str,
    filters: &FilterState,
) -> Vec<&'a ProviderRecord> {
    let predicate = RecordPredicate::new(search_term, filters);
    if predicate.accepts_all() {
        return records.iter().collect();
    }
    records.iter().filter(|record| predicate.matches(record)).collect()
}
