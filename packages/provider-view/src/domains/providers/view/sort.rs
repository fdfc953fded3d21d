//! Column sorting for the provider table
//!
//! Every sortable column compares as text: plain strings as-is, enums by
//! their label, the signup date by its ISO form. Sorting is stable in both
//! directions, so records with equal keys keep their store order whether the
//! column is ascending or descending.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;

use crate::domains::providers::models::ProviderRecord;

/// Sortable table columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Email,
    PhoneNumber,
    Postcode,
    VendorType,
    ServiceOffering,
    SignupDate,
    Status,
}

impl SortField {
    /// Column header text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Postcode => "Postcode",
            Self::VendorType => "Vendor Type",
            Self::ServiceOffering => "Service Offering",
            Self::SignupDate => "Signup Date",
            Self::Status => "Status",
        }
    }

    /// All columns in display order
    pub fn all() -> &'static [SortField] {
        &[
            Self::Email,
            Self::PhoneNumber,
            Self::Postcode,
            Self::VendorType,
            Self::ServiceOffering,
            Self::SignupDate,
            Self::Status,
        ]
    }

    /// Text this column sorts by for `record`.
    pub fn key<'r>(&self, record: &'r ProviderRecord) -> Cow<'r, str> {
        match self {
            Self::Email => Cow::Borrowed(record.email.as_str()),
            Self::PhoneNumber => Cow::Borrowed(record.phone_number.as_str()),
            Self::Postcode => Cow::Borrowed(record.postcode.as_str()),
            Self::VendorType => Cow::Borrowed(record.vendor_type.label()),
            Self::ServiceOffering => Cow::Borrowed(record.service_offering.label()),
            Self::SignupDate => Cow::Owned(record.signup_date_iso()),
            Self::Status => Cow::Borrowed(record.status.label()),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator character
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Active sort column (if any) and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: Option<SortField>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Store order.
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(field: SortField, direction: SortDirection) -> Self {
        Self {
            key: Some(field),
            direction,
        }
    }

    /// Column header clicked: same column flips direction, a new column starts ascending.
    pub fn toggle(self, field: SortField) -> Self {
        let direction = if self.key == Some(field) {
            self.direction.flipped()
        } else {
            SortDirection::Ascending
        };
        Self::by(field, direction)
    }

    /// Direction to show on `field`'s header, `None` when it is not the active column.
    pub fn direction_for(&self, field: SortField) -> Option<SortDirection> {
        (self.key == Some(field)).then_some(self.direction)
    }

    /// Comparator for the active column. `Equal` for everything when unsorted.
    pub fn compare(&self, a: &ProviderRecord, b: &ProviderRecord) -> Ordering {
        match self.key {
            Some(field) => compare_records(a, b, field, self.direction),
            None => Ordering::Equal,
        }
    }
}

/// Compare two records on one column.
pub fn compare_records(
    a: &ProviderRecord,
    b: &ProviderRecord,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    let ord = field.key(a).cmp(&field.key(b));
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Stable in-place sort. Leaves the slice untouched when no column is active.
pub fn sort_records(records: &mut [&ProviderRecord], sort: &SortConfig) {
    if sort.key.is_none() {
        return;
    }
    records.sort_by(|a, b| sort.compare(a, b));
}
