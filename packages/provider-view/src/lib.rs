// Provider View - core of the service provider admin page
//
// Holds the provider records in memory and turns (records, search, filters,
// sort, page) into the rows to render. All view state lives in one snapshot
// that is advanced by pure transitions (see domains/providers/machine.rs).

pub mod common;
pub mod config;
pub mod domains;
pub mod error;

pub use config::*;
pub use error::{Result, ViewError};

pub use common::{PageLabel, PaginationConfig, ProviderId};
pub use domains::providers::{
    BrowserSession, FilterState, Notification, NotificationSlot, PageView, ProviderRecord,
    ProviderStatus, RecordStore, SelectionSet, ServiceOffering, Severity, SortConfig,
    SortDirection, SortField, Transition, VendorType, ViewEvent, ViewState,
};
