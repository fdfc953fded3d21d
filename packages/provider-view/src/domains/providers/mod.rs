//! Providers domain - service provider admin table

pub mod data;
pub mod events;
pub mod machine;
pub mod models;
pub mod notification;
pub mod view;

// Re-export commonly used types
pub use data::RecordStore;
pub use events::ViewEvent;
pub use machine::{reduce, BrowserSession, Transition, ViewState};
pub use models::{ProviderRecord, ProviderStatus, ServiceOffering, VendorType};
pub use notification::{Notification, NotificationSlot, Severity};
pub use view::{
    filter_records, filtered_sorted, sort_records, view, FilterState, PageView, SelectionSet,
    SortConfig, SortDirection, SortField,
};
