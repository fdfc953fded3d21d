pub mod provider;

pub use provider::{
    parse_iso_date, ProviderRecord, ProviderStatus, ServiceOffering, VendorType,
    DISPLAY_DATE_FORMAT, ISO_DATE_FORMAT,
};
