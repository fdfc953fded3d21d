//! Test fixtures for building provider records.
//!
//! Records are built with the typed builder so each test states only the
//! fields it cares about.

#![allow(dead_code)]

use chrono::NaiveDate;
use provider_view::{
    ProviderRecord, ProviderStatus, RecordStore, ServiceOffering, VendorType,
};

/// One record with neutral field values, keyed by `n` (`sp-001`, `p001@example.com`, ...).
pub fn record(n: usize) -> ProviderRecord {
    ProviderRecord::builder()
        .id(format!("sp-{n:03}"))
        .email(format!("p{n:03}@example.com"))
        .phone_number(format!("07700 9{n:05}"))
        .postcode("M1 1AE")
        .vendor_type(VendorType::Independent)
        .service_offering(ServiceOffering::Housekeeping)
        .signup_date(date("2023-06-15"))
        .status(ProviderStatus::Onboarded)
        .build()
}

/// `n` records numbered from 1, in store order.
pub fn records(n: usize) -> Vec<ProviderRecord> {
    (1..=n).map(record).collect()
}

/// Store over `n` fixture records.
pub fn store(n: usize) -> RecordStore {
    RecordStore::new(records(n)).unwrap()
}

/// A small mixed dataset exercising every enum variant and a spread of dates.
pub fn mixed_records() -> Vec<ProviderRecord> {
    vec![
        ProviderRecord::builder()
            .id("sp-001")
            .email("zoe@sparkle.co.uk")
            .phone_number("07700 900001")
            .postcode("SW1A 1AA")
            .vendor_type(VendorType::Company)
            .service_offering(ServiceOffering::CarValet)
            .signup_date(date("2023-01-01"))
            .status(ProviderStatus::Onboarded)
            .build(),
        ProviderRecord::builder()
            .id("sp-002")
            .email("adam@valetpros.com")
            .phone_number("07700 900002")
            .postcode("EC1A 1BB")
            .vendor_type(VendorType::Independent)
            .service_offering(ServiceOffering::Housekeeping)
            .signup_date(date("2023-01-31"))
            .status(ProviderStatus::Rejected)
            .build(),
        ProviderRecord::builder()
            .id("sp-003")
            .email("mia@clearview.com")
            .phone_number("07700 900003")
            .postcode("M1 1AE")
            .vendor_type(VendorType::Independent)
            .service_offering(ServiceOffering::WindowCleaning)
            .signup_date(date("2023-02-01"))
            .status(ProviderStatus::Onboarded)
            .build(),
        ProviderRecord::builder()
            .id("sp-004")
            .email("bob@tidyhomes.com")
            .phone_number("07700 900004")
            .postcode("sw1a 2aa")
            .vendor_type(VendorType::Company)
            .service_offering(ServiceOffering::CarValet)
            .signup_date(date("2022-12-31"))
            .status(ProviderStatus::Onboarded)
            .build(),
        ProviderRecord::builder()
            .id("sp-005")
            .email("cara@shine.com")
            .phone_number("07700 900005")
            .postcode("LS1 4AP")
            .vendor_type(VendorType::Independent)
            .service_offering(ServiceOffering::Housekeeping)
            .signup_date(date("2023-01-15"))
            .status(ProviderStatus::Onboarded)
            .build(),
    ]
}

pub fn date(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap()
}

/// Identifiers of `rows`, in order.
pub fn ids(rows: &[&ProviderRecord]) -> Vec<String> {
    rows.iter().map(|record| record.id.to_string()).collect()
}
