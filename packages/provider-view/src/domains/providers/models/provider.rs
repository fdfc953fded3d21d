use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::ProviderId;
use crate::error::ViewError;

/// ISO calendar date format used on the wire and for date-range comparison.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format shown in the provider table.
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

/// Whether the provider trades alone or as a business
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VendorType {
    Independent,
    Company,
}

impl VendorType {
    pub fn label(&self) -> &'static str {
        match self {
            VendorType::Independent => "Independent",
            VendorType::Company => "Company",
        }
    }

    pub fn all() -> &'static [VendorType] {
        &[VendorType::Independent, VendorType::Company]
    }
}

impl std::fmt::Display for VendorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for VendorType {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Independent" => Ok(VendorType::Independent),
            "Company" => Ok(VendorType::Company),
            _ => Err(ViewError::invalid_label("vendor type", s)),
        }
    }
}

/// Service the provider offers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ServiceOffering {
    Housekeeping,
    #[serde(rename = "Window Cleaning")]
    WindowCleaning,
    #[serde(rename = "Car Valet")]
    CarValet,
}

impl ServiceOffering {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceOffering::Housekeeping => "Housekeeping",
            ServiceOffering::WindowCleaning => "Window Cleaning",
            ServiceOffering::CarValet => "Car Valet",
        }
    }

    pub fn all() -> &'static [ServiceOffering] {
        &[
            ServiceOffering::Housekeeping,
            ServiceOffering::WindowCleaning,
            ServiceOffering::CarValet,
        ]
    }
}

impl std::fmt::Display for ServiceOffering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ServiceOffering {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Housekeeping" => Ok(ServiceOffering::Housekeeping),
            "Window Cleaning" => Ok(ServiceOffering::WindowCleaning),
            "Car Valet" => Ok(ServiceOffering::CarValet),
            _ => Err(ViewError::invalid_label("service offering", s)),
        }
    }
}

/// Registration outcome for a provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProviderStatus {
    Onboarded,
    Rejected,
}

impl ProviderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProviderStatus::Onboarded => "Onboarded",
            ProviderStatus::Rejected => "Rejected",
        }
    }

    pub fn all() -> &'static [ProviderStatus] {
        &[ProviderStatus::Onboarded, ProviderStatus::Rejected]
    }
}

impl std::fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ProviderStatus {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Onboarded" => Ok(ProviderStatus::Onboarded),
            "Rejected" => Ok(ProviderStatus::Rejected),
            _ => Err(ViewError::invalid_label("provider status", s)),
        }
    }
}

/// Provider record - one row of the admin table
///
/// Records are immutable once loaded; the record store owns them for the
/// lifetime of the session and the view only ever borrows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    #[builder(setter(into))]
    pub id: ProviderId,

    // Contact
    #[builder(setter(into))]
    pub email: String,
    #[builder(setter(into))]
    pub phone_number: String,
    #[builder(setter(into))]
    pub postcode: String,

    // Classification
    pub vendor_type: VendorType,
    pub service_offering: ServiceOffering,

    // Registration
    pub signup_date: NaiveDate,
    pub status: ProviderStatus,
}

impl ProviderRecord {
    /// Signup date as `YYYY-MM-DD`, the form date-range filters compare against.
    pub fn signup_date_iso(&self) -> String {
        self.signup_date.format(ISO_DATE_FORMAT).to_string()
    }

    /// Signup date as shown in the table (`MM/DD/YYYY`).
    pub fn signup_date_display(&self) -> String {
        self.signup_date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// Parse a `YYYY-MM-DD` date typed by the user.
///
/// Only the zero-padded form is accepted: date bounds are compared as text
/// against `signup_date_iso`, so `2023-1-5` must not pass as `2023-01-05`.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, ViewError> {
    let trimmed = value.trim();
    let invalid = || ViewError::InvalidDate {
        value: value.to_string(),
    };

    let date = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|_| invalid())?;
    if date.format(ISO_DATE_FORMAT).to_string() != trimmed {
        return Err(invalid());
    }
    Ok(date)
}
