//! Core types for the provider admin screen

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Table navigation, selection and shortcuts
    #[default]
    Table,
    /// Typing into the search box (live search)
    Search,
    /// Editing the filter panel draft
    Filters,
    /// Typing a page number to jump to
    GoTo,
}

impl Focus {
    /// Key hints shown in the footer
    pub fn hints(&self) -> &'static str {
        match self {
            Self::Table => {
                "/ search  f filters  c clear  1-7 sort  ←/→ page  g go to  ␣ select  a all  e edit  x close  q quit"
            }
            Self::Search => "type to search  Enter done  Esc back",
            Self::Filters => {
                "↑/↓ field  ←/→ change  type text  Enter apply  Del clear all  Esc cancel"
            }
            Self::GoTo => "page number  Enter go  Esc cancel",
        }
    }
}

/// Fields of the filter panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Postcode,
    Status,
    DateStart,
    DateEnd,
    VendorType,
    ServiceOffering,
}

impl FilterField {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Postcode => "Postcode",
            Self::Status => "Status",
            Self::DateStart => "Signup from",
            Self::DateEnd => "Signup to",
            Self::VendorType => "Vendor type",
            Self::ServiceOffering => "Service offering",
        }
    }

    /// Free-text fields take typed characters; the others cycle through options
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Postcode | Self::DateStart | Self::DateEnd)
    }

    /// All fields in display order
    pub fn all() -> &'static [FilterField] {
        &[
            Self::Postcode,
            Self::Status,
            Self::DateStart,
            Self::DateEnd,
            Self::VendorType,
            Self::ServiceOffering,
        ]
    }
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
