//! Filter panel draft
//!
//! The panel edits a private copy of the filters. Nothing reaches the view
//! until the draft is applied, and then it is applied as a whole.

use provider_view::{FilterState, ProviderStatus, ServiceOffering, VendorType};

use super::types::FilterField;

#[derive(Debug, Clone, Default)]
pub struct FilterDraft {
    values: FilterState,
    field: usize,
}

impl FilterDraft {
    /// Start editing from the committed filters.
    pub fn from_committed(filters: &FilterState) -> Self {
        Self {
            values: filters.clone(),
            field: 0,
        }
    }

    pub fn values(&self) -> &FilterState {
        &self.values
    }

    pub fn field(&self) -> FilterField {
        FilterField::all()[self.field % FilterField::all().len()]
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % FilterField::all().len();
    }

    pub fn previous_field(&mut self) {
        let len = FilterField::all().len();
        self.field = (self.field + len - 1) % len;
    }

    /// Type into the focused text field. Ignored on option fields.
    pub fn push_char(&mut self, c: char) {
        if let Some(text) = self.text_mut() {
            text.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    /// Step the focused option field through "Any" and its variants.
    pub fn cycle(&mut self, forward: bool) {
        match self.field() {
            FilterField::Status => {
                self.values.status = cycle(self.values.status, ProviderStatus::all(), forward)
            }
            FilterField::VendorType => {
                self.values.vendor_type =
                    cycle(self.values.vendor_type, VendorType::all(), forward)
            }
            FilterField::ServiceOffering => {
                self.values.service_offering =
                    cycle(self.values.service_offering, ServiceOffering::all(), forward)
            }
            FilterField::Postcode | FilterField::DateStart | FilterField::DateEnd => {}
        }
    }

    /// Text shown for `field` in the panel.
    pub fn display(&self, field: FilterField) -> String {
        fn or_any(label: Option<&'static str>) -> String {
            label.unwrap_or("Any").to_string()
        }

        match field {
            FilterField::Postcode => self.values.postcode.clone(),
            FilterField::Status => or_any(self.values.status.map(|s| s.label())),
            FilterField::DateStart => self.values.date_start.clone(),
            FilterField::DateEnd => self.values.date_end.clone(),
            FilterField::VendorType => or_any(self.values.vendor_type.map(|v| v.label())),
            FilterField::ServiceOffering => {
                or_any(self.values.service_offering.map(|o| o.label()))
            }
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.field() {
            FilterField::Postcode => Some(&mut self.values.postcode),
            FilterField::DateStart => Some(&mut self.values.date_start),
            FilterField::DateEnd => Some(&mut self.values.date_end),
            FilterField::Status | FilterField::VendorType | FilterField::ServiceOffering => None,
        }
    }
}

fn cycle<T: Copy + PartialEq>(current: Option<T>, all: &[T], forward: bool) -> Option<T> {
    let options: Vec<Option<T>> = std::iter::once(None)
        .chain(all.iter().copied().map(Some))
        .collect();
    let len = options.len();
    let index = options
        .iter()
        .position(|option| *option == current)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    options[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_only_reaches_text_fields() {
        let mut draft = FilterDraft::default();
        draft.push_char('M');
        draft.push_char('1');
        assert_eq!(draft.values().postcode, "M1");

        draft.next_field();
        assert_eq!(draft.field(), FilterField::Status);
        draft.push_char('x');
        assert_eq!(draft.values().status, None);

        draft.previous_field();
        draft.pop_char();
        assert_eq!(draft.values().postcode, "M");
    }

    #[test]
    fn test_cycle_wraps_through_any() {
        let mut draft = FilterDraft::default();
        draft.next_field();

        draft.cycle(true);
        assert_eq!(draft.values().status, Some(ProviderStatus::Onboarded));
        draft.cycle(true);
        assert_eq!(draft.values().status, Some(ProviderStatus::Rejected));
        draft.cycle(true);
        assert_eq!(draft.values().status, None);
        assert_eq!(draft.display(FilterField::Status), "Any");

        draft.cycle(false);
        assert_eq!(draft.values().status, Some(ProviderStatus::Rejected));
    }

    #[test]
    fn test_previous_field_wraps() {
        let mut draft = FilterDraft::default();
        draft.previous_field();
        assert_eq!(draft.field(), FilterField::ServiceOffering);
    }
}
