//! End-to-end scenarios for the provider table: filter, sort, paginate, select.

mod common;

use common::*;
use provider_view::domains::providers::view::filtered_sorted;
use provider_view::{
    BrowserSession, FilterState, PageLabel, PaginationConfig, ProviderRecord, ProviderStatus,
    RecordStore, SortConfig, SortDirection, SortField, ViewEvent,
};

fn pipeline<'a>(
    records: &'a [ProviderRecord],
    search: &str,
    filters: &FilterState,
    sort: &SortConfig,
) -> Vec<&'a ProviderRecord> {
    filtered_sorted(records, search, filters, sort)
}

#[test]
fn test_first_page_of_twenty_five() {
    let session = BrowserSession::new(store(25), 10);
    let page = session.page();

    assert_eq!(
        ids(&page.rows),
        (1..=10).map(|n| format!("sp-{n:03}")).collect::<Vec<_>>()
    );
    assert_eq!(page.pagination.total_items, 25);
    assert_eq!(page.pagination.total_pages, 3);
    assert!(!page.pagination.has_previous());
    assert!(page.pagination.has_next());
    assert_eq!(page.pagination.summary(), "Showing 1 to 10 of 25 results");
    assert_eq!(
        page.pagination.labels(),
        vec![PageLabel::Page(1), PageLabel::Page(2), PageLabel::Page(3)]
    );
}

#[test]
fn test_last_page_disables_next() {
    let mut session = BrowserSession::new(store(25), 10);
    session.dispatch(ViewEvent::PageRequested { page: 3 });

    let page = session.page();
    assert_eq!(page.rows.len(), 5);
    assert!(page.pagination.has_previous());
    assert!(!page.pagination.has_next());
    assert_eq!(page.pagination.summary(), "Showing 21 to 25 of 25 results");

    session.dispatch(ViewEvent::NextPage);
    assert_eq!(session.state().pagination.current_page, 3);
}

#[test]
fn test_search_is_case_insensitive_and_field_restricted() {
    let records = mixed_records();
    let none = FilterState::default();
    let unsorted = SortConfig::unsorted();

    let lower = pipeline(&records, "valet", &none, &unsorted);
    let upper = pipeline(&records, "VALET", &none, &unsorted);
    assert_eq!(ids(&lower), ids(&upper));

    // sp-001/sp-004 offer Car Valet, sp-002 has "valet" in the email
    assert_eq!(ids(&lower), vec!["sp-001", "sp-002", "sp-004"]);
}

#[test]
fn test_search_ignores_surrounding_whitespace() {
    let records = mixed_records();
    let none = FilterState::default();
    let unsorted = SortConfig::unsorted();

    assert_eq!(
        ids(&pipeline(&records, "  window  ", &none, &unsorted)),
        vec!["sp-003"]
    );
    assert_eq!(pipeline(&records, "   ", &none, &unsorted).len(), records.len());
}

#[test]
fn test_date_range_is_inclusive() {
    let records = mixed_records();
    let filters = FilterState {
        date_start: "2023-01-01".to_string(),
        date_end: "2023-01-31".to_string(),
        ..Default::default()
    };

    let matched = pipeline(&records, "", &filters, &SortConfig::unsorted());
    assert_eq!(ids(&matched), vec!["sp-001", "sp-002", "sp-005"]);
}

#[test]
fn test_postcode_filter_is_case_insensitive_substring() {
    let records = mixed_records();
    let filters = FilterState {
        postcode: "SW1A".to_string(),
        ..Default::default()
    };

    let matched = pipeline(&records, "", &filters, &SortConfig::unsorted());
    assert_eq!(ids(&matched), vec!["sp-001", "sp-004"]);
}

#[test]
fn test_status_filter_after_email_sort() {
    let records = mixed_records();
    let filters = FilterState {
        status: Some(ProviderStatus::Onboarded),
        ..Default::default()
    };
    let sort = SortConfig::by(SortField::Email, SortDirection::Ascending);

    let matched = pipeline(&records, "", &filters, &sort);
    assert_eq!(ids(&matched), vec!["sp-004", "sp-005", "sp-003", "sp-001"]);

    let onboarded = records
        .iter()
        .filter(|record| record.status == ProviderStatus::Onboarded)
        .count();
    let page = provider_view::domains::providers::view::view(
        &records,
        "",
        &filters,
        &sort,
        PaginationConfig::new(10),
    );
    assert_eq!(page.pagination.total_items, onboarded);
}

#[test]
fn test_all_constraints_are_anded() {
    let records = mixed_records();
    let filters = FilterState {
        status: Some(ProviderStatus::Onboarded),
        vendor_type: Some(provider_view::VendorType::Company),
        service_offering: Some(provider_view::ServiceOffering::CarValet),
        date_start: "2023-01-01".to_string(),
        ..Default::default()
    };

    let matched = pipeline(&records, "zoe", &filters, &SortConfig::unsorted());
    assert_eq!(ids(&matched), vec!["sp-001"]);

    let matched = pipeline(&records, "bob", &filters, &SortConfig::unsorted());
    assert!(matched.is_empty());
}

#[test]
fn test_shrinking_filter_clamps_page() {
    let mut records = records(25);
    records[0].status = ProviderStatus::Rejected;
    records[1].status = ProviderStatus::Rejected;
    let mut session = BrowserSession::new(RecordStore::new(records).unwrap(), 10);

    session.dispatch(ViewEvent::PageRequested { page: 3 });
    assert_eq!(session.state().pagination.current_page, 3);

    session.dispatch(ViewEvent::FiltersApplied {
        filters: FilterState {
            status: Some(ProviderStatus::Rejected),
            ..Default::default()
        },
    });

    let page = session.page();
    assert_eq!(page.pagination.current_page, 1);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(ids(&page.rows), vec!["sp-001", "sp-002"]);
}

#[test]
fn test_select_all_is_scoped_to_visible_page() {
    let mut session = BrowserSession::new(store(200), 10);
    session.dispatch(ViewEvent::SearchChanged {
        term: "example.com".to_string(),
    });
    assert_eq!(session.state().pagination.total_items, 200);

    session.dispatch(ViewEvent::SelectAll { checked: true });

    let selection = &session.state().selection;
    assert_eq!(selection.len(), 10);
    assert!(session.page().rows.iter().all(|r| selection.contains(&r.id)));
    assert!(session.is_all_selected());

    // page changes keep the selection
    session.dispatch(ViewEvent::NextPage);
    assert_eq!(session.state().selection.len(), 10);
    assert!(!session.is_all_selected());

    session.dispatch(ViewEvent::SelectAll { checked: false });
    assert!(session.state().selection.is_empty());
}

#[test]
fn test_filter_change_prunes_selection_to_matches() {
    let mut session = BrowserSession::new(RecordStore::new(mixed_records()).unwrap(), 10);
    for id in ["sp-001", "sp-002", "sp-003"] {
        session.dispatch(ViewEvent::SelectRow {
            id: id.into(),
            checked: true,
        });
    }
    assert!(session.is_indeterminate());

    session.dispatch(ViewEvent::FiltersApplied {
        filters: FilterState {
            status: Some(ProviderStatus::Onboarded),
            ..Default::default()
        },
    });

    let selected: Vec<&str> = session
        .state()
        .selection
        .iter()
        .map(|id| id.as_str())
        .collect();
    assert_eq!(selected, vec!["sp-001", "sp-003"]);
}

#[test]
fn test_clearing_filters_restores_everything_and_clears_search() {
    let mut session = BrowserSession::new(RecordStore::new(mixed_records()).unwrap(), 2);
    session.dispatch(ViewEvent::SearchChanged {
        term: "valet".to_string(),
    });
    session.dispatch(ViewEvent::FiltersApplied {
        filters: FilterState {
            vendor_type: Some(provider_view::VendorType::Company),
            ..Default::default()
        },
    });
    assert_eq!(session.state().pagination.total_items, 2);

    let notification = session.dispatch(ViewEvent::FiltersCleared).unwrap();
    assert_eq!(notification.message, "Filters cleared successfully!");
    assert!(session.state().search_term.is_empty());
    assert!(session.state().filters.is_empty());
    assert_eq!(session.state().pagination.total_items, 5);
    assert_eq!(session.state().pagination.total_pages, 3);
}

#[test]
fn test_sort_toggle_flips_then_resets() {
    let mut session = BrowserSession::new(RecordStore::new(mixed_records()).unwrap(), 10);

    session.dispatch(ViewEvent::SortRequested {
        field: SortField::SignupDate,
    });
    assert_eq!(ids(&session.page().rows)[0], "sp-004");

    session.dispatch(ViewEvent::SortRequested {
        field: SortField::SignupDate,
    });
    assert_eq!(
        session.state().sort.direction_for(SortField::SignupDate),
        Some(SortDirection::Descending)
    );
    assert_eq!(ids(&session.page().rows)[0], "sp-003");

    session.dispatch(ViewEvent::SortRequested {
        field: SortField::Postcode,
    });
    assert_eq!(
        session.state().sort.direction_for(SortField::Postcode),
        Some(SortDirection::Ascending)
    );
    assert_eq!(session.state().sort.direction_for(SortField::SignupDate), None);
}

#[test]
fn test_empty_store_has_no_pages() {
    let session = BrowserSession::new(RecordStore::new(Vec::new()).unwrap(), 10);
    let page = session.page();

    assert!(page.is_empty());
    assert_eq!(page.pagination.total_pages, 0);
    assert_eq!(page.pagination.current_page, 1);
    assert!(!page.pagination.has_previous());
    assert!(!page.pagination.has_next());
    assert!(page.pagination.labels().is_empty());
    assert_eq!(page.pagination.summary(), "No results");
}

#[test]
fn test_everything_filtered_out() {
    let mut session = BrowserSession::new(store(25), 10);
    session.dispatch(ViewEvent::SearchSubmitted {
        term: "no such provider".to_string(),
    });

    let page = session.page();
    assert!(page.is_empty());
    assert_eq!(page.pagination.total_items, 0);
    assert_eq!(page.pagination.total_pages, 0);
    assert!(!session.is_all_selected());
}

#[test]
fn test_long_pagination_collapses_into_ellipses() {
    let mut session = BrowserSession::new(store(200), 10);
    session.dispatch(ViewEvent::PageRequested { page: 10 });

    let labels: Vec<String> = session
        .state()
        .pagination
        .labels()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, vec!["1", "...", "9", "10", "11", "...", "20"]);
}

#[test]
fn test_sample_dataset_loads() {
    let store = RecordStore::sample().unwrap();
    assert!(!store.is_empty());

    let session = BrowserSession::new(store, 10);
    assert_eq!(session.page().rows.len(), 10);
}

#[test]
fn test_unpadded_date_bound_is_rejected() {
    let mut later = record(1);
    later.signup_date = date("2023-03-10");
    let mut earlier = record(2);
    earlier.signup_date = date("2022-12-01");
    let mut session = BrowserSession::new(RecordStore::new(vec![later, earlier]).unwrap(), 10);

    let notification = session
        .dispatch(ViewEvent::FiltersApplied {
            filters: FilterState {
                date_start: "2023-1-5".to_string(),
                ..Default::default()
            },
        })
        .unwrap();
    assert_eq!(notification.severity, provider_view::Severity::Error);
    assert!(session.state().filters.is_empty());
    assert_eq!(ids(&session.page().rows), vec!["sp-001", "sp-002"]);

    let notification = session
        .dispatch(ViewEvent::FiltersApplied {
            filters: FilterState {
                date_start: "2023-01-05".to_string(),
                ..Default::default()
            },
        })
        .unwrap();
    assert_eq!(notification.message, "Filters applied successfully!");
    assert_eq!(ids(&session.page().rows), vec!["sp-001"]);
}
