//! Store harness: `LeadBook` status patches and the call / WhatsApp actions.

mod common;

use common::*;
use leadsheet::{
    load::LOAD_FAILED_MESSAGE,
    phone::{self, PhoneRules},
    LeadBook, LeadId, LeadStatus, LoadState,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn update_status_replaces_only_that_lead() {
    let mut book = LeadBook::from_csv(SHEET_MIXED);
    let before = book.leads().to_vec();

    book.update_status(LeadId(2), LeadStatus::NotReceived);

    assert_status!(book, 2, LeadStatus::NotReceived);
    for (old, new) in before.iter().zip(book.leads()) {
        if old.id == LeadId(2) {
            assert_eq!(new, &old.with_status(LeadStatus::NotReceived));
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn unknown_id_is_a_noop() {
    let mut book = LeadBook::from_csv(SHEET_MIXED);
    let before = book.clone();
    book.update_status(LeadId(99), LeadStatus::Closed);
    assert_eq!(book, before);
}

#[test]
fn call_then_outcome_workflow() {
    let rules = PhoneRules::default();
    let mut book = LeadBook::from_csv(SHEET_MIXED);

    let uri = book.call(LeadId(0), &rules);
    assert_eq!(uri.as_deref(), Some("tel:9876543210"));
    assert_status!(book, 0, LeadStatus::Called);

    book.update_status(LeadId(0), LeadStatus::Contacted);
    assert_status!(book, 0, LeadStatus::Contacted);
}

#[test]
fn call_unknown_id_returns_none() {
    let mut book = LeadBook::from_csv(SHEET_MIXED);
    assert_eq!(book.call(LeadId(42), &PhoneRules::default()), None);
}

#[test]
fn whatsapp_does_not_touch_status() {
    let book = LeadBook::from_csv(SHEET_MIXED);
    assert_eq!(
        book.whatsapp_link(LeadId(3), &PhoneRules::default()).as_deref(),
        Some("https://wa.me/919876543213")
    );
    assert_status!(book, 3, LeadStatus::Closed);
}

#[rstest]
#[case("+91 98765 43210", "9876543210", "919876543210")]
#[case("98765-43211", "9876543211", "919876543211")]
#[case("09876543212", "09876543212", "09876543212")]
#[case("No Phone", "", "")]
#[case("(080) 2345 6789", "08023456789", "08023456789")]
fn sanitisers(#[case] raw: &str, #[case] dial: &str, #[case] whatsapp: &str) {
    assert_eq!(phone::dial_number(raw), dial);
    assert_eq!(phone::whatsapp_number(raw), whatsapp);
}

#[test]
fn configured_country_code() {
    let rules = PhoneRules { country_code: "1".to_string(), local_digits: 10 };
    assert_eq!(rules.dial_number("+1 (415) 555-0100"), "4155550100");
    assert_eq!(rules.whatsapp_number("415 555 0100"), "14155550100");
}

#[test]
fn load_state_from_failed_fetch_has_no_data() {
    let state = LoadState::from_fetch::<&str>(Err("connection reset"));
    assert_eq!(state.error(), Some(LOAD_FAILED_MESSAGE));
    assert!(state.book().is_none());
}

#[test]
fn refresh_stamps_a_later_load_time() {
    let first = LeadBook::from_csv(SHEET_MINIMAL);
    let second = LeadBook::from_csv(SHEET_MINIMAL);
    assert!(second.loaded_at() >= first.loaded_at());
    assert_eq!(first.leads(), second.leads());
}

proptest! {
    #[test]
    fn dial_number_is_digits_only(raw in "[0-9 +()\\-]{0,20}") {
        let dialed = phone::dial_number(&raw);
        prop_assert!(dialed.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(dialed.len() <= raw.len());
    }

    #[test]
    fn repeated_updates_keep_length(ids in prop::collection::vec(0usize..10, 0..20)) {
        let mut book = LeadBook::from_csv(&sheet_high_volume(5));
        for id in ids {
            book.update_status(LeadId(id), LeadStatus::Called);
        }
        prop_assert_eq!(book.len(), 5);
    }
}
