#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Duration, Local, TimeZone};
use rust_decimal_macros::dec;

use super::*;
use crate::error::LedgerError;
use crate::models::CategoryRegistry;

fn noon(day: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
}

fn ledger() -> Ledger {
    Ledger::new(CategoryRegistry::defaults())
}

// ── append ───────────────────────────────────────────────────

#[test]
fn test_append_returns_record() {
    let mut ledger = ledger();
    let txn = ledger.append("Lunch", "120.50", "Food", noon(15)).unwrap();
    assert_eq!(txn.title, "Lunch");
    assert_eq!(txn.amount, dec!(120.50));
    assert_eq!(txn.category, "Food");
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.all()[0], txn);
}

#[test]
fn test_append_preserves_insertion_order() {
    let mut ledger = ledger();
    ledger.append("First", "1", "Food", noon(3)).unwrap();
    ledger.append("Second", "2", "Transport", noon(1)).unwrap();
    ledger.append("Third", "3", "Food", noon(2)).unwrap();
    let titles: Vec<&str> = ledger.all().iter().map(|t| t.title.as_str()).collect();
    // Insertion order, not date order.
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[test]
fn test_append_ids_unique() {
    let mut ledger = ledger();
    for _ in 0..50 {
        ledger.append("Chai", "10", "Food", noon(1)).unwrap();
    }
    let mut ids: Vec<&str> = ledger.all().iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_append_trims_title_and_amount() {
    let mut ledger = ledger();
    let txn = ledger.append("  Lunch  ", " 42.00 ", "Food", noon(1)).unwrap();
    assert_eq!(txn.title, "Lunch");
    assert_eq!(txn.amount, dec!(42.00));
}

#[test]
fn test_append_empty_title_rejected() {
    let mut ledger = ledger();
    assert_eq!(
        ledger.append("", "10", "Food", noon(1)).unwrap_err(),
        LedgerError::InvalidTitle
    );
    assert_eq!(
        ledger.append("   ", "10", "Food", noon(1)).unwrap_err(),
        LedgerError::InvalidTitle
    );
    assert!(ledger.is_empty());
}

#[test]
fn test_append_negative_amount_rejected() {
    let mut ledger = ledger();
    let err = ledger.append("Refund", "-5", "Food", noon(1)).unwrap_err();
    assert_eq!(err, LedgerError::InvalidAmount("-5".into()));
    assert_eq!(ledger.len(), 0);
}

#[test]
fn test_append_non_numeric_amount_rejected() {
    let mut ledger = ledger();
    let err = ledger
        .append("Lunch", "twelve", "Food", noon(1))
        .unwrap_err();
    assert_eq!(err, LedgerError::InvalidAmount("twelve".into()));
    assert!(ledger.is_empty());
}

#[test]
fn test_append_zero_amount_allowed() {
    let mut ledger = ledger();
    let txn = ledger.append("Freebie", "0", "Food", noon(1)).unwrap();
    assert_eq!(txn.amount, dec!(0));
}

#[test]
fn test_append_unregistered_category_rejected() {
    let mut ledger = ledger();
    ledger.append("Lunch", "10", "Food", noon(1)).unwrap();
    let err = ledger.append("Flat", "9000", "Rent", noon(1)).unwrap_err();
    assert_eq!(err, LedgerError::InvalidCategory("Rent".into()));
    // Last-valid state: the earlier append is still there, nothing else.
    assert_eq!(ledger.len(), 1);
}

// ── recent ───────────────────────────────────────────────────

#[test]
fn test_recent_window_is_strict_on_lower_bound() {
    let as_of = Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let mut ledger = ledger();
    // Exactly 7 days before as_of: excluded.
    ledger
        .append("Boundary", "10", "Food", as_of - Duration::days(7))
        .unwrap();
    // One minute inside the window: included.
    ledger
        .append(
            "Inside",
            "10",
            "Food",
            as_of - Duration::days(7) + Duration::minutes(1),
        )
        .unwrap();

    let recent = ledger.recent_as_of(7, as_of);
    let titles: Vec<&str> = recent.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Inside"]);
}

#[test]
fn test_recent_includes_six_days_23_59() {
    let as_of = Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let mut ledger = ledger();
    let date = as_of - Duration::days(6) - Duration::hours(23) - Duration::minutes(59);
    ledger.append("Old but in", "10", "Food", date).unwrap();
    assert_eq!(ledger.recent_as_of(7, as_of).len(), 1);
}

#[test]
fn test_recent_keeps_insertion_order() {
    let as_of = noon(15);
    let mut ledger = ledger();
    ledger.append("A", "1", "Food", noon(14)).unwrap();
    ledger.append("B", "2", "Food", noon(1)).unwrap();
    ledger.append("C", "3", "Food", noon(13)).unwrap();

    let recent = ledger.recent_as_of(7, as_of);
    let titles: Vec<&str> = recent.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "C"]);
}

#[test]
fn test_recent_empty_ledger() {
    let ledger = ledger();
    assert!(ledger.recent(7).is_empty());
}

#[test]
fn test_recent_includes_future_dates() {
    // The window has no upper bound; a post-dated entry still counts.
    let as_of = noon(15);
    let mut ledger = ledger();
    ledger.append("Postdated", "10", "Food", noon(20)).unwrap();
    assert_eq!(ledger.recent_as_of(7, as_of).len(), 1);
}
