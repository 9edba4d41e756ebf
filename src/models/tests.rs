#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

// ── Direction ─────────────────────────────────────────────────

#[test]
fn test_direction_parse() {
    assert_eq!(Direction::parse("Debit"), Some(Direction::Debit));
    assert_eq!(Direction::parse("Credit"), Some(Direction::Credit));
    assert_eq!(Direction::parse("  Debit  "), Some(Direction::Debit));
}

#[test]
fn test_direction_parse_unknown() {
    assert_eq!(Direction::parse("debit"), None);
    assert_eq!(Direction::parse("Transfer"), None);
    assert_eq!(Direction::parse(""), None);
}

// ── Transaction ───────────────────────────────────────────────

fn make_txn(direction: Direction) -> Transaction {
    Transaction {
        date: NaiveDate::from_ymd_opt(2024, 1, 5),
        details: "COFFEE SHOP".into(),
        amount: dec!(12.50),
        direction,
        category: "Uncategorized".into(),
    }
}

#[test]
fn test_transaction_direction_helpers() {
    let debit = make_txn(Direction::Debit);
    assert!(debit.is_debit());
    assert!(!debit.is_credit());

    let credit = make_txn(Direction::Credit);
    assert!(credit.is_credit());
    assert!(!credit.is_debit());
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_new() {
    let cat = Category::new("Groceries".into());
    assert_eq!(cat.name, "Groceries");
    assert!(cat.keywords.is_empty());
}

#[test]
fn test_category_display() {
    let cat = Category::new("Transport".into());
    assert_eq!(format!("{cat}"), "Transport");
}

#[test]
fn test_has_keyword_case_sensitive() {
    let mut cat = Category::new("Groceries".into());
    cat.keywords.push("Whole Foods".into());
    assert!(cat.has_keyword("Whole Foods"));
    // Storage comparison is case-sensitive; only matching lower-cases.
    assert!(!cat.has_keyword("whole foods"));
    assert!(!cat.has_keyword("Trader Joe's"));
}
