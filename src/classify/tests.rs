#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::{Direction, Transaction};
use rust_decimal_macros::dec;

fn test_store(dir: &tempfile::TempDir) -> CategoryStore {
    CategoryStore::load(&dir.path().join("categories.json"))
}

fn make_txn(details: &str) -> Transaction {
    Transaction {
        date: chrono::NaiveDate::from_ymd_opt(2024, 1, 5),
        details: details.into(),
        amount: dec!(10.00),
        direction: Direction::Debit,
        category: UNCATEGORIZED.into(),
    }
}

// ── classify ──────────────────────────────────────────────────

#[test]
fn test_classify_exact_match_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = test_store(&dir);
    store.add_category("Groceries").unwrap();
    store.add_keyword("Groceries", "whole foods").unwrap();
    store.add_category("Transport").unwrap();
    store.add_keyword("Transport", "uber").unwrap();

    let classifier = Classifier::new(&store);
    assert_eq!(classifier.classify("WHOLE FOODS"), "Groceries");
    assert_eq!(classifier.classify("whole foods"), "Groceries");
    assert_eq!(classifier.classify("Uber"), "Transport");
}

#[test]
fn test_classify_unmatched_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = test_store(&dir);
    store.add_category("Groceries").unwrap();
    store.add_keyword("Groceries", "whole foods").unwrap();

    let classifier = Classifier::new(&store);
    assert_eq!(classifier.classify("unknown merchant"), UNCATEGORIZED);
}

#[test]
fn test_classify_trims_details() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = test_store(&dir);
    store.add_category("Transport").unwrap();
    store.add_keyword("Transport", "uber").unwrap();

    let classifier = Classifier::new(&store);
    assert_eq!(classifier.classify("  UBER  "), "Transport");
}

#[test]
fn test_classify_no_substring_match() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = test_store(&dir);
    store.add_category("Groceries").unwrap();
    store.add_keyword("Groceries", "whole foods").unwrap();

    let classifier = Classifier::new(&store);
    // Equality only — a longer details string is not a match.
    assert_eq!(classifier.classify("whole foods market"), UNCATEGORIZED);
    assert_eq!(classifier.classify("foods"), UNCATEGORIZED);
}

#[test]
fn test_classify_last_category_wins() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = test_store(&dir);
    store.add_category("Groceries").unwrap();
    store.add_keyword("Groceries", "lulu").unwrap();
    store.add_category("Shopping").unwrap();
    store.add_keyword("Shopping", "lulu").unwrap();

    let classifier = Classifier::new(&store);
    // The same keyword under two categories resolves to the later one in
    // store order.
    assert_eq!(classifier.classify("lulu"), "Shopping");
}

#[test]
fn test_classify_ignores_uncategorized_keywords() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("categories.json");
    std::fs::write(&path, r#"{"Uncategorized": ["uber"]}"#).unwrap();
    let store = CategoryStore::load(&path);

    let classifier = Classifier::new(&store);
    assert_eq!(classifier.classify("uber"), UNCATEGORIZED);
}

#[test]
fn test_classify_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);
    let classifier = Classifier::new(&store);
    assert_eq!(classifier.classify("anything"), UNCATEGORIZED);
}

#[test]
fn test_classify_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = test_store(&dir);
    store.add_category("Groceries").unwrap();
    store.add_keyword("Groceries", "whole foods").unwrap();
    store.add_category("Transport").unwrap();
    store.add_keyword("Transport", "uber").unwrap();

    let classifier = Classifier::new(&store);
    for details in ["WHOLE FOODS", "uber", "unknown merchant"] {
        assert_eq!(classifier.classify(details), classifier.classify(details));
    }
}

// ── classify_batch ────────────────────────────────────────────

#[test]
fn test_classify_batch() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = test_store(&dir);
    store.add_category("Groceries").unwrap();
    store.add_keyword("Groceries", "whole foods").unwrap();

    let mut txns = vec![make_txn("WHOLE FOODS"), make_txn("unknown merchant")];
    Classifier::new(&store).classify_batch(&mut txns);
    assert_eq!(txns[0].category, "Groceries");
    assert_eq!(txns[1].category, UNCATEGORIZED);
}

#[test]
fn test_classify_batch_overwrites_existing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = test_store(&dir);
    store.add_category("Transport").unwrap();
    store.add_keyword("Transport", "uber").unwrap();

    let mut txns = vec![make_txn("uber")];
    txns[0].category = "Groceries".into();
    // Re-classification always starts from scratch; stale assignments from a
    // previous store snapshot do not survive.
    Classifier::new(&store).classify_batch(&mut txns);
    assert_eq!(txns[0].category, "Transport");
}

#[test]
fn test_classify_batch_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);
    let mut txns: Vec<Transaction> = vec![];
    Classifier::new(&store).classify_batch(&mut txns);
    assert!(txns.is_empty());
}
