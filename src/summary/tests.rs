#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::{Direction, Transaction};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn make_txn(details: &str, amount: Decimal, direction: Direction, category: &str) -> Transaction {
    Transaction {
        date: chrono::NaiveDate::from_ymd_opt(2024, 1, 5),
        details: details.into(),
        amount,
        direction,
        category: category.into(),
    }
}

// ── category_totals ───────────────────────────────────────────

#[test]
fn test_category_totals_groups_and_sorts() {
    let txns = vec![
        make_txn("UBER", dec!(20.00), Direction::Debit, "Transport"),
        make_txn("WHOLE FOODS", dec!(150.00), Direction::Debit, "Groceries"),
        make_txn("CAREEM", dec!(35.00), Direction::Debit, "Transport"),
    ];
    let totals = category_totals(&txns);
    assert_eq!(
        totals,
        vec![
            ("Groceries".to_string(), dec!(150.00)),
            ("Transport".to_string(), dec!(55.00)),
        ]
    );
}

#[test]
fn test_category_totals_empty() {
    assert!(category_totals(&[]).is_empty());
}

#[test]
fn test_category_totals_single_category() {
    let txns = vec![
        make_txn("A", dec!(1.00), Direction::Debit, "Groceries"),
        make_txn("B", dec!(2.50), Direction::Debit, "Groceries"),
    ];
    let totals = category_totals(&txns);
    assert_eq!(totals, vec![("Groceries".to_string(), dec!(3.50))]);
}

// ── total_payments ────────────────────────────────────────────

#[test]
fn test_total_payments() {
    let txns = vec![
        make_txn("SALARY", dec!(100.00), Direction::Credit, "Uncategorized"),
        make_txn("REFUND", dec!(50.50), Direction::Credit, "Uncategorized"),
        make_txn("UBER", dec!(20.00), Direction::Debit, "Transport"),
    ];
    assert_eq!(total_payments(&txns), dec!(150.50));
}

#[test]
fn test_total_payments_no_credits() {
    let txns = vec![make_txn("UBER", dec!(20.00), Direction::Debit, "Transport")];
    assert_eq!(total_payments(&txns), Decimal::ZERO);
}

// ── split_by_direction ────────────────────────────────────────

#[test]
fn test_split_by_direction() {
    let txns = vec![
        make_txn("UBER", dec!(20.00), Direction::Debit, "Transport"),
        make_txn("SALARY", dec!(5000.00), Direction::Credit, "Uncategorized"),
        make_txn("COFFEE", dec!(4.50), Direction::Debit, "Uncategorized"),
    ];
    let (debits, credits) = split_by_direction(txns);
    assert_eq!(debits.len(), 2);
    assert_eq!(credits.len(), 1);
    assert_eq!(debits[0].details, "UBER");
    assert_eq!(credits[0].details, "SALARY");
}

#[test]
fn test_split_preserves_row_order() {
    let txns = vec![
        make_txn("A", dec!(1.00), Direction::Debit, "X"),
        make_txn("B", dec!(2.00), Direction::Debit, "X"),
        make_txn("C", dec!(3.00), Direction::Debit, "X"),
    ];
    let (debits, credits) = split_by_direction(txns);
    let names: Vec<&str> = debits.iter().map(|t| t.details.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert!(credits.is_empty());
}
