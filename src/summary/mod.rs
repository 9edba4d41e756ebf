use rust_decimal::Decimal;

use crate::models::Transaction;

/// Total spend per category over the given rows, largest first. Categories
/// first appear in row order, so ties keep a stable, predictable ordering.
pub(crate) fn category_totals(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for txn in transactions {
        match totals.iter_mut().find(|(name, _)| *name == txn.category) {
            Some((_, total)) => *total += txn.amount,
            None => totals.push((txn.category.clone(), txn.amount)),
        }
    }
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
}

/// The payments tab's single aggregate: the sum of credit amounts.
pub(crate) fn total_payments(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_credit())
        .map(|t| t.amount)
        .sum()
}

/// Split a statement into its debit (expenses) and credit (payments) views.
pub(crate) fn split_by_direction(
    transactions: Vec<Transaction>,
) -> (Vec<Transaction>, Vec<Transaction>) {
    transactions.into_iter().partition(|t| t.is_debit())
}

#[cfg(test)]
mod tests;
