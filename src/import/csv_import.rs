use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{Direction, Transaction};
use crate::store::UNCATEGORIZED;

/// Statement dates look like "05 Jan 2024".
const DATE_FORMAT: &str = "%d %b %Y";

const COL_DATE: &str = "Date";
const COL_DETAILS: &str = "Details";
const COL_AMOUNT: &str = "Amount";
const COL_DIRECTION: &str = "Debit/Credit";

pub(crate) struct StatementImporter;

impl StatementImporter {
    /// Parse a statement CSV into transactions, one per data row, every row
    /// tagged with the default category.
    ///
    /// Structural problems — a missing required column, an unparsable
    /// amount, an unrecognized Debit/Credit value — fail the whole load;
    /// there is no partial result. Unparsable dates are the one lenient
    /// case: the row is kept with no date.
    pub(crate) fn load(path: &Path) -> Result<Vec<Transaction>> {
        let mut rdr = csv::ReaderBuilder::new()
            .from_path(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let headers = rdr.headers().context("Failed to read CSV header row")?;
        let date_col = find_column(headers, COL_DATE)?;
        let details_col = find_column(headers, COL_DETAILS)?;
        let amount_col = find_column(headers, COL_AMOUNT)?;
        let direction_col = find_column(headers, COL_DIRECTION)?;

        let mut transactions = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result.with_context(|| format!("Row {}: bad CSV record", i + 2))?;
            let field = |col: usize| record.get(col).unwrap_or("");

            let raw_amount = field(amount_col);
            let amount = parse_amount(raw_amount)
                .with_context(|| format!("Row {}: invalid amount '{raw_amount}'", i + 2))?;

            let raw_direction = field(direction_col);
            let direction = Direction::parse(raw_direction).ok_or_else(|| {
                anyhow::anyhow!("Row {}: unrecognized Debit/Credit value '{raw_direction}'", i + 2)
            })?;

            transactions.push(Transaction {
                date: parse_date(field(date_col)),
                details: field(details_col).to_string(),
                amount,
                direction,
                category: UNCATEGORIZED.to_string(),
            });
        }

        Ok(transactions)
    }
}

/// Locate a required column by name; header cells may carry incidental
/// whitespace.
fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| anyhow::anyhow!("Missing required column: {name}"))
}

/// Signed decimal, tolerating thousands separators ("1,234.56" → 1234.56).
fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned = s.replace(',', "");
    Decimal::from_str(cleaned.trim())
        .with_context(|| format!("Failed to parse '{s}' as a decimal amount"))
}

/// Lenient by design: a date the format does not cover becomes None rather
/// than failing the load.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
