use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Debit,
    Credit,
}

impl Direction {
    /// Parse the statement's `Debit/Credit` column. The bank emits exactly
    /// `Debit` or `Credit`; anything else is unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Debit" => Some(Self::Debit),
            "Credit" => Some(Self::Credit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transaction {
    /// None when the statement carried an unparsable date.
    pub date: Option<NaiveDate>,
    pub details: String,
    pub amount: Decimal,
    pub direction: Direction,
    pub category: String,
}

impl Transaction {
    pub fn is_debit(&self) -> bool {
        self.direction == Direction::Debit
    }

    pub fn is_credit(&self) -> bool {
        self.direction == Direction::Credit
    }
}
