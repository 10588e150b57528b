use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use thiserror::Error;

use crate::errors::ValidationError;

/// Direction of money movement for a logged entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExpenseKind {
    #[default]
    Debit,
    Credit,
}

impl ExpenseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseKind::Debit => "debit",
            ExpenseKind::Credit => "credit",
        }
    }

    /// Upper-cased label used in list rows and export lines.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseKind::Debit => "DEBIT",
            ExpenseKind::Credit => "CREDIT",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown expense type `{0}` (use debit or credit)")]
pub struct ParseKindError(pub String);

impl FromStr for ExpenseKind {
    type Err = ParseKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debit" => Ok(ExpenseKind::Debit),
            "credit" => Ok(ExpenseKind::Credit),
            _ => Err(ParseKindError(value.to_string())),
        }
    }
}

/// A single logged transaction.
///
/// Records are immutable once built: fields are private and only exposed
/// through accessors. The amount is always finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    amount: f64,
    kind: ExpenseKind,
    description: String,
    date: NaiveDate,
}

impl Expense {
    pub fn new(
        amount: f64,
        kind: ExpenseKind,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::NonPositive(amount.to_string()));
        }
        Ok(Self {
            amount,
            kind,
            description: description.into(),
            date,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn kind(&self) -> ExpenseKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// ISO `YYYY-MM-DD` rendering of the creation day.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `TYPE: $amount` with exactly two decimals.
    pub fn amount_label(&self) -> String {
        format!("{}: ${:.2}", self.kind.label(), self.amount)
    }
}
