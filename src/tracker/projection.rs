use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{Expense, ExpenseKind};

/// Ordering applied to the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent day first.
    #[default]
    Date,
    /// Largest amount first.
    Amount,
    /// Store order, untouched.
    Insertion,
}

impl SortKey {
    /// Total parse: anything other than `date` or `amount` keeps insertion order.
    pub fn from_option(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "date" => SortKey::Date,
            "amount" => SortKey::Amount,
            _ => SortKey::Insertion,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Amount => "amount",
            SortKey::Insertion => "insertion",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind filter applied after sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    #[default]
    All,
    Debit,
    Credit,
}

impl FilterKey {
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Debit => expense.kind() == ExpenseKind::Debit,
            FilterKey::Credit => expense.kind() == ExpenseKind::Credit,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::All => "all",
            FilterKey::Debit => "debit",
            FilterKey::Credit => "credit",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter `{0}` (use all, debit or credit)")]
pub struct ParseFilterError(pub String);

impl FromStr for FilterKey {
    type Err = ParseFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterKey::All),
            "debit" => Ok(FilterKey::Debit),
            "credit" => Ok(FilterKey::Credit),
            _ => Err(ParseFilterError(value.to_string())),
        }
    }
}

/// Sorts the full set by `sort` (stable, descending), then keeps records matching `filter`.
pub fn project(records: &[Expense], sort: SortKey, filter: FilterKey) -> Vec<Expense> {
    let mut view = records.to_vec();
    match sort {
        SortKey::Date => view.sort_by(|a, b| b.date().cmp(&a.date())),
        SortKey::Amount => view.sort_by(|a, b| b.amount().total_cmp(&a.amount())),
        SortKey::Insertion => {}
    }
    view.retain(|expense| filter.matches(expense));
    debug!(%sort, %filter, shown = view.len(), total = records.len(), "projection computed");
    view
}
