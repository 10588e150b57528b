//! Domain types shared by the form, store, projector and exporter.

pub mod expense;

pub use expense::{Expense, ExpenseKind, ParseKindError};
