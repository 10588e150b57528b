#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps dated debit/credit entries in memory, derives sorted
//! and filtered views of them, and exports the current view as plain text.
//!
//! ```
//! use expense_tracker::tracker::{AppState, FilterKey, SortKey};
//!
//! let mut app = AppState::default();
//! app.set_amount("12.5");
//! app.set_description("coffee");
//! app.submit().unwrap();
//!
//! app.set_sort(SortKey::Amount);
//! app.set_filter(FilterKey::Debit);
//! assert_eq!(app.projection().len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod tracker;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense Tracker tracing initialized.");
    });
}
