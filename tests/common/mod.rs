#![allow(dead_code)]

use chrono::NaiveDate;
use expense_tracker::domain::ExpenseKind;
use expense_tracker::tracker::{AppState, FixedClock, RecordingNotifier};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 3).expect("valid date")
}

/// App state pinned to [`today`] with a notifier the test can inspect.
pub fn app() -> (AppState, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let app = AppState::new(Box::new(FixedClock::on(today())), Box::new(notifier.clone()));
    (app, notifier)
}

pub fn add(app: &mut AppState, amount: &str, kind: ExpenseKind, description: &str) {
    app.set_amount(amount);
    app.set_kind(kind);
    app.set_description(description);
    app.submit().expect("valid expense");
}

/// The coffee/rent pair used throughout the scenarios.
pub fn coffee_and_rent() -> AppState {
    let (mut app, _) = app();
    add(&mut app, "12.5", ExpenseKind::Debit, "coffee");
    add(&mut app, "40", ExpenseKind::Credit, "rent");
    app
}
