mod common;

use chrono::NaiveDate;
use expense_tracker::domain::{Expense, ExpenseKind};
use expense_tracker::errors::ValidationError;
use expense_tracker::tracker::{export, project, FilterKey, Notice, SortKey};

use common::{add, app, coffee_and_rent, today};

fn descriptions(view: &[Expense]) -> Vec<&str> {
    view.iter().map(Expense::description).collect()
}

#[test]
fn sort_by_amount_puts_rent_first() {
    let mut app = coffee_and_rent();
    app.set_sort(SortKey::Amount);
    let view = app.projection();
    assert_eq!(descriptions(&view), ["rent", "coffee"]);
    assert_eq!(view[0].amount_label(), "CREDIT: $40.00");
    assert_eq!(view[1].amount_label(), "DEBIT: $12.50");
}

#[test]
fn credit_filter_keeps_rent_only() {
    let mut app = coffee_and_rent();
    app.set_filter(FilterKey::Credit);
    assert_eq!(descriptions(&app.projection()), ["rent"]);
}

#[test]
fn export_of_same_day_records_keeps_insertion_order() {
    let app = coffee_and_rent();
    assert_eq!(app.sort(), SortKey::Date);
    assert_eq!(app.filter(), FilterKey::All);

    let text = String::from_utf8(app.export().into_bytes()).unwrap();
    let day = today().format("%Y-%m-%d").to_string();
    assert_eq!(
        text,
        format!("{day} - DEBIT: $12.50 - coffee\n{day} - CREDIT: $40.00 - rent")
    );
}

#[test]
fn export_follows_the_live_projection() {
    let mut app = coffee_and_rent();
    app.set_filter(FilterKey::Debit);
    let text = String::from_utf8(app.export().into_bytes()).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.ends_with("DEBIT: $12.50 - coffee"));
}

#[test]
fn invalid_amounts_leave_store_empty() {
    let (mut app, notifier) = app();
    for input in ["-5", "abc", "", "0"] {
        app.set_amount(input);
        assert!(app.submit().is_err(), "`{input}` should be rejected");
    }
    assert!(app.store().is_empty());
    assert!(app.export().is_empty());
    assert!(notifier.notices().iter().all(|notice| !notice.is_success()));
    assert_eq!(
        notifier.notices().first(),
        Some(&Notice::InvalidAmount(ValidationError::NonPositive("-5".into())))
    );
}

#[test]
fn valid_amounts_are_kept_exactly_and_clear_the_form() {
    let (mut app, notifier) = app();
    for (input, expected) in [("0.5", 0.5), ("19.99", 19.99), ("1e3", 1000.0), (" 7 ", 7.0)] {
        app.set_amount(input);
        app.set_description("item");
        let expense = app.submit().unwrap();
        assert_eq!(expense.amount(), expected);
        assert_eq!(expense.date(), today());
        assert_eq!(app.form().amount(), "");
        assert_eq!(app.form().description(), "");
    }
    assert_eq!(app.store().len(), 4);
    assert_eq!(notifier.notices().len(), 4);
}

#[test]
fn projection_is_idempotent_and_date_sort_is_stable() {
    let day = |d| NaiveDate::from_ymd_opt(2025, 9, d).unwrap();
    let records = vec![
        Expense::new(3.0, ExpenseKind::Debit, "a", day(1)).unwrap(),
        Expense::new(9.0, ExpenseKind::Credit, "b", day(5)).unwrap(),
        Expense::new(1.0, ExpenseKind::Debit, "c", day(5)).unwrap(),
        Expense::new(4.0, ExpenseKind::Credit, "d", day(2)).unwrap(),
    ];

    let sorted = project(&records, SortKey::Date, FilterKey::All);
    assert_eq!(descriptions(&sorted), ["b", "c", "d", "a"]);
    assert_eq!(project(&sorted, SortKey::Date, FilterKey::All), sorted);

    let debit_only = project(&records, SortKey::Date, FilterKey::Debit);
    assert_eq!(project(&debit_only, SortKey::Date, FilterKey::Debit), debit_only);
}

#[test]
fn switching_filter_back_to_all_restores_sorted_view() {
    let (mut app, _) = app();
    add(&mut app, "5", ExpenseKind::Debit, "lunch");
    add(&mut app, "50", ExpenseKind::Credit, "salary");
    add(&mut app, "15", ExpenseKind::Debit, "books");
    app.set_sort(SortKey::Amount);
    let sorted = app.projection();

    app.set_filter(FilterKey::Debit);
    assert_eq!(descriptions(&app.projection()), ["books", "lunch"]);
    app.set_filter(FilterKey::All);
    assert_eq!(app.projection(), sorted);
}

#[test]
fn export_helper_matches_app_export() {
    let app = coffee_and_rent();
    assert_eq!(export::export(&app.projection()), app.export());
}
