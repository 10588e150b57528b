use crate::cli::output;
use crate::domain::Expense;
use crate::tracker::projection::{FilterKey, SortKey};

/// Prints the projected list the way the transactions card lays it out.
pub fn print_view(view: &[Expense], sort: SortKey, filter: FilterKey) {
    output::section(format!("Transactions (sort: {sort}, filter: {filter})"));
    print_rows(view);
}

pub fn print_rows(view: &[Expense]) {
    if view.is_empty() {
        output::info("No expenses to show.");
        return;
    }
    for (index, expense) in view.iter().enumerate() {
        if index > 0 {
            output::separator();
        }
        for line in rows(expense) {
            output::info(line);
        }
    }
}

pub fn rows(expense: &Expense) -> Vec<String> {
    let mut lines = vec![expense.date_label(), expense.amount_label()];
    if !expense.description().is_empty() {
        lines.push(expense.description().to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseKind;
    use chrono::NaiveDate;

    #[test]
    fn rows_show_date_amount_and_description() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let expense = Expense::new(7.0, ExpenseKind::Debit, "bus", date).unwrap();
        assert_eq!(rows(&expense), ["2025-01-31", "DEBIT: $7.00", "bus"]);

        let bare = Expense::new(7.0, ExpenseKind::Credit, "", date).unwrap();
        assert_eq!(rows(&bare).len(), 2);
    }
}
