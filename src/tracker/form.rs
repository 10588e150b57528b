use tracing::warn;

use crate::domain::{Expense, ExpenseKind};
use crate::errors::ValidationError;
use crate::tracker::clock::Clock;

/// Editable entry fields backing the "add expense" form.
///
/// The kind selection survives a successful submit; amount and description
/// are cleared so the next entry starts blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    amount: String,
    kind: ExpenseKind,
    description: String,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn kind(&self) -> ExpenseKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.amount = value.into();
    }

    pub fn set_kind(&mut self, kind: ExpenseKind) {
        self.kind = kind;
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Validates the current fields and builds a record dated today.
    ///
    /// Fields are only cleared on success.
    pub fn submit(&mut self, clock: &dyn Clock) -> Result<Expense, ValidationError> {
        let expense = submit(&self.amount, self.kind, &self.description, clock)?;
        self.amount.clear();
        self.description.clear();
        Ok(expense)
    }
}

/// Stateless form submission: parse `amount_text` and build a record for today.
pub fn submit(
    amount_text: &str,
    kind: ExpenseKind,
    description: &str,
    clock: &dyn Clock,
) -> Result<Expense, ValidationError> {
    let amount = parse_amount(amount_text).inspect_err(|err| {
        warn!(input = amount_text, error = %err, "rejected expense amount");
    })?;
    Expense::new(amount, kind, description, clock.today())
}

/// Parses a strictly positive, finite decimal amount.
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ValidationError::NotANumber(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositive(trimmed.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn parse_amount_accepts_positive_decimals() {
        assert_eq!(parse_amount("12.5"), Ok(12.5));
        assert_eq!(parse_amount(" 40 "), Ok(40.0));
        assert_eq!(parse_amount("0.01"), Ok(0.01));
    }

    #[test]
    fn parse_amount_rejects_bad_input() {
        assert_eq!(parse_amount(""), Err(ValidationError::MissingAmount));
        assert_eq!(parse_amount("   "), Err(ValidationError::MissingAmount));
        assert!(matches!(parse_amount("abc"), Err(ValidationError::NotANumber(_))));
        assert!(matches!(parse_amount("inf"), Err(ValidationError::NotANumber(_))));
        assert!(matches!(parse_amount("NaN"), Err(ValidationError::NotANumber(_))));
        assert!(matches!(parse_amount("0"), Err(ValidationError::NonPositive(_))));
        assert!(matches!(parse_amount("-5"), Err(ValidationError::NonPositive(_))));
    }

    #[test]
    fn submit_clears_amount_and_description_but_keeps_kind() {
        let mut form = EntryForm::new();
        form.set_amount("12.5");
        form.set_kind(ExpenseKind::Credit);
        form.set_description("refund");

        let expense = form.submit(&clock()).unwrap();
        assert_eq!(expense.amount(), 12.5);
        assert_eq!(expense.kind(), ExpenseKind::Credit);
        assert_eq!(expense.description(), "refund");
        assert_eq!(expense.date(), clock().today());

        assert_eq!(form.amount(), "");
        assert_eq!(form.description(), "");
        assert_eq!(form.kind(), ExpenseKind::Credit);
    }

    #[test]
    fn stateless_submit_dates_record_today() {
        let expense = submit("40", ExpenseKind::Credit, "rent", &clock()).unwrap();
        assert_eq!(expense.date_label(), "2025-06-01");
        assert!(submit("-5", ExpenseKind::Debit, "", &clock()).is_err());
    }

    #[test]
    fn failed_submit_leaves_fields_in_place() {
        let mut form = EntryForm::new();
        form.set_amount("abc");
        form.set_description("lunch");

        assert!(form.submit(&clock()).is_err());
        assert_eq!(form.amount(), "abc");
        assert_eq!(form.description(), "lunch");
    }
}
