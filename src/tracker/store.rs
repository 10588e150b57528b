use tracing::debug;

use crate::domain::Expense;

/// Append-only, insertion-ordered collection of expenses.
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    records: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: Expense) {
        self.records.push(record);
        debug!(count = self.records.len(), "expense appended");
    }

    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseKind;
    use chrono::NaiveDate;

    #[test]
    fn append_preserves_insertion_order() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let mut store = ExpenseStore::new();
        assert!(store.is_empty());
        store.append(Expense::new(5.0, ExpenseKind::Debit, "first", day).unwrap());
        store.append(Expense::new(1.0, ExpenseKind::Credit, "second", day).unwrap());

        let names: Vec<_> = store.records().iter().map(|e| e.description()).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(store.len(), 2);
    }
}
