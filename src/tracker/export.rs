use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::domain::Expense;
use crate::errors::ExportError;

pub const EXPORT_FILE_NAME: &str = "expenses.txt";
pub const EXPORT_MIME_TYPE: &str = "text/plain";

/// Downloadable plain-text summary of a projected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn file_name(&self) -> &'static str {
        EXPORT_FILE_NAME
    }

    pub fn mime_type(&self) -> &'static str {
        EXPORT_MIME_TYPE
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes `expenses.txt` into `dir`, replacing any previous export.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(EXPORT_FILE_NAME);
        let wrap = |source| ExportError::Write {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(dir).map_err(wrap)?;
        let mut file = File::create(&path).map_err(wrap)?;
        file.write_all(&self.bytes).map_err(wrap)?;
        file.flush().map_err(wrap)?;
        info!(path = %path.display(), bytes = self.bytes.len(), "export written");
        Ok(path)
    }
}

/// `<date> - <TYPE>: $<amount> - <description>`
pub fn format_line(expense: &Expense) -> String {
    format!(
        "{} - {} - {}",
        expense.date_label(),
        expense.amount_label(),
        expense.description()
    )
}

/// Newline-joined lines in the given order, without a trailing newline.
pub fn render(records: &[Expense]) -> String {
    records
        .iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn export(records: &[Expense]) -> ExportArtifact {
    ExportArtifact {
        bytes: render(records).into_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseKind;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 9).unwrap()
    }

    #[test]
    fn line_format_matches_download_layout() {
        let expense = Expense::new(40.0, ExpenseKind::Credit, "rent", day()).unwrap();
        assert_eq!(format_line(&expense), "2025-05-09 - CREDIT: $40.00 - rent");
    }

    #[test]
    fn render_joins_lines_in_given_order() {
        let records = vec![
            Expense::new(12.5, ExpenseKind::Debit, "coffee", day()).unwrap(),
            Expense::new(3.456, ExpenseKind::Credit, "", day()).unwrap(),
        ];
        assert_eq!(
            render(&records),
            "2025-05-09 - DEBIT: $12.50 - coffee\n2025-05-09 - CREDIT: $3.46 - "
        );
    }

    #[test]
    fn empty_export_is_empty_artifact() {
        let artifact = export(&[]);
        assert!(artifact.is_empty());
        assert_eq!(artifact.file_name(), "expenses.txt");
        assert_eq!(artifact.mime_type(), "text/plain");
    }

    #[test]
    fn write_to_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let first = export(&[Expense::new(1.0, ExpenseKind::Debit, "x", day()).unwrap()]);
        first.write_to(dir.path()).unwrap();

        let path = export(&[]).write_to(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(EXPORT_FILE_NAME));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "");
    }
}
