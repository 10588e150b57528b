use std::{cell::RefCell, fmt, rc::Rc};

use crate::errors::ValidationError;

/// User-facing acknowledgment raised by the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ExpenseAdded,
    InvalidAmount(ValidationError),
}

impl Notice {
    pub fn is_success(&self) -> bool {
        matches!(self, Notice::ExpenseAdded)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ExpenseAdded => f.write_str("Expense added successfully!"),
            Notice::InvalidAmount(err) => write!(f, "{err}"),
        }
    }
}

/// Delivers notices synchronously; implementations may block until acknowledged.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notice: &Notice) {}
}

/// Keeps every notice; clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    log: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.log.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.log.borrow_mut().push(notice.clone());
    }
}
