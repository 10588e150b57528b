//! Top-level mutable application state.
//!
//! [`AppState`] owns the entry form, the expense store and the current view
//! selections. Every change to the store or to a selection republishes the
//! projection to subscribed listeners; [`AppState::projection`] recomputes it
//! on demand for callers that render explicitly.

use tracing::debug;

use crate::domain::{Expense, ExpenseKind};
use crate::errors::ValidationError;
use crate::tracker::{
    clock::{Clock, SystemClock},
    export::{self, ExportArtifact},
    form::EntryForm,
    notifier::{Notice, Notifier, SilentNotifier},
    projection::{project, FilterKey, SortKey},
    store::ExpenseStore,
};

/// Receives the freshly computed projection after each state change.
pub trait ProjectionListener {
    fn on_projection(&mut self, view: &[Expense]);
}

impl<F> ProjectionListener for F
where
    F: FnMut(&[Expense]),
{
    fn on_projection(&mut self, view: &[Expense]) {
        self(view)
    }
}

pub struct AppState {
    form: EntryForm,
    store: ExpenseStore,
    sort: SortKey,
    filter: FilterKey,
    clock: Box<dyn Clock>,
    notifier: Box<dyn Notifier>,
    listeners: Vec<Box<dyn ProjectionListener>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Box::new(SystemClock), Box::new(SilentNotifier))
    }
}

impl AppState {
    pub fn new(clock: Box<dyn Clock>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            form: EntryForm::new(),
            store: ExpenseStore::new(),
            sort: SortKey::default(),
            filter: FilterKey::default(),
            clock,
            notifier,
            listeners: Vec::new(),
        }
    }

    pub fn with_view(mut self, sort: SortKey, filter: FilterKey) -> Self {
        self.sort = sort;
        self.filter = filter;
        self
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn filter(&self) -> FilterKey {
        self.filter
    }

    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.form.set_amount(value);
    }

    pub fn set_kind(&mut self, kind: ExpenseKind) {
        self.form.set_kind(kind);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.form.set_description(value);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.publish();
    }

    pub fn set_filter(&mut self, filter: FilterKey) {
        self.filter = filter;
        self.publish();
    }

    /// Submits the entry form, appends the record and notifies the user.
    pub fn submit(&mut self) -> Result<Expense, ValidationError> {
        match self.form.submit(self.clock.as_ref()) {
            Ok(expense) => {
                self.store.append(expense.clone());
                self.notifier.notify(&Notice::ExpenseAdded);
                self.publish();
                Ok(expense)
            }
            Err(err) => {
                self.notifier.notify(&Notice::InvalidAmount(err.clone()));
                Err(err)
            }
        }
    }

    pub fn projection(&self) -> Vec<Expense> {
        project(self.store.records(), self.sort, self.filter)
    }

    /// Serializes the live projection.
    pub fn export(&self) -> ExportArtifact {
        export::export(&self.projection())
    }

    pub fn subscribe(&mut self, listener: impl ProjectionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn publish(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let view = self.projection();
        debug!(listeners = self.listeners.len(), "publishing projection");
        for listener in &mut self.listeners {
            listener.on_projection(&view);
        }
    }
}
