//! State management and derived-view logic.

pub mod app_state;
pub mod clock;
pub mod export;
pub mod form;
pub mod notifier;
pub mod projection;
pub mod store;

pub use app_state::{AppState, ProjectionListener};
pub use clock::{Clock, FixedClock, SystemClock};
pub use export::{ExportArtifact, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use form::{parse_amount, submit, EntryForm};
pub use notifier::{Notice, Notifier, RecordingNotifier, SilentNotifier};
pub use projection::{project, FilterKey, ParseFilterError, SortKey};
pub use store::ExpenseStore;
