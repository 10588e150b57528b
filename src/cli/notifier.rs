use tracing::warn;

use crate::cli::io;
use crate::tracker::notifier::{Notice, Notifier};

/// Prints notices and, when interactive, waits for the user to acknowledge them.
#[derive(Debug, Clone, Copy)]
pub struct CliNotifier {
    blocking: bool,
}

impl CliNotifier {
    pub fn new(blocking: bool) -> Self {
        Self { blocking }
    }
}

impl Notifier for CliNotifier {
    fn notify(&self, notice: &Notice) {
        if notice.is_success() {
            io::print_success(notice);
        } else {
            io::print_warning(notice);
        }
        if self.blocking {
            if let Err(err) = io::wait_for_enter() {
                warn!(error = %err, "acknowledgment prompt failed");
            }
        }
    }
}
