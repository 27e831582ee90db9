//! User-facing message surface.
use crate::lib::errors::{Advisory, LaunchError};

/// Receives the one fatal message of a failed launch and any advisories.
pub trait Notifier {
    fn notify_error(&mut self, error: &LaunchError);
    fn notify_advisory(&mut self, advisory: &Advisory);
}

/// Writes each message as a single line on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify_error(&mut self, error: &LaunchError) {
        eprintln!("{error}");
    }

    fn notify_advisory(&mut self, advisory: &Advisory) {
        eprintln!("{advisory}");
    }
}
