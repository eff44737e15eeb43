//! Conflict notification callbacks.

use crate::models::Task;

/// Callback invoked when a candidate task overlaps a scheduled one.
///
/// Observers are notified after the insert has already been rejected;
/// they cannot veto or roll anything back. `Send` so a manager can live
/// behind a `Mutex` in a multi-threaded host.
pub trait ConflictObserver: Send {
    /// Called once per rejected insert with the candidate and the first
    /// scheduled task it overlapped.
    fn on_conflict(&self, new_task: &Task, existing: &Task);
}

/// Default observer: prints a human-readable conflict message to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleConflictObserver;

impl ConflictObserver for ConsoleConflictObserver {
    fn on_conflict(&self, _new_task: &Task, existing: &Task) {
        println!(
            "Error: Task conflicts with existing task \"{}\".",
            existing.description
        );
    }
}
