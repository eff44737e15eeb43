//! Error taxonomy for schedule operations.
//!
//! Every failure is reported to the caller; none is fatal. Operations
//! either fully succeed or leave the schedule untouched — no failure path
//! performs a partial mutation.

use thiserror::Error;

/// Errors returned by schedule operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A time string does not match the 24-hour `HH:MM` pattern.
    #[error("invalid time format \"{value}\" (expected HH:MM, 24-hour)")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// No task matches the given description (case-insensitive).
    #[error("task not found: \"{description}\"")]
    TaskNotFound {
        /// The description that was looked up.
        description: String,
    },

    /// The candidate task overlaps an already-scheduled task.
    #[error("task conflicts with existing task \"{description}\"")]
    Conflict {
        /// Description of the first scheduled task the candidate overlapped.
        description: String,
    },
}
