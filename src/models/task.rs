//! Task model.
//!
//! A task is one half-open `[start, end)` interval in the day with a
//! description, a priority label, and a completion flag.
//!
//! # Time Representation
//! Start and end are stored as the validated `HH:MM` strings they were
//! entered with. Interval comparisons are lexicographic, which orders
//! correctly when times are zero-padded to fixed width.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scheduled task.
///
/// The description doubles as the unique lookup key (matched
/// case-insensitively by the manager). Construction does not enforce
/// `start < end`; callers that care go through
/// [`create_task`](crate::factory::create_task), which validates the
/// time format but not the ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Description — the unique lookup key.
    pub description: String,
    /// Interval start (`HH:MM`, inclusive).
    pub start: String,
    /// Interval end (`HH:MM`, exclusive).
    pub end: String,
    /// Priority label (High/Medium/Low by convention, free text).
    pub priority: String,
    /// Whether the task has been marked completed.
    pub completed: bool,
}

impl Task {
    /// Creates a pending task.
    ///
    /// Times are taken as-is; use
    /// [`create_task`](crate::factory::create_task) for validated
    /// construction.
    pub fn new(
        description: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            start: start.into(),
            end: end.into(),
            priority: priority.into(),
            completed: false,
        }
    }

    /// Whether this task's interval overlaps `other`'s.
    ///
    /// Half-open semantics: a shared boundary (`self.end == other.start`)
    /// is not an overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// Marks the task completed. One-way; there is no transition back
    /// to pending.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Case-insensitive description match.
    pub(crate) fn matches_description(&self, description: &str) -> bool {
        self.description.eq_ignore_ascii_case(description)
    }

    /// Case-insensitive priority match.
    pub(crate) fn matches_priority(&self, priority: &str) -> bool {
        self.priority.eq_ignore_ascii_case(priority)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} [{}]",
            self.start, self.end, self.description, self.priority
        )?;
        if self.completed {
            write!(f, " (completed)")?;
        }
        Ok(())
    }
}
