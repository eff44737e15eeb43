//! Schedule domain models.
//!
//! A deliberately flat model: the day is a list of [`Task`] intervals,
//! nothing more. No calendars, no recurrence, no resources.

mod task;

pub use task::Task;
