//! Schedule management and conflict notification.
//!
//! [`ScheduleManager`] owns the day's task list and runs overlap detection
//! before every insert. Registered [`ConflictObserver`]s are notified
//! synchronously, in registration order, whenever an insert is rejected.
//!
//! # Algorithm
//!
//! Conflict detection is a linear scan of the existing tasks in insertion
//! order; the first overlap rejects the candidate. O(n) per insert, which
//! is ample for a single person's day.

mod manager;
mod observer;

pub use manager::ScheduleManager;
pub use observer::{ConflictObserver, ConsoleConflictObserver};
