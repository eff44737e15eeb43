//! Single-day task schedule organizer.
//!
//! In-memory scheduling core for one person's day: each task is a half-open
//! `[start, end)` interval of `HH:MM` clock times with a description, a
//! priority label, and a completion flag. A task is inserted only when it
//! does not overlap an already-scheduled interval; rejected inserts notify
//! registered conflict observers.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`Task`](models::Task)
//! - **`validation`**: 24-hour `HH:MM` time-format checks
//! - **`factory`**: Validated task construction
//! - **`scheduler`**: [`ScheduleManager`](scheduler::ScheduleManager)
//!   (conflict detection, CRUD, priority and time-ordered views) and
//!   conflict observers
//! - **`error`**: Error taxonomy shared by all operations
//!
//! # Scope
//!
//! Single user, single day, single thread. Nothing is persisted; the
//! schedule lives for the lifetime of the owning program. A multi-threaded
//! host wraps the manager in one `Mutex` — every operation is short and
//! non-blocking, so coarse locking suffices.

pub mod error;
pub mod factory;
pub mod models;
pub mod scheduler;
pub mod validation;
