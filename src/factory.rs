//! Validated task construction.
//!
//! The only construction path the console uses: both time strings are
//! checked against the `HH:MM` pattern before a [`Task`] exists, so a
//! task never holds a malformed clock string. Format is enforced here
//! and at edit time only — never re-validated afterward.

use crate::error::ScheduleError;
use crate::models::Task;
use crate::validation::is_valid_time;

/// Builds a pending task after validating both time strings.
///
/// Description emptiness and interval ordering (`start < end`) are not
/// checked.
///
/// # Errors
/// [`ScheduleError::InvalidTime`] if `start` or `end` is not a valid
/// 24-hour `HH:MM` string.
pub fn create_task(
    description: impl Into<String>,
    start: impl Into<String>,
    end: impl Into<String>,
    priority: impl Into<String>,
) -> Result<Task, ScheduleError> {
    let start = start.into();
    if !is_valid_time(&start) {
        return Err(ScheduleError::InvalidTime { value: start });
    }
    let end = end.into();
    if !is_valid_time(&end) {
        return Err(ScheduleError::InvalidTime { value: end });
    }
    Ok(Task::new(description, start, end, priority))
}
