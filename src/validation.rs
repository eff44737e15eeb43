//! Time-format validation.
//!
//! Checks that a string is a 24-hour `HH:MM` clock time. The hour may be
//! one or two digits (leading zero optional), the minute is always two.
//! Nothing else is accepted — no seconds, no surrounding whitespace, no
//! alternative separators.

use std::sync::LazyLock;

use regex::Regex;

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern"));

/// Whether `text` is a valid 24-hour `HH:MM` clock time.
///
/// Pure predicate, no side effects.
///
/// # Examples
///
/// ```
/// use astro_schedule::validation::is_valid_time;
///
/// assert!(is_valid_time("07:30"));
/// assert!(is_valid_time("7:30"));
/// assert!(is_valid_time("23:59"));
/// assert!(!is_valid_time("24:00"));
/// assert!(!is_valid_time("9:60"));
/// assert!(!is_valid_time(""));
/// ```
pub fn is_valid_time(text: &str) -> bool {
    TIME_PATTERN.is_match(text)
}
