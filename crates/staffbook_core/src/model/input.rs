//! Draft input normalization applied while the user types.
//!
//! # Responsibility
//! - Shape free-form phone input towards `DDD-DDD-DDDD`.
//! - Normalize date input to the `YYYY-MM-DD` wire form.

use crate::model::employee::{format_date, parse_date};
use chrono::{DateTime, Utc};

const PHONE_DIGITS: usize = 10;

/// Formats raw phone input progressively.
///
/// Non-digits are dropped, input is capped at ten digits and dashes are
/// inserted after the third and sixth digit once those digits exist.
pub fn format_phone_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Normalizes date input to `YYYY-MM-DD`.
///
/// Accepts a plain calendar date or an RFC 3339 timestamp (reduced to its UTC
/// date). Anything else is returned unchanged so validation can report it.
pub fn normalize_date_input(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some(date) = parse_date(trimmed) {
        return format_date(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return format_date(timestamp.with_timezone(&Utc).date_naive());
    }
    raw.to_string()
}
