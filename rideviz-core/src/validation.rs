//! Date-range form validation rules and user-facing messages.
//!
//! The rules mirror native form validity for a pair of `<input type="date">`
//! fields carrying `required`/`min`/`max` attributes: a required check first,
//! then a bounds check, then a start/end ordering check across the pair.
//! The UI crate mirrors the resulting messages into each input's custom
//! validity; this module only decides what the messages are.

use crate::dates::{format_date, parse_date};
use chrono::NaiveDate;

/// "Please enter a date."
pub const MSG_REQUIRED: &str = "Lūdzu norādi datumu.";

/// "The end date may not precede the start date."
pub const MSG_END_BEFORE_START: &str = "Beigu datums nedrīkst būt pirms sākuma datuma";

/// The inclusive date window for which the database holds records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self { min, max }
    }

    /// "The database holds records from {min} to {max}." Both bounds appear
    /// verbatim so the user can see the available window.
    pub fn range_message(&self) -> String {
        format!(
            "Datubāzē pieejami ieraksti no {} līdz {}.",
            format_date(&self.min),
            format_date(&self.max)
        )
    }

    fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}

/// Derived error state for the date-range form. Recomputed from scratch on
/// every input change; empty strings mean "valid".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub start_date_error: String,
    pub end_date_error: String,
}

impl ValidationState {
    pub fn is_valid(&self) -> bool {
        self.start_date_error.is_empty() && self.end_date_error.is_empty()
    }
}

/// Validate a single required date input against the bounds.
///
/// The required check takes precedence: an empty value is never reported as
/// out of range. A non-empty value that does not parse as a date is left to
/// the browser's own bad-input handling and yields no message here.
pub fn validate_value(value: &str, bounds: &DateBounds) -> String {
    if value.is_empty() {
        return MSG_REQUIRED.to_string();
    }
    match parse_date(value) {
        Ok(date) if !bounds.contains(date) => bounds.range_message(),
        _ => String::new(),
    }
}

/// Validate the start/end ordering. Only evaluated when both values hold a
/// parseable date; returns `None` otherwise so the caller keeps whatever
/// error the single-field checks produced for the end input.
pub fn validate_order(start: &str, end: &str) -> Option<String> {
    let start_date = parse_date(start).ok()?;
    let end_date = parse_date(end).ok()?;
    if end_date < start_date {
        Some(MSG_END_BEFORE_START.to_string())
    } else {
        Some(String::new())
    }
}

/// Run the full validation pass over both inputs: per-field checks first,
/// then the ordering check, which overrides the end field's error whenever
/// both dates are present.
pub fn validate_pair(start: &str, end: &str, bounds: &DateBounds) -> ValidationState {
    let start_date_error = validate_value(start, bounds);
    let mut end_date_error = validate_value(end, bounds);
    if let Some(order_error) = validate_order(start, end) {
        end_date_error = order_error;
    }
    ValidationState {
        start_date_error,
        end_date_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bounds() -> DateBounds {
        DateBounds::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        )
    }

    #[test]
    fn test_empty_value_is_required_not_out_of_range() {
        assert_eq!(validate_value("", &bounds()), MSG_REQUIRED);
    }

    #[test]
    fn test_value_inside_bounds_is_valid() {
        assert_eq!(validate_value("2023-06-15", &bounds()), "");
        assert_eq!(validate_value("2023-01-01", &bounds()), "");
        assert_eq!(validate_value("2023-12-31", &bounds()), "");
    }

    #[test]
    fn test_out_of_range_message_embeds_both_bounds() {
        let msg = validate_value("2024-02-01", &bounds());
        assert!(msg.contains("2023-01-01"));
        assert!(msg.contains("2023-12-31"));

        let msg = validate_value("2022-12-31", &bounds());
        assert!(msg.contains("2023-01-01"));
        assert!(msg.contains("2023-12-31"));
    }

    #[test]
    fn test_clearing_value_returns_to_required() {
        let state = validate_pair("2023-06-01", "2023-06-30", &bounds());
        assert!(state.is_valid());

        let state = validate_pair("", "2023-06-30", &bounds());
        assert_eq!(state.start_date_error, MSG_REQUIRED);
        assert_eq!(state.end_date_error, "");
    }

    #[test]
    fn test_end_before_start_flags_end_field() {
        let state = validate_pair("2023-06-30", "2023-06-01", &bounds());
        assert_eq!(state.start_date_error, "");
        assert_eq!(state.end_date_error, MSG_END_BEFORE_START);
    }

    #[test]
    fn test_end_equal_or_after_start_is_valid() {
        assert!(validate_pair("2023-06-01", "2023-06-01", &bounds()).is_valid());
        assert!(validate_pair("2023-06-01", "2023-06-02", &bounds()).is_valid());
    }

    #[test]
    fn test_order_check_skipped_when_either_value_missing() {
        assert_eq!(validate_order("", "2023-06-01"), None);
        assert_eq!(validate_order("2023-06-01", ""), None);

        let state = validate_pair("2023-06-01", "", &bounds());
        assert_eq!(state.end_date_error, MSG_REQUIRED);
    }
}
