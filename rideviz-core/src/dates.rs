//! Date parsing and formatting helpers shared by validation and URL building.

use chrono::NaiveDate;

/// Date format used by HTML date inputs and the data endpoints: "YYYY-MM-DD".
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD".
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_and_format_roundtrip() {
        let date = parse_date("2023-04-09").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 4, 9).unwrap());
        assert_eq!(format_date(&date), "2023-04-09");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("").is_err());
        assert!(parse_date("09.04.2023").is_err());
        assert!(parse_date("2023-13-01").is_err());
    }
}
