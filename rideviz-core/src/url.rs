//! Data-endpoint URL building.
//!
//! The endpoints take optional `start_date`/`end_date` query parameters.
//! Values are percent-encoded with the same unreserved set as JS
//! `encodeURIComponent`, so the builder stays correct even if a caller feeds
//! it something other than a plain ISO date.

/// Characters `encodeURIComponent` leaves unescaped.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Percent-encode a query parameter value.
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

/// Build the data-fetch URL from a base endpoint and an optional date range.
/// Parameters are appended only when present; a base that already carries a
/// query string is extended rather than broken.
pub fn build_range_url(base: &str, start_date: Option<&str>, end_date: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(start) = start_date {
        params.push(format!("start_date={}", encode_query_value(start)));
    }
    if let Some(end) = end_date {
        params.push(format!("end_date={}", encode_query_value(end)));
    }
    if params.is_empty() {
        return base.to_string();
    }
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, params.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_params_returns_base() {
        assert_eq!(build_range_url("/data/routes", None, None), "/data/routes");
    }

    #[test]
    fn test_both_params_appended() {
        assert_eq!(
            build_range_url("/data/routes", Some("2023-01-01"), Some("2023-02-01")),
            "/data/routes?start_date=2023-01-01&end_date=2023-02-01"
        );
    }

    #[test]
    fn test_single_param() {
        assert_eq!(
            build_range_url("/data/times", Some("2023-01-01"), None),
            "/data/times?start_date=2023-01-01"
        );
        assert_eq!(
            build_range_url("/data/times", None, Some("2023-02-01")),
            "/data/times?end_date=2023-02-01"
        );
    }

    #[test]
    fn test_existing_query_string_extended() {
        assert_eq!(
            build_range_url("/data/times?route=3", Some("2023-01-01"), None),
            "/data/times?route=3&start_date=2023-01-01"
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        assert_eq!(encode_query_value("2023-01-01"), "2023-01-01");
        assert_eq!(encode_query_value("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_query_value("līdz"), "l%C4%ABdz");
    }
}
