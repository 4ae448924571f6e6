//! Lenient date parsing.
//!
//! CMS editors type dates by hand, so the same field shows up as
//! `2025-01-19`, `2025-1-19`, `2025/1/19`, a full RFC 3339 timestamp, or
//! just a year. [`parse_lenient`] accepts all of these and returns `None`
//! for anything else; callers decide how undated records order.

use chrono::{DateTime, NaiveDate};

/// Parse a CMS date string into a calendar date.
///
/// Accepted forms:
///
/// - `YYYY-M-D` / `YYYY-MM-DD` (either separator `-` or `/`)
/// - RFC 3339 timestamps (`2024-06-01T12:00:00Z`), date part only
/// - `YYYY-MM` (first of the month)
/// - `YYYY` (first of January)
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use folio_core::dates::parse_lenient;
///
/// assert_eq!(parse_lenient("2025-1-19"), NaiveDate::from_ymd_opt(2025, 1, 19));
/// assert_eq!(parse_lenient("2024"), NaiveDate::from_ymd_opt(2024, 1, 1));
/// assert_eq!(parse_lenient("soon"), None);
/// ```
pub fn parse_lenient(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }

    // Drop a trailing time component ("2024-06-01 10:00", "2024-06-01T10:00")
    let date_part = raw
        .split(|c: char| c == 'T' || c.is_whitespace())
        .next()
        .unwrap_or(raw);

    let parts: Vec<&str> = date_part.split(['-', '/']).collect();
    let numbers: Option<Vec<u32>> = parts.iter().map(|p| parse_component(p)).collect();
    let numbers = numbers?;

    let (year, month, day) = match numbers.as_slice() {
        [y] => (*y, 1, 1),
        [y, m] => (*y, *m, 1),
        [y, m, d] => (*y, *m, *d),
        _ => return None,
    };

    // A four-digit year is required; "1-2-3" is not a date
    if parts.first().map(|p| p.len()) != Some(4) {
        log::debug!("Rejecting date without four-digit year: {raw}");
        return None;
    }

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 4 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_parse_zero_padded() {
        assert_eq!(parse_lenient("2024-06-01"), ymd(2024, 6, 1));
    }

    #[test]
    fn test_parse_single_digit_month_and_day() {
        assert_eq!(parse_lenient("2025-1-19"), ymd(2025, 1, 19));
        assert_eq!(parse_lenient("2025-1-9"), ymd(2025, 1, 9));
    }

    #[test]
    fn test_parse_slash_separator() {
        assert_eq!(parse_lenient("2023/11/5"), ymd(2023, 11, 5));
    }

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(parse_lenient("2024-06-01T12:30:00Z"), ymd(2024, 6, 1));
        assert_eq!(parse_lenient("2024-06-01T23:30:00-05:00"), ymd(2024, 6, 1));
    }

    #[test]
    fn test_parse_with_naive_time() {
        assert_eq!(parse_lenient("2024-06-01 10:00"), ymd(2024, 6, 1));
    }

    #[test]
    fn test_parse_year_month_and_year() {
        assert_eq!(parse_lenient("2022-3"), ymd(2022, 3, 1));
        assert_eq!(parse_lenient("2022"), ymd(2022, 1, 1));
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert_eq!(parse_lenient("  2024-06-01 "), ymd(2024, 6, 1));
    }

    #[test]
    fn test_reject_invalid() {
        assert_eq!(parse_lenient(""), None);
        assert_eq!(parse_lenient("soon"), None);
        assert_eq!(parse_lenient("2024-13-01"), None);
        assert_eq!(parse_lenient("2024-02-30"), None);
        assert_eq!(parse_lenient("1-2-3"), None);
        assert_eq!(parse_lenient("2024-01-01-01"), None);
        assert_eq!(parse_lenient("2024--01"), None);
    }

    mod props {
        use super::*;
        use chrono::Datelike;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_unpadded_and_padded_forms_agree(days in 0i64..40_000) {
                let base = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
                let date = base + chrono::Duration::days(days);
                let padded = date.format("%Y-%m-%d").to_string();
                let unpadded = format!("{}-{}-{}", date.year(), date.month(), date.day());
                prop_assert_eq!(parse_lenient(&padded), Some(date));
                prop_assert_eq!(parse_lenient(&unpadded), Some(date));
            }
        }
    }
}
