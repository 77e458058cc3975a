use chrono::{Datelike, Months, NaiveDate};
use serde::Deserialize;

/// Accepts ISO dates and the `16-May-2025` form used in property links.
pub fn parse_stay_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d-%b-%Y"))
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD or D-Mon-YYYY ({err})"))
}

pub fn deserialize_stay_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_stay_date(&raw).map_err(serde::de::Error::custom)
}

/// `start` moved forward by whole calendar months, clamped to the last day of
/// shorter months (31 Jan + 1 month = 28 Feb).
pub fn add_months(start: NaiveDate, months: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(months))
}

/// Number of whole calendar months from `start` to `end`: the largest `k`
/// with `add_months(start, k) <= end`. Zero when `end` precedes `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }

    let calendar_gap = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let mut months = calendar_gap.max(0) as u32;
    while months > 0 {
        match add_months(start, months) {
            Some(candidate) if candidate <= end => return months,
            _ => months -= 1,
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parses_iso_and_property_link_formats() {
        assert_eq!(parse_stay_date("2025-05-16"), Ok(date(2025, 5, 16)));
        assert_eq!(parse_stay_date(" 16-May-2025 "), Ok(date(2025, 5, 16)));
        assert_eq!(parse_stay_date("1-Jun-2025"), Ok(date(2025, 6, 1)));
        assert!(parse_stay_date("May 16th").is_err());
    }

    #[test]
    fn months_between_counts_whole_months() {
        assert_eq!(months_between(date(2025, 1, 1), date(2025, 1, 31)), 0);
        assert_eq!(months_between(date(2025, 1, 1), date(2025, 2, 1)), 1);
        assert_eq!(months_between(date(2025, 1, 20), date(2025, 2, 19)), 0);
        assert_eq!(months_between(date(2025, 1, 20), date(2025, 2, 25)), 1);
        assert_eq!(months_between(date(2025, 1, 1), date(2025, 3, 31)), 2);
        assert_eq!(months_between(date(2024, 11, 15), date(2025, 2, 14)), 2);
    }

    #[test]
    fn months_between_respects_month_end_clamping() {
        assert_eq!(months_between(date(2025, 1, 31), date(2025, 2, 28)), 1);
        assert_eq!(months_between(date(2025, 1, 31), date(2025, 3, 29)), 1);
        assert_eq!(months_between(date(2025, 1, 31), date(2025, 3, 31)), 2);
    }

    #[test]
    fn months_between_is_zero_for_reversed_range() {
        assert_eq!(months_between(date(2025, 6, 1), date(2025, 1, 1)), 0);
    }
}
