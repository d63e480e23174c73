//! Validated date construction from raw components and ISO strings.
//!
//! All raw input funnels through [`from_ymd`], so an out-of-range month or
//! day always surfaces as [`DateError::InvalidDate`] rather than a generic
//! parse failure.

use chrono::NaiveDate;

use crate::error::DateError;

/// Builds a calendar date from year/month/day, rejecting impossible dates.
pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::InvalidDate { year, month, day })
}

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// Strings that are not three dash-separated numbers yield
/// [`DateError::Unparseable`]; numeric components out of range yield
/// [`DateError::InvalidDate`].
pub fn parse_iso(input: &str) -> Result<NaiveDate, DateError> {
    let unparseable = || DateError::Unparseable {
        input: input.to_string(),
    };

    let mut parts = input.trim().splitn(3, '-');
    let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Err(unparseable()),
    };

    let year: i32 = y.parse().map_err(|_| unparseable())?;
    let month: u32 = m.parse().map_err(|_| unparseable())?;
    let day: u32 = d.parse().map_err(|_| unparseable())?;

    from_ymd(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_date() {
        let d = from_ymd(1992, 6, 14).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(1992, 6, 14).unwrap());
    }

    #[test]
    fn month_out_of_range() {
        let err = from_ymd(2024, 13, 1).unwrap_err();
        assert_eq!(
            err,
            DateError::InvalidDate {
                year: 2024,
                month: 13,
                day: 1
            }
        );
    }

    #[test]
    fn day_out_of_range() {
        let err = from_ymd(2024, 1, 32).unwrap_err();
        assert_eq!(
            err,
            DateError::InvalidDate {
                year: 2024,
                month: 1,
                day: 32
            }
        );
    }

    #[test]
    fn feb_29_only_in_leap_years() {
        assert!(from_ymd(2024, 2, 29).is_ok());
        assert!(from_ymd(2023, 2, 29).is_err());
    }

    #[test]
    fn parse_valid_iso() {
        let d = parse_iso("2023-12-20").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2023, 12, 20).unwrap());
    }

    #[test]
    fn parse_trims_whitespace() {
        assert!(parse_iso(" 2023-12-20 ").is_ok());
    }

    #[test]
    fn parse_out_of_range_is_invalid_date() {
        // Well-shaped but impossible dates keep the InvalidDate kind.
        let err = parse_iso("2024-13-01").unwrap_err();
        assert!(matches!(err, DateError::InvalidDate { month: 13, .. }));
    }

    #[test]
    fn parse_garbage_is_unparseable() {
        for input in ["", "tomorrow", "2024/01/02", "2024-01", "a-b-c"] {
            let err = parse_iso(input).unwrap_err();
            assert!(matches!(err, DateError::Unparseable { .. }), "{input:?}");
        }
    }
}
