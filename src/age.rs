//! age.rs
//!
//! Calendar-aware age of a person on a given date, as years/months/days.
//!
//! Chrono has no built-in year/month/day diff, so the borrowing rules are
//! implemented manually:
//!   • day underflow borrows from the previous month (28–31 days)
//!   • month underflow borrows from the year
//!   • leap years and varying month lengths are respected

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A person's age broken into calendar components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Computes the age of someone born on `birth` as of `reference`.
pub fn age_on(birth: NaiveDate, reference: NaiveDate) -> Age {
    let mut years = reference.year() - birth.year();
    let mut months = reference.month() as i32 - birth.month() as i32;
    let mut days = reference.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;

        // Borrow days from the month preceding `reference`.
        let (prev_year, prev_month) = if reference.month() == 1 {
            (reference.year() - 1, 12)
        } else {
            (reference.year(), reference.month() - 1)
        };
        days += days_in_month(prev_year, prev_month) as i32;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Age {
        years,
        months,
        days,
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

pub(crate) fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Returns number of days in a given year/month (handles leap years)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exact_birthday() {
        let age = age_on(date(1992, 6, 14), date(2026, 6, 14));
        assert_eq!(
            age,
            Age {
                years: 34,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn day_underflow_borrows_from_previous_month() {
        // February 2023 has 28 days.
        let age = age_on(date(2000, 2, 25), date(2023, 3, 10));
        assert_eq!(
            age,
            Age {
                years: 23,
                months: 0,
                days: 13
            }
        );
    }

    #[test]
    fn day_underflow_in_leap_february() {
        // February 2024 has 29 days.
        let age = age_on(date(2000, 2, 25), date(2024, 3, 10));
        assert_eq!(
            age,
            Age {
                years: 24,
                months: 0,
                days: 14
            }
        );
    }

    #[test]
    fn month_underflow_borrows_from_year() {
        let age = age_on(date(2000, 11, 5), date(2023, 3, 5));
        assert_eq!(
            age,
            Age {
                years: 22,
                months: 4,
                days: 0
            }
        );
    }

    #[test]
    fn january_reference_borrows_from_december() {
        let age = age_on(date(2000, 12, 25), date(2024, 1, 10));
        assert_eq!(
            age,
            Age {
                years: 23,
                months: 0,
                days: 16
            }
        );
    }

    #[test]
    fn display_pluralizes() {
        let one = Age {
            years: 1,
            months: 1,
            days: 1,
        };
        assert_eq!(one.to_string(), "1 year, 1 month, 1 day");

        let many = Age {
            years: 34,
            months: 0,
            days: 2,
        };
        assert_eq!(many.to_string(), "34 years, 0 months, 2 days");
    }
}
