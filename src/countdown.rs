//! countdown.rs
//!
//! Days remaining until the next anniversary of a birth date.
//!
//! The reference date is an explicit parameter rather than an implicit
//! "today" from the system clock, so the computation is deterministic and
//! directly testable.
//!
//! Policy: a February 29 birth date maps to March 1 in non-leap years.

use chrono::{Datelike, NaiveDate};

/// Returns the number of whole days from `reference` to the next occurrence
/// of `birth`'s month and day. 0 means the anniversary is today.
pub fn days_until_next_birthday(birth: NaiveDate, reference: NaiveDate) -> u32 {
    let next = next_anniversary(birth, reference);
    // `next` is never before `reference` by construction.
    (next - reference).num_days() as u32
}

/// The first anniversary of `birth` on or after `reference`.
pub fn next_anniversary(birth: NaiveDate, reference: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(reference.year(), birth);
    if this_year < reference {
        // Already passed this year (today does not count as passed).
        anniversary_in(reference.year() + 1, birth)
    } else {
        this_year
    }
}

/// The anniversary of `birth` within `year`, substituting March 1 when the
/// birth date is February 29 and `year` is not a leap year.
fn anniversary_in(year: i32, birth: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year")
    })
}
