//! Error types for date construction and parsing.

/// Error type for all fallible date operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Returned when a year/month/day triple is not a real calendar date.
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component as given.
        year: i32,
        /// Month component as given.
        month: u32,
        /// Day component as given.
        day: u32,
    },

    /// Returned when a string is not in YYYY-MM-DD form.
    #[error("cannot parse {input:?} as a YYYY-MM-DD date")]
    Unparseable {
        /// The rejected input string.
        input: String,
    },
}
