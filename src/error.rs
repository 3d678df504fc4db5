//! Error types for holdings parsing.
//!
//! This module provides the [`HoldingsError`] type for all holdings statement
//! operations and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all holdings parsing operations.
///
/// Every failure is reported synchronously at the point it occurs; callers
/// decide whether to sanitize the input and retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoldingsError {
    /// A month or season token matched neither the month abbreviation table
    /// nor the season table.
    #[error("Bad month/season: {0}")]
    InvalidMonthOrSeason(String),

    /// The statement is missing structure the parser expects, such as equal
    /// numbers of enumeration and chronology segments.
    #[error("Malformed holdings statement: {0}")]
    MalformedStatement(String),

    /// The year component of a date fragment is not a number.
    #[error("Invalid year: {0}")]
    InvalidYear(String),

    /// The day component of a date fragment is not a number.
    #[error("Invalid day: {0}")]
    InvalidDay(String),

    /// The resolved components do not name a calendar date.
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Resolved year
        year: i32,
        /// Resolved month (1-12)
        month: u32,
        /// Resolved day of month
        day: u32,
    },
}

/// Convenience type alias for [`std::result::Result`] with [`HoldingsError`].
pub type Result<T> = std::result::Result<T, HoldingsError>;
