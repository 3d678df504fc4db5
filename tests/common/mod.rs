//! Common test helpers and utilities shared across test suite.

use chrono::NaiveDate;
use marcholdings::Holding;

/// Builds a calendar date, panicking on invalid components.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

/// Asserts a holding covers exactly the given closed date range.
#[allow(dead_code)]
pub fn assert_range(holding: &Holding, start: (i32, u32, u32), end: (i32, u32, u32)) {
    assert_eq!(
        holding.start_date(),
        Some(date(start.0, start.1, start.2)),
        "start date of {holding:?}"
    );
    assert_eq!(
        holding.end_date(),
        Some(date(end.0, end.1, end.2)),
        "end date of {holding:?}"
    );
}

/// Canonical statements that must survive a parse/render round trip.
#[allow(dead_code)]
pub const CANONICAL_STATEMENTS: [&str; 7] = [
    "v.1(2010)",
    "v.1(2010)-",
    "v.1-2(2010-2011)",
    "v.1:no.1-3",
    "v.2:no.3-v.6:no.5(2002:Mar.-2006:May)",
    "v.1",
    "v.1:no.2(2016:Feb.)-",
];
