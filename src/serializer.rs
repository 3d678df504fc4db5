//! Rendering holdings back to canonical Z39.71 text.
//!
//! [`to_text`] inverts [`Holding::from_text`] for canonical statements:
//!
//! ```
//! use marcholdings::{to_text, Holding};
//!
//! let text = "v.2:no.3-v.6:no.5(2002:Mar.-2006:May)";
//! assert_eq!(to_text(&Holding::from_text(text).unwrap()), text);
//! ```
//!
//! Chronology is written as compactly as it parses back: a single year when
//! the range covers exactly that year, a short `Mon.` end when the range
//! stays within one year, and month/day components only where they differ
//! from the start-of-range or end-of-range defaults.

use crate::chronology::{last_day_of_month, month_abbreviation, parse_date};
use crate::holding::Holding;
use chrono::{Datelike, NaiveDate};
use std::fmt;

const VOLUME_CAPTION: &str = "v.";
const ISSUE_CAPTION: &str = "no.";

/// Render a holding as canonical Z39.71 text.
#[must_use]
pub fn to_text(holding: &Holding) -> String {
    let mut out = enumeration_text(holding);
    if let Some(chronology) = chronology_text(holding) {
        if out.is_empty() {
            out.push_str(&chronology);
        } else {
            out.push_str(&format!("({chronology})"));
        }
    }
    if holding.is_open() {
        out.push('-');
    }
    out
}

/// Render one date as a full chronology fragment.
///
/// Month and day are omitted where they match the default for that side of
/// a range: Jan 1 for a start, Dec 31 for an end, the first or last day of
/// the month for the day.
///
/// ```
/// use chrono::NaiveDate;
/// use marcholdings::serializer::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2006, 5, 31).unwrap();
/// assert_eq!(format_date(date, true), "2006:May");
/// assert_eq!(format_date(date, false), "2006:May 31");
/// ```
#[must_use]
pub fn format_date(date: NaiveDate, is_end: bool) -> String {
    let (default_month, default_day) = if is_end {
        (12, last_day_of_month(date.year(), date.month()))
    } else {
        (1, 1)
    };
    let omit_month = date.month() == default_month && date.day() == default_day;
    let mut out = format!("{:04}", date.year());
    if !omit_month {
        out.push(':');
        out.push_str(&month_day(date, default_day));
    }
    out
}

/// `Mon.` or `Mon. D`, with the day omitted when it equals `default_day`.
fn month_day(date: NaiveDate, default_day: u32) -> String {
    let month = month_abbreviation(date.month()).unwrap_or_default();
    if date.day() == default_day {
        month.to_string()
    } else {
        format!("{month} {}", date.day())
    }
}

fn enumeration_text(holding: &Holding) -> String {
    let mut out = String::new();
    let start_volume = holding.start_volume();
    let start_issue = holding.start_issue();
    if !start_volume.is_empty() {
        out.push_str(VOLUME_CAPTION);
        out.push_str(start_volume);
    }
    if !start_volume.is_empty() && !start_issue.is_empty() {
        out.push(':');
    }
    if !start_issue.is_empty() {
        out.push_str(ISSUE_CAPTION);
        out.push_str(start_issue);
    }

    match (holding.end_volume(), holding.end_issue()) {
        ("", "") => {},
        (volume, "") => {
            out.push_str(&format!("-{volume}"));
        },
        ("", issue) => {
            out.push_str(&format!("-{issue}"));
        },
        (volume, issue) => {
            out.push_str(&format!("-{VOLUME_CAPTION}{volume}:{ISSUE_CAPTION}{issue}"));
        },
    }
    out
}

fn chronology_text(holding: &Holding) -> Option<String> {
    let start = holding.start_date()?;
    let start_text = format_date(start, false);
    let Some(end) = holding.end_date() else {
        return Some(start_text);
    };

    // The start fragment alone already implies this end
    if parse_date(&start_text, true).ok() == Some(end) {
        return Some(start_text);
    }

    if start.year() == end.year() {
        let start_text = format!("{:04}:{}", start.year(), month_day(start, 1));
        let end_text = month_day(end, last_day_of_month(end.year(), end.month()));
        return Some(format!("{start_text}-{end_text}"));
    }

    Some(format!("{start_text}-{}", format_date(end, true)))
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_text(self))
    }
}
