//! Chronology (date) parsing for Z39.71 holdings.
//!
//! A chronology fragment names a year, optionally narrowed by a month or
//! season and a day:
//!
//! - `YEAR[:MONTH][ DAY]` or `YEAR MONTH[ DAY]`
//! - `YEAR` may be a multi-year span `Y1/Y2` (e.g. `1840/1842`)
//! - `MONTH` may be a span `M1/M2`, an abbreviation from
//!   [`MONTH_ABBREVIATIONS`], or a season name
//!
//! Every fragment resolves to a concrete [`NaiveDate`]. Whether the fragment
//! opens or closes a range decides the defaults: a start falls on the first
//! day of January (or of the named month), an end on the last day of
//! December (or of the named month).

use crate::error::{HoldingsError, Result};
use chrono::NaiveDate;

/// Month abbreviations in calendar order, as written in Z39.71 statements.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "June", "July", "Aug.", "Sept.", "Oct.", "Nov.", "Dec.",
];

/// Days in each month of a common year (index 0 unused, months are 1-indexed)
const DAYS_IN_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const JANUARY: u32 = 1;
const FEBRUARY: u32 = 2;
const DECEMBER: u32 = 12;

/// A named quarter-year used in place of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// March through June
    Spring,
    /// June through September
    Summer,
    /// September through December (also written `autumn`)
    Fall,
    /// December through March
    Winter,
}

impl Season {
    /// Look up a season by name, ignoring case.
    ///
    /// ```
    /// use marcholdings::chronology::Season;
    ///
    /// assert_eq!(Season::from_name("Autumn"), Some(Season::Fall));
    /// assert_eq!(Season::from_name("Mar."), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    /// The (start month, end month) pair this season spans.
    #[must_use]
    pub const fn months(self) -> (u32, u32) {
        match self {
            Season::Spring => (3, 6),
            Season::Summer => (6, 9),
            Season::Fall => (9, 12),
            Season::Winter => (12, 3),
        }
    }

    /// Whether the season ends in the calendar year after it starts.
    #[must_use]
    pub const fn crosses_year(self) -> bool {
        let (start, end) = self.months();
        end < start
    }
}

/// Convert a season name to the month that starts or ends it.
///
/// # Errors
///
/// Returns [`HoldingsError::InvalidMonthOrSeason`] if the name is not a season.
pub fn season_to_month(season_text: &str, is_end: bool) -> Result<u32> {
    let season = Season::from_name(season_text)
        .ok_or_else(|| HoldingsError::InvalidMonthOrSeason(season_text.to_string()))?;
    let (start, end) = season.months();
    Ok(if is_end { end } else { start })
}

/// Month number (1-12) for an exact abbreviation such as `Sept.`.
#[must_use]
pub fn month_from_abbreviation(text: &str) -> Option<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == text)
        .and_then(|index| u32::try_from(index + 1).ok())
}

/// Abbreviation for a month number (1-12).
#[must_use]
pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_ABBREVIATIONS.get(index).copied()
}

/// Whether `year` is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Last calendar day of the given month, accounting for leap years.
///
/// Returns 0 for a month outside 1-12.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    if month == FEBRUARY && is_leap_year(year) {
        return 29;
    }
    usize::try_from(month)
        .ok()
        .and_then(|m| DAYS_IN_MONTH.get(m))
        .copied()
        .unwrap_or(0)
}

/// Whether `text` opens with a four-digit year, i.e. is chronology-first.
#[must_use]
pub fn starts_with_year(text: &str) -> bool {
    text.len() >= 4 && text.as_bytes()[..4].iter().all(u8::is_ascii_digit)
}

/// Pick one side of a `A/B` span: `A` for a range start, `B` for its end.
fn pick_span(text: &str, is_end: bool) -> &str {
    if !text.contains('/') {
        return text;
    }
    text.split('/').nth(usize::from(is_end)).unwrap_or(text)
}

/// Resolve a month or season token to a month number and a year offset.
///
/// The offset is 1 only for the end of a season that finishes in the
/// following year (winter), and only when the year was not already given as
/// a `Y1/Y2` span naming that following year.
fn resolve_month(token: &str, is_end: bool, year_is_span: bool) -> Result<(u32, i32)> {
    if let Some(month) = month_from_abbreviation(token) {
        return Ok((month, 0));
    }
    let month = season_to_month(token, is_end)?;
    let rolls_over = is_end
        && !year_is_span
        && Season::from_name(token).is_some_and(Season::crosses_year);
    Ok((month, i32::from(rolls_over)))
}

/// Parse one chronology fragment into a calendar date.
///
/// `is_end` selects the end-of-range reading: the second half of `Y1/Y2` and
/// `M1/M2` spans, December when no month is given, and the last day of the
/// month when no day is given.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use marcholdings::chronology::parse_date;
///
/// assert_eq!(
///     parse_date("2002:Mar. 2", false).unwrap(),
///     NaiveDate::from_ymd_opt(2002, 3, 2).unwrap()
/// );
/// assert_eq!(
///     parse_date("1992/1996", true).unwrap(),
///     NaiveDate::from_ymd_opt(1996, 12, 31).unwrap()
/// );
/// ```
///
/// # Errors
///
/// Returns [`HoldingsError::InvalidMonthOrSeason`] for an unknown month or
/// season, [`HoldingsError::InvalidYear`] / [`HoldingsError::InvalidDay`] for
/// non-numeric components, and [`HoldingsError::InvalidDate`] when the
/// components do not form a real date.
pub fn parse_date(fragment: &str, is_end: bool) -> Result<NaiveDate> {
    let parts: Vec<&str> = fragment.split([':', ' ']).collect();

    let year_text = pick_span(parts[0], is_end);
    let mut year: i32 = year_text
        .parse()
        .map_err(|_| HoldingsError::InvalidYear(year_text.to_string()))?;

    let month = match parts.get(1) {
        Some(month_text) => {
            let (month, year_offset) = resolve_month(
                pick_span(month_text, is_end),
                is_end,
                parts[0].contains('/'),
            )?;
            year = year
                .checked_add(year_offset)
                .ok_or_else(|| HoldingsError::InvalidYear(year_text.to_string()))?;
            month
        },
        None if is_end => DECEMBER,
        None => JANUARY,
    };

    let day = if parts.len() == 3 {
        parts[2]
            .parse()
            .map_err(|_| HoldingsError::InvalidDay(parts[2].to_string()))?
    } else if is_end {
        last_day_of_month(year, month)
    } else {
        1
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(HoldingsError::InvalidDate { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_year_only_defaults() {
        assert_eq!(parse_date("2010", false).unwrap(), date(2010, 1, 1));
        assert_eq!(parse_date("2010", true).unwrap(), date(2010, 12, 31));
    }

    #[test]
    fn test_month_defaults() {
        assert_eq!(parse_date("1990:Feb.", false).unwrap(), date(1990, 2, 1));
        assert_eq!(parse_date("1990:Apr.", true).unwrap(), date(1990, 4, 30));
        assert_eq!(parse_date("2006:May", true).unwrap(), date(2006, 5, 31));
    }

    #[test]
    fn test_leap_year_february() {
        assert_eq!(parse_date("2000:Feb.", true).unwrap(), date(2000, 2, 29));
        assert_eq!(parse_date("1990:Feb.", true).unwrap(), date(1990, 2, 28));
        assert_eq!(parse_date("1900:Feb.", true).unwrap(), date(1900, 2, 28));
        assert_eq!(parse_date("2004:Feb.", true).unwrap(), date(2004, 2, 29));
    }

    #[test]
    fn test_explicit_day() {
        assert_eq!(parse_date("2002:Mar. 2", false).unwrap(), date(2002, 3, 2));
        assert_eq!(parse_date("2006:May 6", true).unwrap(), date(2006, 5, 6));
        assert_eq!(parse_date("2006 May 6", true).unwrap(), date(2006, 5, 6));
    }

    #[test]
    fn test_space_separated_month() {
        assert_eq!(parse_date("2002 Mar.", false).unwrap(), date(2002, 3, 1));
    }

    #[test]
    fn test_multi_year_span() {
        assert_eq!(parse_date("1840/1842", false).unwrap(), date(1840, 1, 1));
        assert_eq!(parse_date("1840/1842", true).unwrap(), date(1842, 12, 31));
    }

    #[test]
    fn test_month_span() {
        assert_eq!(parse_date("1982:May/June", false).unwrap(), date(1982, 5, 1));
        assert_eq!(parse_date("1982:May/June", true).unwrap(), date(1982, 6, 30));
        assert_eq!(
            parse_date("1982:Nov./Dec.", true).unwrap(),
            date(1982, 12, 31)
        );
    }

    #[test]
    fn test_seasons() {
        assert_eq!(parse_date("1990:spring", false).unwrap(), date(1990, 3, 1));
        assert_eq!(parse_date("1990:Summer", true).unwrap(), date(1990, 9, 30));
        assert_eq!(parse_date("1990:fall", false).unwrap(), date(1990, 9, 1));
        assert_eq!(parse_date("1990:AUTUMN", true).unwrap(), date(1990, 12, 31));
        assert_eq!(parse_date("1990:winter", false).unwrap(), date(1990, 12, 1));
    }

    #[test]
    fn test_winter_end_rolls_into_next_year() {
        assert_eq!(parse_date("1990:winter", true).unwrap(), date(1991, 3, 31));
    }

    #[test]
    fn test_winter_end_with_year_span_uses_second_year() {
        assert_eq!(parse_date("1990/1991:winter", true).unwrap(), date(1991, 3, 31));
        assert_eq!(parse_date("1990/1991:winter", false).unwrap(), date(1990, 12, 1));
    }

    #[test]
    fn test_season_to_month_table() {
        assert_eq!(season_to_month("spring", false).unwrap(), 3);
        assert_eq!(season_to_month("spring", true).unwrap(), 6);
        assert_eq!(season_to_month("summer", false).unwrap(), 6);
        assert_eq!(season_to_month("summer", true).unwrap(), 9);
        assert_eq!(season_to_month("fall", false).unwrap(), 9);
        assert_eq!(season_to_month("autumn", true).unwrap(), 12);
        assert_eq!(season_to_month("Winter", false).unwrap(), 12);
        assert_eq!(season_to_month("winter", true).unwrap(), 3);
    }

    #[test]
    fn test_bad_month() {
        let err = parse_date("1990:Smarch", false).unwrap_err();
        assert_eq!(err, HoldingsError::InvalidMonthOrSeason("Smarch".to_string()));

        // Abbreviations are matched exactly
        assert!(matches!(
            parse_date("1990:jan.", false),
            Err(HoldingsError::InvalidMonthOrSeason(_))
        ));
    }

    #[test]
    fn test_bad_year_and_day() {
        assert_eq!(
            parse_date("", false).unwrap_err(),
            HoldingsError::InvalidYear(String::new())
        );
        assert!(matches!(
            parse_date("1990:Mar. x", false),
            Err(HoldingsError::InvalidDay(_))
        ));
        assert_eq!(
            parse_date("1990:Feb. 30", false).unwrap_err(),
            HoldingsError::InvalidDate {
                year: 1990,
                month: 2,
                day: 30
            }
        );
    }

    #[test]
    fn test_month_abbreviation_lookup() {
        assert_eq!(month_from_abbreviation("Sept."), Some(9));
        assert_eq!(month_from_abbreviation("Sep."), None);
        assert_eq!(month_abbreviation(6), Some("June"));
        assert_eq!(month_abbreviation(0), None);
        assert_eq!(month_abbreviation(13), None);
    }

    #[test]
    fn test_starts_with_year() {
        assert!(starts_with_year("1999"));
        assert!(starts_with_year("1992/1996-"));
        assert!(!starts_with_year("199"));
        assert!(!starts_with_year("v.1999"));
        assert!(!starts_with_year(""));
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2023, 1), 31);
        assert_eq!(last_day_of_month(2023, 4), 30);
        assert_eq!(last_day_of_month(2024, 2), 29);
        assert_eq!(last_day_of_month(2023, 2), 28);
        assert_eq!(last_day_of_month(2023, 13), 0);
    }
}
