//! Structured holdings built from single statement segments.
//!
//! A [`Holding`] describes one contiguous run of a serial: an enumeration
//! range (volume/issue) and a chronology range (dates). Either axis may be
//! missing. Holdings are immutable once built, either from text with
//! [`Holding::from_text`] or field by field with [`HoldingBuilder`].

use crate::caption::split_whole_enum;
use crate::chronology::{parse_date, starts_with_year};
use crate::error::{HoldingsError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of leading characters of a range start (`YYYY:`) shared with a
/// short end fragment such as `Apr.`
const YEAR_PREFIX_LEN: usize = 5;

/// One contiguous holding: enumeration and chronology ranges.
///
/// Enumeration values are raw text; an empty string means the statement
/// had no such component. An open holding (trailing `-`) has no end date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use marcholdings::Holding;
///
/// let holding = Holding::from_text("v.1:no.2-4(1990:Feb.-Apr.)").unwrap();
/// assert_eq!(holding.start_volume(), "1");
/// assert_eq!(holding.start_issue(), "2");
/// assert_eq!(holding.start_date(), NaiveDate::from_ymd_opt(1990, 2, 1));
/// assert_eq!(holding.end_date(), NaiveDate::from_ymd_opt(1990, 4, 30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Holding {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    start_volume: String,
    end_volume: String,
    start_issue: String,
    end_issue: String,
    open: bool,
}

impl Holding {
    /// Create a builder for constructing a holding from explicit values
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::default()
    }

    /// Build a holding from one already-isolated segment.
    ///
    /// No `,`/`;` splitting happens here; use
    /// [`parse_holdings`](crate::parse_holdings) for whole statements.
    ///
    /// # Errors
    ///
    /// Returns an error if a date fragment fails to parse, or
    /// [`HoldingsError::MalformedStatement`] if the start date falls after
    /// the end date.
    pub fn from_text(segment: &str) -> Result<Self> {
        let open = segment.ends_with('-');
        let date_part = date_part(segment);

        let (start_date, end_date) = if open {
            let start = if date_part.is_empty() {
                None
            } else {
                let fragment = date_part.trim_end_matches('-');
                let start = fragment.split_once('-').map_or(fragment, |(start, _)| start);
                Some(parse_date(start, false)?)
            };
            (start, None)
        } else if date_part.is_empty() {
            (None, None)
        } else {
            let (start, end) = date_range(date_part);
            let start_date = parse_date(start, false)?;
            let end_date = parse_date(&end, true)?;
            if start_date > end_date {
                return Err(HoldingsError::MalformedStatement(format!(
                    "range in {segment:?} starts on {start_date} after it ends on {end_date}"
                )));
            }
            (Some(start_date), Some(end_date))
        };

        let body = if open { segment.strip_suffix('-').unwrap_or(segment) } else { segment };
        let enumeration = enum_part(body);
        let (start_enum, end_enum) = enumeration.split_once('-').unwrap_or((enumeration, ""));
        let (start_volume, start_issue) = split_whole_enum(start_enum);
        let (end_volume, end_issue) = split_whole_enum(end_enum);

        let holding = Holding {
            start_date,
            end_date,
            start_volume,
            end_volume,
            start_issue,
            end_issue,
            open,
        };
        tracing::debug!(%segment, ?holding, "built holding");
        Ok(holding)
    }

    /// First date held, if the holding has a chronology
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Last date held; `None` for open holdings and enumeration-only holdings
    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// First volume held (empty if none)
    #[must_use]
    pub fn start_volume(&self) -> &str {
        &self.start_volume
    }

    /// Last volume held (empty if none)
    #[must_use]
    pub fn end_volume(&self) -> &str {
        &self.end_volume
    }

    /// First issue held (empty if none)
    #[must_use]
    pub fn start_issue(&self) -> &str {
        &self.start_issue
    }

    /// Last issue held (empty if none)
    #[must_use]
    pub fn end_issue(&self) -> &str {
        &self.end_issue
    }

    /// Whether the holding is still being received (trailing `-`)
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether any enumeration component is present
    #[must_use]
    pub fn has_enumeration(&self) -> bool {
        !(self.start_volume.is_empty()
            && self.start_issue.is_empty()
            && self.end_volume.is_empty()
            && self.end_issue.is_empty())
    }
}

impl FromStr for Holding {
    type Err = HoldingsError;

    fn from_str(s: &str) -> Result<Self> {
        Holding::from_text(s)
    }
}

/// Chronology text of a segment: inside the first parentheses, or the
/// whole segment when it starts with a year.
fn date_part(segment: &str) -> &str {
    match segment.split_once('(') {
        Some((_, rest)) => rest.split_once(')').map_or(rest, |(inner, _)| inner),
        None if starts_with_year(segment) => segment,
        None => "",
    }
}

/// Enumeration text of a segment: everything before the parentheses, or
/// nothing when the segment is chronology only.
fn enum_part(segment: &str) -> &str {
    match segment.split_once('(') {
        Some((enumeration, _)) => enumeration,
        None if starts_with_year(segment) => "",
        None => segment,
    }
}

/// Whether an end fragment is a bare year or `Y1/Y2` year span.
fn is_year_only(fragment: &str) -> bool {
    fragment
        .split('/')
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

/// Split a closed chronology into start and end fragments.
///
/// A short end such as `Apr.` or `May 6` borrows the year prefix of the
/// start so it parses on its own.
fn date_range(date_part: &str) -> (&str, String) {
    let (start, end) = date_part.split_once('-').unwrap_or((date_part, date_part));
    if end.contains(':') || is_year_only(end) {
        return (start, end.to_string());
    }
    let prefix_end = start
        .char_indices()
        .nth(YEAR_PREFIX_LEN)
        .map_or(start.len(), |(index, _)| index);
    (start, format!("{}{end}", &start[..prefix_end]))
}

/// Builder for fluently constructing holdings from explicit values.
///
/// Unless set explicitly, a built holding is open when it has a start date
/// but no end date and no end enumeration.
///
/// ```
/// use chrono::NaiveDate;
/// use marcholdings::Holding;
///
/// let holding = Holding::builder()
///     .start_volume("1")
///     .start_date(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap())
///     .build()
///     .unwrap();
/// assert!(holding.is_open());
/// assert_eq!(holding.to_string(), "v.1(2010)-");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    holding: Holding,
    open: Option<bool>,
}

impl HoldingBuilder {
    /// Set the first date held
    #[must_use]
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.holding.start_date = Some(date);
        self
    }

    /// Set the last date held
    #[must_use]
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.holding.end_date = Some(date);
        self
    }

    /// Set the first volume held
    #[must_use]
    pub fn start_volume(mut self, volume: impl Into<String>) -> Self {
        self.holding.start_volume = volume.into();
        self
    }

    /// Set the last volume held
    #[must_use]
    pub fn end_volume(mut self, volume: impl Into<String>) -> Self {
        self.holding.end_volume = volume.into();
        self
    }

    /// Set the first issue held
    #[must_use]
    pub fn start_issue(mut self, issue: impl Into<String>) -> Self {
        self.holding.start_issue = issue.into();
        self
    }

    /// Set the last issue held
    #[must_use]
    pub fn end_issue(mut self, issue: impl Into<String>) -> Self {
        self.holding.end_issue = issue.into();
        self
    }

    /// Mark the holding as open (still received) or closed
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Build the holding.
    ///
    /// # Errors
    ///
    /// Returns [`HoldingsError::MalformedStatement`] if there is an end date
    /// without a start date, an open holding with an end date, or a start
    /// date after the end date.
    pub fn build(self) -> Result<Holding> {
        let mut holding = self.holding;
        match (holding.start_date, holding.end_date) {
            (None, Some(end)) => {
                return Err(HoldingsError::MalformedStatement(format!(
                    "end date {end} without a start date"
                )));
            },
            (Some(start), Some(end)) if start > end => {
                return Err(HoldingsError::MalformedStatement(format!(
                    "start date {start} after end date {end}"
                )));
            },
            _ => {},
        }

        holding.open = self.open.unwrap_or_else(|| {
            holding.start_date.is_some()
                && holding.end_date.is_none()
                && holding.end_volume.is_empty()
                && holding.end_issue.is_empty()
        });
        if holding.open && holding.end_date.is_some() {
            return Err(HoldingsError::MalformedStatement(
                "open holding cannot have an end date".to_string(),
            ));
        }
        Ok(holding)
    }
}
