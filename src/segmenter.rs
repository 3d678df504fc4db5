//! Splitting holdings statements into independent segments.
//!
//! A statement may list several gapped holdings separated by `,` or `;`:
//!
//! ```text
//! v.1:no.3,5-6(1982:May/June,Sept./Oct.-Nov./Dec.)
//! ```
//!
//! The enumeration (before the `(`) and the chronology (inside the
//! parentheses) are split separately and then paired positionally:
//!
//! ```text
//! v.1:no.3(1982:May/June)
//! v.5-6(1982:Sept./Oct.-Nov./Dec.)
//! ```
//!
//! Enumeration segments reuse the leading caption (`v.1,3` is `v.1` and
//! `v.3`). Chronology segments that continue a month list under the same
//! year carry the year forward; a segment that starts with a new year does
//! not.

use crate::chronology::starts_with_year;
use crate::error::{HoldingsError, Result};
use crate::recovery::RecoveryContext;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ENUMERATION_DELIMITERS: Regex =
        Regex::new(r"[ .,:;]").expect("enumeration delimiter pattern is valid");
    static ref CHRONOLOGY_DELIMITERS: Regex =
        Regex::new(r"[,:;]").expect("chronology delimiter pattern is valid");
}

/// Marker for an open-ended (still received) holding
const OPEN_MARKER: char = '-';

/// Whether a token separates one holding from the next.
fn is_list_separator(token: &str) -> bool {
    token == "," || token == ";"
}

/// Split `text` on `delimiters`, keeping each delimiter as its own token.
///
/// Content and delimiter tokens alternate, so the result always has an odd
/// length; adjacent delimiters produce an empty content token between them.
fn tokenize<'a>(text: &'a str, delimiters: &Regex) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for delimiter in delimiters.find_iter(text) {
        tokens.push(&text[last..delimiter.start()]);
        tokens.push(delimiter.as_str());
        last = delimiter.end();
    }
    tokens.push(&text[last..]);
    tokens
}

/// Tokenize an enumeration region on ` . , : ;`, keeping delimiters.
///
/// ```
/// use marcholdings::segmenter::tokenize_enumeration;
///
/// assert_eq!(tokenize_enumeration("v.1,3"), vec!["v", ".", "1", ",", "3"]);
/// ```
#[must_use]
pub fn tokenize_enumeration(text: &str) -> Vec<&str> {
    tokenize(text, &ENUMERATION_DELIMITERS)
}

/// Tokenize a chronology region on `, : ;`, keeping delimiters.
#[must_use]
pub fn tokenize_chronology(text: &str) -> Vec<&str> {
    tokenize(text, &CHRONOLOGY_DELIMITERS)
}

/// Position of the chronology scanner within the current segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Nothing accumulated yet
    #[default]
    Idle,
    /// Inside a year (or year range) with no month group
    InYear,
    /// Past a `:`, inside a month group under a year
    InYearMonth,
}

/// Advance the chronology scanner over one non-separator token.
#[must_use]
pub fn transition(state: ScanState, token: &str) -> ScanState {
    match (state, token) {
        (_, ":") => ScanState::InYearMonth,
        (ScanState::Idle, "") => ScanState::Idle,
        (ScanState::Idle, _) => ScanState::InYear,
        (state, _) => state,
    }
}

/// Decide how the next chronology segment starts once one is closed.
///
/// A closed segment inside a month group hands its year prefix (up to and
/// including the first `:`) to the next segment, unless the next segment
/// opens a year of its own. Every other state starts afresh.
///
/// ```
/// use marcholdings::segmenter::{carry_forward, ScanState};
///
/// let (state, seed) = carry_forward(ScanState::InYearMonth, "1982:May/June", Some("Sept."));
/// assert_eq!(state, ScanState::InYearMonth);
/// assert_eq!(seed, "1982:");
///
/// let (state, seed) = carry_forward(ScanState::InYearMonth, "2001:Jan.", Some("2002"));
/// assert_eq!(state, ScanState::Idle);
/// assert!(seed.is_empty());
/// ```
#[must_use]
pub fn carry_forward(state: ScanState, closed: &str, next: Option<&str>) -> (ScanState, String) {
    let opens_new_year = next.is_some_and(|token| {
        starts_with_year(token) || (!token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
    });
    if state != ScanState::InYearMonth || opens_new_year {
        return (ScanState::Idle, String::new());
    }
    match closed.split_once(':') {
        Some((year, _)) => (ScanState::InYearMonth, format!("{year}:")),
        None => (ScanState::Idle, String::new()),
    }
}

/// Split an enumeration region into one entry per listed holding.
fn segment_enumeration(region: &str) -> Vec<String> {
    let tokens = tokenize_enumeration(region);

    // The leading caption and its delimiter repeat across the list
    let (prefix, rest) = match tokens.as_slice() {
        [caption, delimiter, rest @ ..] if !is_list_separator(delimiter) => {
            (format!("{caption}{delimiter}"), rest)
        },
        all => (String::new(), all),
    };

    let mut segments = Vec::new();
    let mut accum = prefix.clone();
    let mut index = 0;
    while index < rest.len() {
        accum.push_str(rest[index]);
        if rest.get(index + 1).map_or(true, |next| is_list_separator(next)) {
            segments.push(std::mem::replace(&mut accum, prefix.clone()));
            index += 1;
        }
        index += 1;
    }
    segments
}

/// Split a chronology region into one entry per listed holding.
fn segment_chronology(region: &str) -> Vec<String> {
    let tokens = tokenize_chronology(region);

    let mut segments = Vec::new();
    let mut state = ScanState::Idle;
    let mut accum = String::new();
    let mut index = 0;
    while index < tokens.len() {
        let token = tokens[index];
        accum.push_str(token);
        state = transition(state, token);
        if tokens.get(index + 1).map_or(true, |next| is_list_separator(next)) {
            let (next_state, seed) = carry_forward(state, &accum, tokens.get(index + 2).copied());
            if !seed.is_empty() {
                tracing::trace!(year = %seed, "carrying year into next chronology segment");
            }
            segments.push(std::mem::replace(&mut accum, seed));
            state = next_state;
            index += 1;
        }
        index += 1;
    }
    segments
}

/// Enumeration and chronology regions of a statement body.
fn split_regions(body: &str) -> (&str, &str) {
    match body.split_once('(') {
        Some((enumeration, rest)) => {
            let chronology = rest.split_once(')').map_or(rest, |(inner, _)| inner);
            (enumeration, chronology)
        },
        None if starts_with_year(body) => ("", body),
        None => (body, ""),
    }
}

/// Pair enumeration and chronology segments positionally.
fn pair_segments(
    enumerations: Vec<String>,
    chronologies: Vec<String>,
    statement: &str,
    context: &mut RecoveryContext,
) -> Result<Vec<String>> {
    if enumerations.len() != chronologies.len() {
        context.recover_structure(
            HoldingsError::MalformedStatement(format!(
                "{} enumeration segment(s) but {} chronology segment(s)",
                enumerations.len(),
                chronologies.len()
            )),
            &format!("statement {statement:?}"),
        )?;
    }

    let paired = enumerations.len().min(chronologies.len());
    let mut segments: Vec<String> = enumerations
        .iter()
        .zip(&chronologies)
        .map(|(enumeration, chronology)| format!("{enumeration}({chronology})"))
        .collect();
    segments.extend(enumerations.into_iter().skip(paired));
    segments.extend(chronologies.into_iter().skip(paired));
    Ok(segments)
}

/// Split a holdings statement into self-contained segments.
///
/// # Examples
///
/// ```
/// use marcholdings::segmenter::segment;
///
/// assert_eq!(
///     segment("v.1,3(1999,2001)").unwrap(),
///     vec!["v.1(1999)", "v.3(2001)"]
/// );
/// assert_eq!(segment("v.1(2010)-").unwrap(), vec!["v.1(2010)-"]);
/// ```
///
/// # Errors
///
/// Returns [`HoldingsError::MalformedStatement`] if the enumeration and
/// chronology list different numbers of holdings.
pub fn segment(statement: &str) -> Result<Vec<String>> {
    segment_with_context(statement, &mut RecoveryContext::default())
}

/// Split a holdings statement, recovering according to `context.mode`.
///
/// # Errors
///
/// Returns [`HoldingsError::MalformedStatement`] on mismatched enumeration and
/// chronology lists unless the context is permissive.
pub fn segment_with_context(statement: &str, context: &mut RecoveryContext) -> Result<Vec<String>> {
    let (body, holding_open) = match statement.strip_suffix(OPEN_MARKER) {
        Some(body) => (body, true),
        None => (statement, false),
    };
    let (enumeration, chronology) = split_regions(body);

    let enumerations = if enumeration.is_empty() {
        Vec::new()
    } else {
        segment_enumeration(enumeration)
    };
    let chronologies = if chronology.is_empty() {
        Vec::new()
    } else {
        segment_chronology(chronology)
    };

    let mut segments = match (enumerations.is_empty(), chronologies.is_empty()) {
        (false, false) => pair_segments(enumerations, chronologies, statement, context)?,
        (true, _) => chronologies,
        (false, true) => enumerations,
    };

    if holding_open {
        if let Some(last) = segments.last_mut() {
            last.push(OPEN_MARKER);
        }
    }

    for segment in &segments {
        tracing::trace!(%statement, %segment, "segmented holding");
    }
    Ok(segments)
}
