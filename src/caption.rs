//! Caption splitting for enumeration tokens.
//!
//! An enumeration token such as `v.1`, `no.3` or `1st ed.` pairs a caption
//! (`v.`, `no.`, `ed.`) with a bare enumeration value (`1`, `3`, `1`). The
//! caption usually precedes the value, but ordinal editions put it after.

use serde::{Deserialize, Serialize};

/// Ordinal suffixes stripped from a value that precedes its caption.
const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

/// An enumeration token split into its caption and bare value.
///
/// # Examples
///
/// ```
/// use marcholdings::caption::split_enum;
///
/// let split = split_enum("no.3");
/// assert_eq!(split.caption, "no.");
/// assert_eq!(split.enumeration, "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SplitCaption {
    /// Caption label, including its trailing `.` when it has one
    pub caption: String,
    /// Bare enumeration value
    pub enumeration: String,
}

impl SplitCaption {
    fn new(caption: &str, enumeration: &str) -> Self {
        SplitCaption {
            caption: caption.to_string(),
            enumeration: enumeration.to_string(),
        }
    }
}

/// Split a single enumeration token into caption and enumeration.
///
/// Rules, in priority order:
/// 1. A `.` strictly inside the token splits it; the caption keeps the `.`.
/// 2. Otherwise a space splits it. When the first half starts with a digit
///    the halves are swapped and any ordinal suffix is trimmed from the value.
/// 3. Otherwise the whole token is the enumeration.
///
/// # Examples
///
/// ```
/// use marcholdings::caption::split_enum;
///
/// let split = split_enum("1st ed.");
/// assert_eq!(split.caption, "ed.");
/// assert_eq!(split.enumeration, "1");
/// ```
#[must_use]
pub fn split_enum(token: &str) -> SplitCaption {
    let inner_dot = token
        .char_indices()
        .find(|&(i, c)| c == '.' && i > 0 && i + 1 < token.len());
    if let Some((dot, _)) = inner_dot {
        return SplitCaption::new(&token[..=dot], &token[dot + 1..]);
    }

    if let Some((first, second)) = token.split_once(' ') {
        if first.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return SplitCaption::new(second, trim_ordinal(first));
        }
        return SplitCaption::new(first, second);
    }

    SplitCaption::new("", token)
}

/// Split a whole enumeration into its raw volume and issue values.
///
/// The text is partitioned on the first `:`; each side is passed through
/// [`split_enum`] and only the bare enumeration is kept.
///
/// ```
/// use marcholdings::caption::split_whole_enum;
///
/// assert_eq!(
///     split_whole_enum("v.2:no.3"),
///     ("2".to_string(), "3".to_string())
/// );
/// ```
#[must_use]
pub fn split_whole_enum(text: &str) -> (String, String) {
    let (volume, issue) = text.split_once(':').unwrap_or((text, ""));
    (
        split_enum(volume).enumeration,
        split_enum(issue).enumeration,
    )
}

/// Trim an ordinal suffix (`st`, `nd`, `rd`, `th`) off a number.
#[must_use]
pub fn trim_ordinal(ordinal: &str) -> &str {
    ORDINAL_SUFFIXES
        .iter()
        .find_map(|suffix| ordinal.strip_suffix(suffix))
        .unwrap_or(ordinal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_volume() {
        let split = split_enum("v.1");
        assert_eq!(split.caption, "v.");
        assert_eq!(split.enumeration, "1");
    }

    #[test]
    fn test_space_separated_caption() {
        let split = split_enum("issue 1");
        assert_eq!(split.caption, "issue");
        assert_eq!(split.enumeration, "1");
    }

    #[test]
    fn test_alphanumeric_enumeration() {
        let split = split_enum("v.1A");
        assert_eq!(split.caption, "v.");
        assert_eq!(split.enumeration, "1A");
    }

    #[test]
    fn test_caption_after_ordinal() {
        let split = split_enum("1st ed.");
        assert_eq!(split.caption, "ed.");
        assert_eq!(split.enumeration, "1");

        let split = split_enum("22nd ed.");
        assert_eq!(split.enumeration, "22");
        assert_eq!(split_enum("3rd ser.").enumeration, "3");
        assert_eq!(split_enum("4th ed.").enumeration, "4");
    }

    #[test]
    fn test_edge_dots_do_not_split() {
        // A trailing dot is not "inside" the token
        let split = split_enum("ed.");
        assert_eq!(split.caption, "");
        assert_eq!(split.enumeration, "ed.");

        let split = split_enum(".5");
        assert_eq!(split.caption, "");
        assert_eq!(split.enumeration, ".5");
    }

    #[test]
    fn test_bare_value() {
        let split = split_enum("12");
        assert_eq!(split.caption, "");
        assert_eq!(split.enumeration, "12");

        assert_eq!(split_enum(""), SplitCaption::default());
    }

    #[test]
    fn test_split_whole_enum() {
        assert_eq!(
            split_whole_enum("v.1:no.2"),
            ("1".to_string(), "2".to_string())
        );
        assert_eq!(split_whole_enum("v.6"), ("6".to_string(), String::new()));
        assert_eq!(split_whole_enum("3"), ("3".to_string(), String::new()));
        assert_eq!(split_whole_enum(""), (String::new(), String::new()));
    }

    #[test]
    fn test_trim_ordinal() {
        assert_eq!(trim_ordinal("1st"), "1");
        assert_eq!(trim_ordinal("12th"), "12");
        assert_eq!(trim_ordinal("12"), "12");
    }
}
