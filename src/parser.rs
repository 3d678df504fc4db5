//! Parsing whole holdings statements.
//!
//! [`HoldingsParser`] segments a statement and builds one [`Holding`] per
//! segment, in input order. The [`RecoveryMode`] decides what happens when a
//! segment is malformed.
//!
//! # Examples
//!
//! ```
//! use marcholdings::{HoldingsParser, RecoveryMode};
//!
//! let parser = HoldingsParser::new().with_recovery_mode(RecoveryMode::Lenient);
//! let (holdings, context) = parser.parse_with_context("v.1,2(1999:Smarch,2001)").unwrap();
//!
//! assert_eq!(holdings.len(), 1);
//! assert_eq!(holdings[0].start_volume(), "2");
//! assert!(context.has_errors);
//! ```

use crate::error::Result;
use crate::holding::Holding;
use crate::recovery::{RecoveryContext, RecoveryMode};
use crate::segmenter::segment_with_context;

/// Parser for Z39.71 textual holdings statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldingsParser {
    recovery_mode: RecoveryMode,
}

impl HoldingsParser {
    /// Create a parser in [`RecoveryMode::Strict`].
    #[must_use]
    pub fn new() -> Self {
        HoldingsParser {
            recovery_mode: RecoveryMode::Strict,
        }
    }

    /// Set the recovery mode for handling malformed statements.
    ///
    /// ```
    /// use marcholdings::{HoldingsParser, RecoveryMode};
    ///
    /// let parser = HoldingsParser::new().with_recovery_mode(RecoveryMode::Permissive);
    /// assert_eq!(parser.recovery_mode(), RecoveryMode::Permissive);
    /// ```
    #[must_use]
    pub fn with_recovery_mode(mut self, mode: RecoveryMode) -> Self {
        self.recovery_mode = mode;
        self
    }

    /// The configured recovery mode
    #[must_use]
    pub fn recovery_mode(&self) -> RecoveryMode {
        self.recovery_mode
    }

    /// Parse a statement into holdings, discarding recovery messages.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first error from any segment. The lenient
    /// modes only fail on errors they do not recover from.
    pub fn parse(&self, statement: &str) -> Result<Vec<Holding>> {
        self.parse_with_context(statement)
            .map(|(holdings, _)| holdings)
    }

    /// Parse a statement into holdings, returning what recovery had to do.
    ///
    /// # Errors
    ///
    /// See [`HoldingsParser::parse`].
    pub fn parse_with_context(&self, statement: &str) -> Result<(Vec<Holding>, RecoveryContext)> {
        let mut context = RecoveryContext::new(self.recovery_mode);
        let segments = segment_with_context(statement, &mut context)?;

        let mut holdings = Vec::with_capacity(segments.len());
        for segment in &segments {
            match Holding::from_text(segment) {
                Ok(holding) => holdings.push(holding),
                Err(error) => {
                    tracing::debug!(%segment, %error, "segment failed to parse");
                    context.recover::<Holding>(error, &format!("segment {segment:?}"))?;
                },
            }
        }
        Ok((holdings, context))
    }
}

/// Parse a holdings statement, possibly with gaps, into holdings.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use marcholdings::parse_holdings;
///
/// let holdings = parse_holdings("v.1,3(1999,2001)").unwrap();
/// assert_eq!(holdings.len(), 2);
/// assert_eq!(holdings[1].start_volume(), "3");
/// assert_eq!(holdings[1].end_date(), NaiveDate::from_ymd_opt(2001, 12, 31));
/// ```
///
/// # Errors
///
/// Fails as a whole if any segment fails; see [`HoldingsParser`] for
/// lenient alternatives.
pub fn parse_holdings(statement: &str) -> Result<Vec<Holding>> {
    HoldingsParser::new().parse(statement)
}
