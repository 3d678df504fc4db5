#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # marcholdings: Z39.71 textual holdings
//!
//! Parse NISO Z39.71 summary holdings statements into structured
//! [`Holding`] values, and render holdings back to canonical text.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use marcholdings::{parse_holdings, Holding};
//!
//! let holdings = parse_holdings("v.1:no.3,5-6(1982:May/June,Sept./Oct.-Nov./Dec.)")?;
//! assert_eq!(holdings.len(), 2);
//! assert_eq!(holdings[0].end_date(), NaiveDate::from_ymd_opt(1982, 6, 30));
//! assert_eq!(holdings[1].start_date(), NaiveDate::from_ymd_opt(1982, 9, 1));
//!
//! let holding = Holding::from_text("v.1:no.2(2016:Feb.)-")?;
//! assert!(holding.is_open());
//! assert_eq!(holding.to_string(), "v.1:no.2(2016:Feb.)-");
//! # Ok::<(), marcholdings::HoldingsError>(())
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — Whole-statement parsing (`parse_holdings`, `HoldingsParser`)
//! - [`segmenter`] — Splitting statements with gaps into segments
//! - [`holding`] — The `Holding` value and its construction
//! - [`chronology`] — Date fragment parsing (months, seasons, spans)
//! - [`caption`] — Caption/enumeration splitting
//! - [`serializer`] — Rendering holdings back to text
//! - [`recovery`] — Recovery modes for malformed input
//! - [`error`] — Error types and result type

pub mod caption;
pub mod chronology;
pub mod error;
pub mod holding;
pub mod parser;
pub mod recovery;
pub mod segmenter;
pub mod serializer;

pub use caption::{split_enum, split_whole_enum, SplitCaption};
pub use chronology::{parse_date, Season};
pub use error::{HoldingsError, Result};
pub use holding::{Holding, HoldingBuilder};
pub use parser::{parse_holdings, HoldingsParser};
pub use recovery::{RecoveryContext, RecoveryMode};
pub use segmenter::segment;
pub use serializer::to_text;
