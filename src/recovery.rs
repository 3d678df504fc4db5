//! Recovery strategies for malformed holdings statements.
//!
//! By default a statement that fails anywhere fails as a whole. The lenient
//! modes keep going instead and record what they had to skip or re-pair in a
//! [`RecoveryContext`], so nothing is discarded without a trace.

use crate::error::{HoldingsError, Result};

/// Strategy for handling malformed statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryMode {
    /// Strict mode: any malformed segment fails the whole statement (default)
    #[default]
    Strict,
    /// Lenient mode: skip segments that fail to parse and keep the rest
    Lenient,
    /// Permissive mode: as lenient, and also pair mismatched
    /// enumeration/chronology lists as far as they go
    Permissive,
}

/// Recovery context for a single statement
#[derive(Debug)]
pub struct RecoveryContext {
    /// Current recovery mode
    pub mode: RecoveryMode,
    /// Whether warnings/recoveries were needed
    pub has_errors: bool,
    /// List of recovery messages
    pub recovery_messages: Vec<String>,
}

impl Default for RecoveryContext {
    fn default() -> Self {
        RecoveryContext::new(RecoveryMode::Strict)
    }
}

impl RecoveryContext {
    /// Create a new recovery context with the given mode
    #[must_use]
    pub fn new(mode: RecoveryMode) -> Self {
        RecoveryContext {
            mode,
            has_errors: false,
            recovery_messages: Vec::new(),
        }
    }

    /// Record a recovery message
    pub(crate) fn add_message(&mut self, message: String) {
        tracing::warn!(mode = ?self.mode, "{message}");
        self.has_errors = true;
        self.recovery_messages.push(message);
    }

    /// Try to recover from a segment error based on the recovery mode
    ///
    /// # Errors
    ///
    /// Returns the error in strict mode, otherwise records it and returns `Ok(None)`.
    pub fn recover<T>(&mut self, error: HoldingsError, context: &str) -> Result<Option<T>> {
        match self.mode {
            RecoveryMode::Strict => Err(error),
            RecoveryMode::Lenient | RecoveryMode::Permissive => {
                self.add_message(format!("{context}: {error}"));
                Ok(None)
            },
        }
    }

    /// Try to recover from a structural error (mismatched segment lists).
    ///
    /// Only permissive mode tolerates these.
    ///
    /// # Errors
    ///
    /// Returns the error unless the mode is [`RecoveryMode::Permissive`].
    pub fn recover_structure(&mut self, error: HoldingsError, context: &str) -> Result<()> {
        match self.mode {
            RecoveryMode::Permissive => {
                self.add_message(format!("{context}: {error}"));
                Ok(())
            },
            RecoveryMode::Strict | RecoveryMode::Lenient => Err(error),
        }
    }
}
