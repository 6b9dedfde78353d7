//! Error types for the canonicalization engine.
//!
//! The engine performs no I/O, so there are only two failure classes:
//! configuration mistakes made by the caller (bad patterns, colliding
//! replacement maps) and inputs outside an operation's precondition.
//! "No match" is never an error.

use thiserror::Error;

/// Result type alias for canonicalization operations.
pub type CanonResult<T> = Result<T, CanonError>;

/// Error type for all canonicalization operations.
#[derive(Debug, Error)]
pub enum CanonError {
    /// Malformed or colliding match specification or replacement map.
    ///
    /// Deterministic and caller-fixable, so never worth retrying.
    #[error("Configuration error for {keys}: {reason}")]
    Configuration { keys: String, reason: String },

    /// Operation called outside its defined precondition.
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// A pipeline stage failed; the run was aborted at that stage.
    #[error("Pipeline aborted at rule '{rule}': {source}")]
    Pipeline {
        rule: String,
        #[source]
        source: Box<CanonError>,
    },
}

impl CanonError {
    /// Builds a configuration error for the given key set or pattern.
    pub fn configuration(keys: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            keys: keys.into(),
            reason: reason.into(),
        }
    }

    /// Builds an invalid input error for the given parameter.
    pub fn invalid_input(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for errors caused by caller configuration, including
    /// configuration errors wrapped by a pipeline stage.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::Configuration { .. } => true,
            Self::Pipeline { source, .. } => source.is_configuration(),
            Self::InvalidInput { .. } => false,
        }
    }
}

impl From<fancy_regex::Error> for CanonError {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Configuration {
            keys: "<unknown>".to_string(),
            reason: err.to_string(),
        }
    }
}
