//! Error types for filter construction

use thiserror::Error;

/// Filter construction and mutation errors
///
/// Evaluation itself never fails: non-comparable operands, missing
/// properties, and declined function evaluation all degrade to defined
/// boolean or constant outcomes. Errors exist only for construction-time
/// shape violations and rejected mutation.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Malformed filter input, reported by a construction collaborator
    /// (e.g. a parsing front end) with an optional underlying cause
    #[error("malformed filter: {message}")]
    Malformed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Logic connective constructed or re-populated with no children
    #[error("logic filter requires at least one child")]
    EmptyChildren,

    /// Mutation of a value that is fixed by construction
    #[error("unsupported mutation: {0}")]
    UnsupportedMutation(&'static str),
}

impl FilterError {
    /// Malformed-input error with no underlying cause
    pub fn malformed(message: impl Into<String>) -> Self {
        FilterError::Malformed {
            message: message.into(),
            source: None,
        }
    }

    /// Malformed-input error wrapping the failure that produced it
    pub fn malformed_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FilterError::Malformed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;
