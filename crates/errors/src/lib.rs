#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for the gantry application server
//!
//! This crate provides fine-grained error types organized by domain.
//! All error types implement Clone where possible for easier handling.

use std::borrow::Cow;

use thiserror::Error;

pub mod bootstrap;

// Re-export all error types at the root
pub use bootstrap::BootstrapError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("bootstrap error: {0}")]
    Bootstrap(#[from] BootstrapError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an internal error with a message
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Minimal interface for rendering user-facing error information without
/// requiring heavyweight envelopes.
pub trait UserFacingError {
    /// Short message suitable for CLI output.
    fn user_message(&self) -> Cow<'_, str>;

    /// Optional remediation hint.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Error::Bootstrap(err) => err.user_message(),
            Error::Internal(_) => Cow::Owned(self.to_string()),
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::Bootstrap(err) => err.user_hint(),
            Error::Internal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_errors_carry_hints_through_the_top_error() {
        let err = Error::from(BootstrapError::HomeDirUnavailable);

        assert_eq!(
            err.user_message(),
            "home directory could not be determined"
        );
        assert!(err.user_hint().unwrap().contains("HOME"));
    }

    #[test]
    fn internal_errors_have_no_hint() {
        let err = Error::internal("bad state");

        assert_eq!(err.user_message(), "internal error: bad state");
        assert_eq!(err.user_hint(), None);
    }
}
