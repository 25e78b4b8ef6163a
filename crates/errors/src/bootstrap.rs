//! Bootstrap error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum BootstrapError {
    #[error("home directory could not be determined")]
    HomeDirUnavailable,

    #[error("current directory could not be determined: {message}")]
    CurrentDirUnavailable { message: String },
}

impl UserFacingError for BootstrapError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::HomeDirUnavailable => {
                Some("Set the HOME environment variable for the user running gantry.")
            }
            Self::CurrentDirUnavailable { .. } => {
                Some("Run gantry from a directory that exists and is accessible.")
            }
        }
    }
}
