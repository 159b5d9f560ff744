use std::error::Error;
use thiserror::Error;

pub const MISSING_CREDENTIALS: &str = "Please enter email and password";
pub const EMPTY_ENTRY: &str = "Title and content cannot be empty";

/// Why a screen action did not complete. The screen stays as it was; `Display` is the message
/// shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("User not logged in")]
    AuthRequired,

    #[error("{context}: {message}")]
    Backend { context: &'static str, message: String },
}

impl ScreenError {
    pub(crate) fn backend(context: &'static str, error: &(dyn Error + 'static)) -> Self {
        tracing::warn!(error, context, "screen action failed");
        Self::Backend {
            context,
            message: error.to_string(),
        }
    }
}
