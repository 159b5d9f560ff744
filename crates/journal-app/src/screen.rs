pub mod editor;
pub mod main;
pub mod sign_in;
pub mod sign_up;

use crate::error::{MISSING_CREDENTIALS, ScreenError};

/// Trimmed email and password, or a validation failure if either is blank.
fn credentials<'a>(email: &'a str, password: &'a str) -> Result<(&'a str, &'a str), ScreenError> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ScreenError::Validation(MISSING_CREDENTIALS));
    }
    Ok((email, password))
}
