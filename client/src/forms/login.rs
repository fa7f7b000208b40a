//! Login form rules.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::{PASSWORD_REQUIRED, validate_email};

const PASSWORD_MIN_LEN: usize = 6;
const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Per-field messages; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    /// Check the form before the credentials are tried.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any field is invalid.
    pub fn validate(&self) -> Result<(), LoginErrors> {
        let errors = LoginErrors { email: validate_email(&self.email), password: validate_password(&self.password) };
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if password.chars().count() < PASSWORD_MIN_LEN {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}
