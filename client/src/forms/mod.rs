//! Sign-in and sign-up form validation.
//!
//! DESIGN
//! ======
//! Validation is pure so pages only wire signals to these structs. Each field
//! reports at most one message: the first rule it breaks.

pub mod login;
pub mod signup;

use regex::Regex;

pub use login::{LoginErrors, LoginForm};
pub use signup::{PasswordRequirement, SignupErrors, SignupForm, password_requirements};

pub(crate) const EMAIL_REQUIRED: &str = "Email is required";
pub(crate) const EMAIL_INVALID: &str = "Please enter a valid email address";
pub(crate) const PASSWORD_REQUIRED: &str = "Password is required";

/// Loose shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

pub(crate) fn validate_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}
