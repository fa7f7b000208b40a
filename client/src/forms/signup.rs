//! Sign-up form rules and the live password checklist.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use super::{PASSWORD_REQUIRED, validate_email};

const NAME_MAX_LEN: usize = 50;
const PASSWORD_MIN_LEN: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

/// Per-field messages; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub accept_terms: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.accept_terms.is_none()
    }
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns the per-field messages when any field is invalid.
    pub fn validate(&self) -> Result<(), SignupErrors> {
        let errors = SignupErrors {
            first_name: validate_name(&self.first_name, "First name is required", "First name must be less than 50 characters"),
            last_name: validate_name(&self.last_name, "Last name is required", "Last name must be less than 50 characters"),
            email: validate_email(&self.email),
            password: validate_password(&self.password),
            confirm_password: validate_confirmation(&self.password, &self.confirm_password),
            accept_terms: (!self.accept_terms).then_some("You must accept the terms and conditions"),
        };
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn validate_name(value: &str, required: &'static str, too_long: &'static str) -> Option<&'static str> {
    if value.is_empty() {
        Some(required)
    } else if value.chars().count() > NAME_MAX_LEN {
        Some(too_long)
    } else {
        None
    }
}

fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some(PASSWORD_REQUIRED);
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Some("Password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain a number");
    }
    None
}

fn validate_confirmation(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() {
        Some("Please confirm your password")
    } else if confirm != password {
        Some("Passwords do not match")
    } else {
        None
    }
}

/// One line of the password strength checklist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordRequirement {
    pub label: &'static str,
    pub met: bool,
}

/// Checklist shown under the password field; empty while nothing is typed.
pub fn password_requirements(password: &str) -> Vec<PasswordRequirement> {
    if password.is_empty() {
        return Vec::new();
    }
    vec![
        PasswordRequirement { label: "At least 8 characters", met: password.chars().count() >= PASSWORD_MIN_LEN },
        PasswordRequirement { label: "Contains uppercase", met: password.chars().any(|c| c.is_ascii_uppercase()) },
        PasswordRequirement { label: "Contains lowercase", met: password.chars().any(|c| c.is_ascii_lowercase()) },
        PasswordRequirement { label: "Contains number", met: password.chars().any(|c| c.is_ascii_digit()) },
    ]
}
