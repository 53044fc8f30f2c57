//! Form validation for the authentication flows.
//!
//! Messages are user-facing and returned as `CoreError::Validation`.

use crate::error::{CoreError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Minimum accepted password length at registration
pub const MIN_PASSWORD_LEN: usize = 8;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Whether `email` looks like `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Login form input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub agree_to_terms: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(CoreError::validation("Please fill in all fields"));
        }
        if !self.agree_to_terms {
            return Err(CoreError::validation(
                "You must agree to the Terms & Conditions",
            ));
        }
        Ok(())
    }
}

/// Registration form input
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub agree_to_terms: bool,
}

impl RegistrationForm {
    /// Checks run in a fixed order; the first failure wins.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty()
            || self.password.is_empty()
            || self.first_name.is_empty()
            || self.last_name.is_empty()
        {
            return Err(CoreError::validation("Please fill in all required fields"));
        }
        if self.password != self.confirm_password {
            return Err(CoreError::validation("Passwords do not match"));
        }
        if !self.agree_to_terms {
            return Err(CoreError::validation(
                "You must agree to the Terms & Conditions",
            ));
        }
        if !is_valid_email(&self.email) {
            return Err(CoreError::validation("Please enter a valid email address"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CoreError::validation(
                "Password must be at least 8 characters long",
            ));
        }
        Ok(())
    }
}

/// Password reset request input
pub fn validate_reset_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(CoreError::validation("Please enter your email"));
    }
    Ok(())
}
