//! Contact and newsletter form validation.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Something, an `@`, something, a dot, something. No whitespace anywhere.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

pub const CONTACT_SENT: &str = "Message sent successfully! We will get back to you soon.";
pub const NEWSLETTER_THANKS: &str = "Thank you for subscribing to our newsletter!";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The services page contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into() }
    }

    /// Parse `name; email; message` as typed into the command bar.
    pub fn parse(input: &str) -> Self {
        let mut parts = input.splitn(3, ';').map(str::trim);
        Self::new(
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
        )
    }

    /// Required fields first, then email shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let blank = |s: &str| s.trim().is_empty();
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Newsletter signup: only checks that something was entered.
pub fn validate_newsletter(email: &str) -> Result<&str, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        Err(ValidationError::EmptyEmail)
    } else {
        Ok(email)
    }
}
