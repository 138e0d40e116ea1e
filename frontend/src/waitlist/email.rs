use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    // Every dot in the domain sits between two non-empty labels
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email shape pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Please enter your email address")]
    Empty,
    #[error("Please enter a valid email address")]
    Malformed,
}

/// A trimmed, lowercased email that passed the `local@domain.tld` check.
///
/// This is the waitlist's dedup key, so the duplicate query and the insert
/// must both go through [`EmailAddress::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(EmailError::Empty);
        }
        if !EMAIL_SHAPE.is_match(&normalized) {
            return Err(EmailError::Malformed);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
