use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use super::email::EmailAddress;

/// One signup as written to the waitlist collection. Never updated once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistEntry {
    pub email: EmailAddress,
    pub joined_at: DateTime<Utc>,
    pub source: Option<String>,
    /// Browser user agent, informational only.
    pub client_context: Option<String>,
}

impl WaitlistEntry {
    pub fn new(email: EmailAddress, source: Option<String>, client_context: Option<String>) -> Self {
        Self {
            email,
            joined_at: Utc::now(),
            source,
            client_context,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected store response: {0}")]
    Decode(String),
    #[error("email is already on the waitlist")]
    Duplicate,
}

/// Remote collection of waitlist entries.
///
/// Implementations do not retry. Every failure goes back to the caller, which
/// decides how to degrade.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait WaitlistStore {
    /// Whether an entry with this email has already been stored.
    async fn exists(&self, email: &EmailAddress) -> Result<bool, StoreError>;

    /// Write a new entry and return the id the store assigned to it.
    async fn insert(&self, entry: WaitlistEntry) -> Result<String, StoreError>;

    /// Number of stored entries.
    async fn count(&self) -> Result<u64, StoreError>;
}
