//! Contact form domain model.
//!
//! # Responsibility
//! - Define the submission shape accepted from the contact form.
//! - Define the stored message shape returned by the message store.
//! - Own the field validation rules for submissions.
//!
//! # Invariants
//! - `ContactMessage::id` is stable and never reused.
//! - Stored name/email/message values are trimmed.
//! - Validation reports every failing field, in field order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Minimum trimmed name length in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum trimmed message length in characters.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Stable identifier for a stored contact message.
pub type MessageId = Uuid;

/// Raw contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Single failing field in a contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFieldError {
    NameTooShort,
    InvalidEmail,
    MessageTooShort,
}

impl ContactFieldError {
    /// Form field the error belongs to.
    pub fn field(self) -> &'static str {
        match self {
            Self::NameTooShort => "name",
            Self::InvalidEmail => "email",
            Self::MessageTooShort => "message",
        }
    }
}

impl Display for ContactFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort => write!(
                f,
                "Name must be at least {NAME_MIN_CHARS} characters long"
            ),
            Self::InvalidEmail => write!(f, "Please provide a valid email address"),
            Self::MessageTooShort => write!(
                f,
                "Message must be at least {MESSAGE_MIN_CHARS} characters long"
            ),
        }
    }
}

impl Error for ContactFieldError {}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validates every field and returns all failures.
    pub fn validate(&self) -> Result<(), Vec<ContactFieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < NAME_MIN_CHARS {
            errors.push(ContactFieldError::NameTooShort);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push(ContactFieldError::InvalidEmail);
        }
        if self.message.trim().chars().count() < MESSAGE_MIN_CHARS {
            errors.push(ContactFieldError::MessageTooShort);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Returns a copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Contact message as persisted by the message store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub is_read: bool,
}

/// Aggregate read/unread counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStats {
    pub total: u64,
    pub unread: u64,
    pub read: u64,
}
