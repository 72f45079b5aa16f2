//! Contact form use-case service.
//!
//! # Responsibility
//! - Validate contact submissions and persist accepted ones.
//! - Provide inbox management (list, unread, mark read, delete, stats).
//!
//! # Invariants
//! - Nothing is persisted unless every field validates.
//! - Persisted values are trimmed.
//! - Logs carry ids and counters only, never names, emails or bodies.

use crate::model::contact::{
    ContactFieldError, ContactMessage, ContactSubmission, MessageId, MessageStats,
};
use crate::repo::message_repo::{MessageListQuery, MessageRepository, RepoError, RepoResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for contact use-cases.
#[derive(Debug)]
pub enum ContactServiceError {
    /// One or more fields failed validation.
    Validation(Vec<ContactFieldError>),
    /// Target message does not exist.
    MessageNotFound(MessageId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ContactServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => {
                let joined = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "{joined}")
            }
            Self::MessageNotFound(id) => write!(f, "message not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContactServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ContactServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Contact service facade over repository implementations.
pub struct ContactService<R: MessageRepository> {
    repo: R,
}

impl<R: MessageRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and stores one submission.
    ///
    /// # Errors
    /// - `Validation` with every failing field; nothing is stored.
    /// - `Repo` on persistence failure.
    pub fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactMessage, ContactServiceError> {
        if let Err(errors) = submission.validate() {
            let fields = errors
                .iter()
                .map(|err| err.field())
                .collect::<Vec<_>>()
                .join(",");
            warn!("event=contact_submit module=service status=rejected fields={fields}");
            return Err(ContactServiceError::Validation(errors));
        }

        let stored = self.repo.save_message(&submission.trimmed())?;
        info!(
            "event=contact_submit module=service status=ok message_id={}",
            stored.id
        );
        Ok(stored)
    }

    /// Gets one message, failing when it does not exist.
    pub fn message(&self, id: MessageId) -> Result<ContactMessage, ContactServiceError> {
        self.repo
            .get_message(id)?
            .ok_or(ContactServiceError::MessageNotFound(id))
    }

    /// Lists messages newest first.
    pub fn list_messages(&self, limit: Option<u32>) -> RepoResult<Vec<ContactMessage>> {
        self.repo.list_messages(&MessageListQuery {
            unread_only: false,
            limit,
        })
    }

    /// Lists unread messages newest first.
    pub fn unread_messages(&self, limit: Option<u32>) -> RepoResult<Vec<ContactMessage>> {
        self.repo.list_messages(&MessageListQuery {
            unread_only: true,
            limit,
        })
    }

    /// Marks one message as read.
    ///
    /// Returns `false` when the message was already read.
    ///
    /// # Errors
    /// - `MessageNotFound` when no message has `id`.
    pub fn mark_as_read(&self, id: MessageId) -> Result<bool, ContactServiceError> {
        if self.repo.mark_as_read(id)? {
            return Ok(true);
        }
        self.message(id).map(|_| false)
    }

    /// Deletes one message.
    ///
    /// # Errors
    /// - `MessageNotFound` when no message has `id`.
    pub fn delete_message(&self, id: MessageId) -> Result<(), ContactServiceError> {
        if self.repo.delete_message(id)? {
            Ok(())
        } else {
            Err(ContactServiceError::MessageNotFound(id))
        }
    }

    /// Returns inbox counters.
    pub fn stats(&self) -> RepoResult<MessageStats> {
        self.repo.message_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::ContactServiceError;
    use crate::model::contact::ContactFieldError;

    #[test]
    fn validation_error_joins_field_messages() {
        let err = ContactServiceError::Validation(vec![
            ContactFieldError::NameTooShort,
            ContactFieldError::InvalidEmail,
        ]);
        assert_eq!(
            err.to_string(),
            "Name must be at least 2 characters long; Please provide a valid email address"
        );
    }
}
