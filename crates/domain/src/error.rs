//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`StayEaseError`]
//! via `From`. The `Display` text of validation and not-found errors is the
//! exact message returned to API clients.

use std::error::Error;

/// Top-level error shared by the application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum StayEaseError {
    /// Client input was missing or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup found nothing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

impl StayEaseError {
    /// Render the error together with every underlying cause, joined by `": "`.
    ///
    /// Storage failures carry their useful detail in the source chain, so this
    /// is what gets surfaced to callers.
    #[must_use]
    pub fn full_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

/// Rejected client input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email is required.")]
    MissingEmail,

    #[error("Hotel ID is required.")]
    MissingHotelId,

    #[error("user_name parameter is required.")]
    MissingUserName,

    /// The request body could not be decoded.
    #[error("{0}")]
    MalformedBody(String),

    /// A booking must carry a non-empty identifier.
    #[error("booking id must not be empty")]
    EmptyBookingId,
}

/// A lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// No booking carries the guest's email.
    #[error("Email not found in database.")]
    Guest,

    /// No booking carries the email used for the partner login.
    #[error("Hotel account not found.")]
    HotelAccount,

    /// No catalog entry has the requested id.
    #[error("Hotel not found.")]
    Hotel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Refused;

    #[derive(Debug, thiserror::Error)]
    #[error("database error")]
    struct Database(#[source] Refused);

    #[test]
    fn should_display_client_facing_messages() {
        assert_eq!(
            StayEaseError::from(ValidationError::MissingEmail).to_string(),
            "Email is required."
        );
        assert_eq!(
            StayEaseError::from(NotFoundError::Hotel).to_string(),
            "Hotel not found."
        );
    }

    #[test]
    fn should_include_source_chain_in_full_message() {
        let err = StayEaseError::Storage(Box::new(Database(Refused)));
        assert_eq!(
            err.full_message(),
            "storage error: database error: connection refused"
        );
    }

    #[test]
    fn should_return_plain_message_when_no_source() {
        let err = StayEaseError::from(NotFoundError::HotelAccount);
        assert_eq!(err.full_message(), "Hotel account not found.");
    }
}
