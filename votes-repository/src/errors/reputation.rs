use thiserror::Error;
use votes_shared::types::UserId;

/// Represents errors that can occur while reading or adjusting user scores.
#[derive(Debug, Error)]
pub enum ReputationError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Unknown user {0}")]
    UnknownUser(UserId),
}
