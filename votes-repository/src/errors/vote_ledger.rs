//! Error types for the vote ledger.
use thiserror::Error;

/// Represents errors that can occur within the vote ledger.
///
/// `Conflict` is the uniqueness constraint on `(voter_id, target_id)`
/// rejecting an insert. It is the mechanism that prevents double voting when
/// two first votes race, so callers must be able to tell it apart from
/// every other failure. `StaleVote` plays the same role for two changes of
/// one vote racing each other.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("A vote by this user on this target already exists")]
    Conflict,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// The stored direction no longer matches the record the update was
    /// based on, or the record is gone.
    #[error("The vote changed since it was read")]
    StaleVote,

    #[error("Invalid vote type: {0}")]
    InvalidVoteType(i16),

    #[error("Invalid target kind: {0}")]
    InvalidTargetKind(i16),
}

impl LedgerError {
    /// Maps an insert failure, turning unique violations into `Conflict`.
    pub fn from_insert(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => LedgerError::Conflict,
            _ => LedgerError::DatabaseError(err),
        }
    }
}
