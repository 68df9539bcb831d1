use thiserror::Error;
use votes_shared::types::VoteTarget;

#[derive(Debug, Error)]
/// Represents errors that can occur while reading or adjusting target tallies.
///
/// This enum consolidates various error conditions specific to database interactions,
/// such as SQLx errors during database operations.
pub enum TallyError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Unknown target {0:?}")]
    UnknownTarget(VoteTarget),
}
