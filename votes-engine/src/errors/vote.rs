//! Error types for the vote engine.
//! Defines the error taxonomy surfaced to callers of `VoteEngine::cast_vote`.
use thiserror::Error;
use votes_repository::{LedgerError, ReputationError, TallyError};
use votes_shared::types::{ParseVoteTypeError, TargetKind, VoteTarget};

/// Represents errors that can occur while casting a vote or reading counters.
///
/// Reputation failures during a vote never appear here; they are swallowed
/// and reported through `ReputationReport`.
#[derive(Debug, Error)]
pub enum VoteError {
    /// Malformed request, rejected before any mutation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The target post or comment does not exist.
    #[error("{} not found", capitalized(.0))]
    NotFound(VoteTarget),

    /// The user whose score was requested does not exist.
    #[error("User not found")]
    UserNotFound,

    /// Caller identity missing or invalid.
    #[error("Unauthorized: missing user context")]
    Unauthorized,

    /// The ledger write kept losing races after the single retry.
    #[error("You have already voted on this {}", kind_of(.0))]
    Conflict(VoteTarget),

    /// The ledger, tally or score store could not be reached.
    #[error("Storage failure: {0}")]
    Storage(String),
}

fn kind_of(target: &VoteTarget) -> TargetKind {
    target.kind
}

fn capitalized(target: &VoteTarget) -> &'static str {
    match target.kind {
        TargetKind::Post => "Post",
        TargetKind::Comment => "Comment",
    }
}

impl From<ParseVoteTypeError> for VoteError {
    fn from(_: ParseVoteTypeError) -> Self {
        VoteError::InvalidInput("Invalid vote type".to_string())
    }
}

impl From<LedgerError> for VoteError {
    fn from(err: LedgerError) -> Self {
        VoteError::Storage(err.to_string())
    }
}

impl From<TallyError> for VoteError {
    fn from(err: TallyError) -> Self {
        VoteError::Storage(err.to_string())
    }
}

impl From<ReputationError> for VoteError {
    fn from(err: ReputationError) -> Self {
        VoteError::Storage(err.to_string())
    }
}
