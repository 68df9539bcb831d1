use votes_shared::types::{UserId, UserScore};
use crate::errors::ReputationError;

/// Trait for interacting with per-user reputation scores.
///
/// Many votes on many targets may adjust the same user's score concurrently,
/// so adjustments must be applied atomically inside the store.
#[async_trait::async_trait]
pub trait ReputationAccumulator: Send + Sync {
    /// Adds `delta` to the score of `user_id` and returns the new score.
    ///
    /// Fails with `ReputationError::UnknownUser` if the user does not exist.
    async fn adjust_score(&self, user_id: UserId, delta: i64) -> Result<i64, ReputationError>;

    /// Reads the current score of `user_id`, `None` if the user does not exist.
    async fn get_score(&self, user_id: UserId) -> Result<Option<UserScore>, ReputationError>;
}
