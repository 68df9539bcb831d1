use votes_shared::types::{VotableTarget, VoteTarget};
use crate::errors::TallyError;

/// Trait for interacting with the denormalized vote tally of posts and comments.
///
/// Tally adjustments must be atomic with respect to each other: implementations
/// apply the delta inside the store (for example `SET votes = votes + $1`)
/// and never read, compute and write back from application memory.
#[async_trait::async_trait]
pub trait TallyCounter: Send + Sync {
    /// Loads the target together with its author and current tally.
    async fn find_target(&self, target: VoteTarget) -> Result<Option<VotableTarget>, TallyError>;

    /// Adds `delta` to the tally of `target` and returns the new tally.
    ///
    /// Fails with `TallyError::UnknownTarget` if the target does not exist.
    async fn adjust_tally(&self, target: VoteTarget, delta: i64) -> Result<i64, TallyError>;

    /// Reads the current tally of `target`, `None` if the target does not exist.
    async fn get_tally(&self, target: VoteTarget) -> Result<Option<i64>, TallyError>;
}
