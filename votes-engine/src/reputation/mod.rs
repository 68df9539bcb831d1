//! Best-effort reputation propagation.
//!
//! Runs after the ledger and tally effects have succeeded. Each recipient's
//! adjustment is independent: a failed author update does not prevent the
//! voter update, and no failure is rolled back or retried. Failures are
//! turned into `EffectStatus::Ignored` values so callers and tests can see
//! exactly what was swallowed.
use tracing::{debug, warn};
use votes_repository::ReputationAccumulator;
use votes_shared::types::{Payout, UserId};

/// What happened to one recipient's score during a vote.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EffectStatus {
    /// The delta was added; `score` is the recipient's score afterwards.
    Applied { delta: i64, score: i64 },
    /// The payout row carries no change for this recipient.
    #[default]
    Skipped,
    /// The adjustment failed and the failure was swallowed.
    Ignored(String),
}

impl EffectStatus {
    pub fn is_ignored(&self) -> bool {
        matches!(self, EffectStatus::Ignored(_))
    }
}

/// Per-recipient result of reputation propagation for a single vote.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReputationReport {
    pub author: EffectStatus,
    pub voter: EffectStatus,
}

impl ReputationReport {
    /// True when at least one adjustment failed and was ignored.
    pub fn has_ignored_errors(&self) -> bool {
        self.author.is_ignored() || self.voter.is_ignored()
    }
}

/// Applies the author and voter deltas of `payout`, author first.
pub(crate) async fn propagate(
    accumulator: &dyn ReputationAccumulator,
    author_id: UserId,
    voter_id: UserId,
    payout: Payout,
) -> ReputationReport {
    let author = apply(accumulator, author_id, payout.author, "author").await;
    let voter = apply(accumulator, voter_id, payout.voter, "voter").await;
    ReputationReport { author, voter }
}

async fn apply(
    accumulator: &dyn ReputationAccumulator,
    user_id: UserId,
    delta: i64,
    role: &'static str,
) -> EffectStatus {
    if delta == 0 {
        return EffectStatus::Skipped;
    }

    match accumulator.adjust_score(user_id, delta).await {
        Ok(score) => {
            debug!(user_id = %user_id, role, delta, score, "Reputation adjusted");
            EffectStatus::Applied { delta, score }
        }
        Err(e) => {
            warn!(user_id = %user_id, role, delta, error = %e, "Ignoring reputation failure");
            EffectStatus::Ignored(e.to_string())
        }
    }
}
