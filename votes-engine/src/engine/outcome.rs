use votes_shared::types::{TargetId, VoteTarget, VoteType};
use crate::reputation::ReputationReport;

/// Which branch of the vote state machine executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteBranch {
    /// No vote existed; a record was inserted.
    FirstVote(VoteType),
    /// A vote with the requested direction already existed; nothing changed.
    Unchanged(VoteType),
    /// The existing vote was flipped.
    Changed { from: VoteType, to: VoteType },
}

/// The result of a successful `cast_vote`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    pub target: VoteTarget,
    /// Tally of the target after the vote.
    pub tally: i64,
    pub branch: VoteBranch,
    /// The first-vote insert lost a race and the request was resolved by re-reading the ledger.
    pub resolved_after_conflict: bool,
    pub reputation: ReputationReport,
}

impl VoteOutcome {
    pub fn target_id(&self) -> TargetId {
        self.target.id
    }

    /// Human readable note returned to clients for repeats and changes.
    pub fn message(&self) -> Option<&'static str> {
        match self.branch {
            VoteBranch::FirstVote(_) => None,
            VoteBranch::Unchanged(_) => Some("Vote unchanged"),
            VoteBranch::Changed { .. } => Some("Vote updated"),
        }
    }
}
