//! This module defines the `VoteEngine`, the orchestrator of a single vote.
//!
//! A request moves through the states `NoVote -> Voted(up) <-> Voted(down)`
//! for its `(voter, target)` pair. The engine reads the ledger, resolves the
//! transition, then applies ledger, tally, author score and voter score
//! effects in that order, each as its own atomic store operation.
//!
//! Losing a race is an explicit transition: when a first-vote insert
//! conflicts, or a change finds the stored direction already moved, the
//! engine moves to `Attempt::AfterConflict`, re-reads the ledger and resolves
//! the request against what it finds. A second lost race is reported as
//! `VoteError::Conflict`.
mod outcome;

pub use outcome::{VoteBranch, VoteOutcome};

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use votes_repository::{LedgerError, ReputationAccumulator, TallyCounter, VoteLedger};
use votes_shared::types::{
    UserId, UserScore, VotableTarget, VoteRecord, VoteTarget, VoteTransition, VoteType,
};

use crate::errors::VoteError;
use crate::reputation::{self, ReputationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Initial,
    AfterConflict,
}

/// `VoteEngine` records votes and keeps tallies and reputation in step with them.
///
/// It holds no in-process state between requests; all coordination goes
/// through the atomicity of the injected stores, so one engine can be
/// shared by any number of concurrent tasks.
pub struct VoteEngine {
    ledger: Arc<dyn VoteLedger>,
    tallies: Arc<dyn TallyCounter>,
    reputation: Arc<dyn ReputationAccumulator>,
}

impl VoteEngine {
    /// Creates a new `VoteEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `ledger` - Durable record of one vote per `(voter, target)` pair
    /// * `tallies` - Tally counter of posts and comments
    /// * `reputation` - Per-user score accumulator
    pub fn new(
        ledger: Arc<dyn VoteLedger>,
        tallies: Arc<dyn TallyCounter>,
        reputation: Arc<dyn ReputationAccumulator>,
    ) -> Self {
        Self {
            ledger,
            tallies,
            reputation,
        }
    }

    /// Casts a vote given its wire spelling (`"upvote"` or `"downvote"`).
    ///
    /// # Errors
    ///
    /// Returns `VoteError::InvalidInput` for any other spelling, before
    /// touching any store. See [`VoteEngine::cast`] for the remaining errors.
    pub async fn cast_vote(
        &self,
        voter_id: UserId,
        target: VoteTarget,
        requested: &str,
    ) -> Result<VoteOutcome, VoteError> {
        let vote_type: VoteType = requested.parse()?;
        self.cast(voter_id, target, vote_type).await
    }

    /// Casts a vote of `voter_id` on `target`.
    ///
    /// # Returns
    ///
    /// The new tally of the target and the branch that executed. Repeating
    /// an existing vote succeeds with `VoteBranch::Unchanged`.
    ///
    /// # Errors
    ///
    /// * `VoteError::Unauthorized` - `voter_id` is the nil id
    /// * `VoteError::NotFound` - the target does not exist
    /// * `VoteError::Conflict` - the insert or change lost a race again after the retry
    /// * `VoteError::Storage` - the ledger or tally store failed
    pub async fn cast(
        &self,
        voter_id: UserId,
        target: VoteTarget,
        vote_type: VoteType,
    ) -> Result<VoteOutcome, VoteError> {
        if voter_id.is_nil() {
            return Err(VoteError::Unauthorized);
        }

        let votable = self
            .tallies
            .find_target(target)
            .await?
            .ok_or(VoteError::NotFound(target))?;

        let mut attempt = Attempt::Initial;
        loop {
            let existing = self.ledger.find_vote(voter_id, target.id).await?;
            let stored_vote = existing.as_ref().map(|record| record.vote_type);
            let transition = VoteTransition::between(stored_vote, vote_type);

            match (transition, existing) {
                (VoteTransition::Same(vote), _) => {
                    debug!(
                        voter_id = %voter_id,
                        target_id = %target.id,
                        vote = %vote,
                        "Vote unchanged"
                    );
                    let tally = self.tallies.get_tally(target).await?.unwrap_or(votable.tally);
                    return Ok(VoteOutcome {
                        target,
                        tally,
                        branch: VoteBranch::Unchanged(vote),
                        resolved_after_conflict: attempt == Attempt::AfterConflict,
                        reputation: ReputationReport::default(),
                    });
                }
                (VoteTransition::Change { .. }, Some(record)) => {
                    let updated = self
                        .ledger
                        .update_vote_type(&record, transition.resulting_vote())
                        .await;
                    match updated {
                        Ok(()) => {
                            return self
                                .apply_effects(&votable, voter_id, transition, attempt)
                                .await;
                        }
                        Err(LedgerError::StaleVote) if attempt == Attempt::Initial => {
                            debug!(
                                voter_id = %voter_id,
                                target_id = %target.id,
                                "Vote change lost the update race, re-reading ledger"
                            );
                            attempt = Attempt::AfterConflict;
                        }
                        Err(LedgerError::StaleVote) => return Err(VoteError::Conflict(target)),
                        Err(e) => return Err(e.into()),
                    }
                }
                _ => {
                    let record = VoteRecord {
                        voter_id,
                        target_id: target.id,
                        target_kind: target.kind,
                        vote_type: transition.resulting_vote(),
                        voted_at: Utc::now(),
                    };
                    match self.ledger.insert_vote(&record).await {
                        Ok(()) => {
                            return self
                                .apply_effects(&votable, voter_id, transition, attempt)
                                .await;
                        }
                        Err(LedgerError::Conflict) if attempt == Attempt::Initial => {
                            debug!(
                                voter_id = %voter_id,
                                target_id = %target.id,
                                "First vote lost the insert race, re-reading ledger"
                            );
                            attempt = Attempt::AfterConflict;
                        }
                        Err(LedgerError::Conflict) => return Err(VoteError::Conflict(target)),
                        Err(e) => return Err(e.into()),
                    }
                }
            }
        }
    }

    /// Applies the tally delta, then propagates reputation on a best-effort basis.
    async fn apply_effects(
        &self,
        votable: &VotableTarget,
        voter_id: UserId,
        transition: VoteTransition,
        attempt: Attempt,
    ) -> Result<VoteOutcome, VoteError> {
        let payout = transition.payout(votable.kind);
        let tally = self.tallies.adjust_tally(votable.target(), payout.tally).await?;

        let reputation = reputation::propagate(
            self.reputation.as_ref(),
            votable.author_id,
            voter_id,
            payout,
        )
        .await;

        let branch = match transition {
            VoteTransition::First(vote) => VoteBranch::FirstVote(vote),
            VoteTransition::Same(vote) => VoteBranch::Unchanged(vote),
            VoteTransition::Change { from, to } => VoteBranch::Changed { from, to },
        };

        info!(
            voter_id = %voter_id,
            target_id = %votable.id,
            target_kind = %votable.kind,
            branch = ?branch,
            tally,
            "Vote recorded"
        );

        Ok(VoteOutcome {
            target: votable.target(),
            tally,
            branch,
            resolved_after_conflict: attempt == Attempt::AfterConflict,
            reputation,
        })
    }

    /// Reads the current tally of `target`.
    pub async fn get_tally(&self, target: VoteTarget) -> Result<i64, VoteError> {
        self.tallies
            .get_tally(target)
            .await?
            .ok_or(VoteError::NotFound(target))
    }

    /// Reads the current reputation score of `user_id`.
    pub async fn get_score(&self, user_id: UserId) -> Result<UserScore, VoteError> {
        self.reputation
            .get_score(user_id)
            .await?
            .ok_or(VoteError::UserNotFound)
    }
}
