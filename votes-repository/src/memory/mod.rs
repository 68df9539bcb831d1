//! In-memory implementation of the votes repository interfaces.
//!
//! All tables sit behind one mutex and every trait call takes it exactly
//! once, so each call is atomic on its own: the ledger insert is a
//! check-and-insert under the lock and counter adjustments are in-place
//! additions. No call holds the lock across an `.await`.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;
use votes_shared::types::{
    TargetId, TargetKind, UserId, UserScore, VotableTarget, VoteRecord, VoteTarget, VoteType,
};

use crate::errors::{LedgerError, ReputationError, TallyError};
use crate::interfaces::{ReputationAccumulator, TallyCounter, VoteLedger};

#[derive(Default)]
struct Tables {
    votes: HashMap<(UserId, TargetId), VoteRecord>,
    targets: HashMap<TargetId, VotableTarget>,
    scores: HashMap<UserId, i64>,
}

/// A process-local store implementing `VoteLedger`, `TallyCounter` and
/// `ReputationAccumulator` with the same guarantees as the PostgreSQL backend.
#[derive(Default)]
pub struct InMemoryVotesStore {
    tables: Mutex<Tables>,
}

impl InMemoryVotesStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is a single statement, so a poisoned lock still guards
    // consistent data.
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers a user with a score of 0 and returns its id.
    pub fn add_user(&self) -> UserId {
        let user_id = Uuid::new_v4();
        self.tables().scores.insert(user_id, 0);
        user_id
    }

    /// Registers a post written by `author_id` with a tally of 0.
    pub fn add_post(&self, author_id: UserId) -> VoteTarget {
        self.add_target(author_id, TargetKind::Post)
    }

    /// Registers a comment written by `author_id` with a tally of 0.
    pub fn add_comment(&self, author_id: UserId) -> VoteTarget {
        self.add_target(author_id, TargetKind::Comment)
    }

    fn add_target(&self, author_id: UserId, kind: TargetKind) -> VoteTarget {
        let target = VotableTarget {
            id: Uuid::new_v4(),
            kind,
            author_id,
            tally: 0,
        };
        let address = target.target();
        self.tables().targets.insert(target.id, target);
        address
    }

    /// Number of ledger records stored for `target_id`, across all voters.
    pub fn vote_count(&self, target_id: TargetId) -> usize {
        self.tables()
            .votes
            .keys()
            .filter(|(_, voted_target)| *voted_target == target_id)
            .count()
    }
}

#[async_trait]
impl VoteLedger for InMemoryVotesStore {
    async fn find_vote(
        &self,
        voter_id: UserId,
        target_id: TargetId,
    ) -> Result<Option<VoteRecord>, LedgerError> {
        Ok(self.tables().votes.get(&(voter_id, target_id)).cloned())
    }

    async fn insert_vote(&self, record: &VoteRecord) -> Result<(), LedgerError> {
        match self.tables().votes.entry((record.voter_id, record.target_id)) {
            Entry::Occupied(_) => Err(LedgerError::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(())
            }
        }
    }

    async fn update_vote_type(
        &self,
        record: &VoteRecord,
        new_type: VoteType,
    ) -> Result<(), LedgerError> {
        let mut tables = self.tables();
        let stored = tables
            .votes
            .get_mut(&(record.voter_id, record.target_id))
            .filter(|stored| stored.vote_type == record.vote_type)
            .ok_or(LedgerError::StaleVote)?;
        stored.vote_type = new_type;
        stored.voted_at = chrono::Utc::now();
        Ok(())
    }
}

#[async_trait]
impl TallyCounter for InMemoryVotesStore {
    async fn find_target(&self, target: VoteTarget) -> Result<Option<VotableTarget>, TallyError> {
        Ok(self
            .tables()
            .targets
            .get(&target.id)
            .filter(|stored| stored.kind == target.kind)
            .cloned())
    }

    async fn adjust_tally(&self, target: VoteTarget, delta: i64) -> Result<i64, TallyError> {
        let mut tables = self.tables();
        let stored = tables
            .targets
            .get_mut(&target.id)
            .filter(|stored| stored.kind == target.kind)
            .ok_or(TallyError::UnknownTarget(target))?;
        stored.tally += delta;
        Ok(stored.tally)
    }

    async fn get_tally(&self, target: VoteTarget) -> Result<Option<i64>, TallyError> {
        Ok(self
            .tables()
            .targets
            .get(&target.id)
            .filter(|stored| stored.kind == target.kind)
            .map(|stored| stored.tally))
    }
}

#[async_trait]
impl ReputationAccumulator for InMemoryVotesStore {
    async fn adjust_score(&self, user_id: UserId, delta: i64) -> Result<i64, ReputationError> {
        let mut tables = self.tables();
        let score = tables
            .scores
            .get_mut(&user_id)
            .ok_or(ReputationError::UnknownUser(user_id))?;
        *score += delta;
        Ok(*score)
    }

    async fn get_score(&self, user_id: UserId) -> Result<Option<UserScore>, ReputationError> {
        Ok(self
            .tables()
            .scores
            .get(&user_id)
            .map(|score| UserScore {
                user_id,
                score: *score,
            }))
    }
}
