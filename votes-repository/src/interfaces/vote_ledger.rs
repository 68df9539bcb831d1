//! This module defines the `VoteLedger` trait, the durable record of one vote
//! per `(voter, target)` pair. It is the source of truth for whether a user
//! already voted on a target, and in which direction.
use votes_shared::types::{TargetId, UserId, VoteRecord, VoteType};
use crate::errors::LedgerError;

/// A trait that defines the interface for interacting with the vote ledger.
///
/// Implementors must enforce uniqueness of `(voter_id, target_id)` at the
/// storage layer. A pre-check with [`VoteLedger::find_vote`] followed by an
/// insert is racy; the insert itself must fail with [`LedgerError::Conflict`]
/// when another insert for the same pair already won.
#[async_trait::async_trait]
pub trait VoteLedger: Send + Sync {
    /// Retrieves the current vote of `voter_id` on `target_id`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(VoteRecord))` - The user already voted on the target
    /// * `Ok(None)` - No vote exists for the pair
    /// * `Err(LedgerError)` - The ledger could not be read
    async fn find_vote(
        &self,
        voter_id: UserId,
        target_id: TargetId,
    ) -> Result<Option<VoteRecord>, LedgerError>;

    /// Inserts a new vote record.
    ///
    /// # Arguments
    ///
    /// * `record` - The first vote of a user on a target
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The record was created
    /// * `Err(LedgerError::Conflict)` - A record for the same pair already exists
    /// * `Err(LedgerError)` - Any other storage failure
    async fn insert_vote(&self, record: &VoteRecord) -> Result<(), LedgerError>;

    /// Flips the direction of an existing vote record, provided it still
    /// holds the direction `record` was read with.
    ///
    /// # Arguments
    ///
    /// * `record` - The record as read, identifying the pair and the expected direction
    /// * `new_type` - The direction to store
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The direction was swapped
    /// * `Err(LedgerError::StaleVote)` - The stored direction changed since the read,
    ///   or the record is gone
    /// * `Err(LedgerError)` - Any other storage failure
    async fn update_vote_type(
        &self,
        record: &VoteRecord,
        new_type: VoteType,
    ) -> Result<(), LedgerError>;
}
