use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::{TargetId, TargetKind, UserId, VoteType};

/// Represents a user's current vote on a post or comment.
///
/// At most one record exists per `(voter_id, target_id)` pair. The record is
/// created on the first vote and only its `vote_type` (and `voted_at`) change
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRecord {
    pub voter_id: UserId,
    pub target_id: TargetId,
    pub target_kind: TargetKind,
    pub vote_type: VoteType,
    pub voted_at: DateTime<Utc>,
}
