//! The fixed payout table applied to every vote transition.
//!
//! A vote change only applies the effect of the new direction. The author
//! reward or penalty granted by the previous direction is not reversed.
use crate::types::{TargetKind, VoteType};

/// Author reward for an upvote received on a post.
pub const POST_UPVOTE_AUTHOR_REWARD: i64 = 10;
/// Author reward for an upvote received on a comment.
pub const COMMENT_UPVOTE_AUTHOR_REWARD: i64 = 5;
/// Author penalty for a downvote received on a post or comment.
pub const DOWNVOTE_AUTHOR_PENALTY: i64 = -2;
/// Voter reward for giving an upvote.
pub const UPVOTE_VOTER_REWARD: i64 = 2;

/// The transition a vote request causes on a `(voter, target)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    /// No record existed yet.
    First(VoteType),
    /// A record with the requested direction already exists.
    Same(VoteType),
    /// A record with the opposite direction exists and is flipped.
    Change { from: VoteType, to: VoteType },
}

/// Deltas to apply to the target tally, the author score and the voter score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Payout {
    pub tally: i64,
    pub author: i64,
    pub voter: i64,
}

impl VoteTransition {
    /// Resolves the transition from the stored vote (if any) to the requested one.
    pub fn between(existing: Option<VoteType>, requested: VoteType) -> Self {
        match existing {
            None => VoteTransition::First(requested),
            Some(current) if current == requested => VoteTransition::Same(requested),
            Some(current) => VoteTransition::Change {
                from: current,
                to: requested,
            },
        }
    }

    /// Looks up the payout row for this transition on a target of the given kind.
    pub fn payout(&self, kind: TargetKind) -> Payout {
        match *self {
            VoteTransition::Same(_) => Payout::default(),
            VoteTransition::First(direction) | VoteTransition::Change { to: direction, .. } => {
                direction_effect(direction, kind)
            }
        }
    }

    /// The direction the ledger holds once this transition is applied.
    pub fn resulting_vote(&self) -> VoteType {
        match *self {
            VoteTransition::First(vote) | VoteTransition::Same(vote) => vote,
            VoteTransition::Change { to, .. } => to,
        }
    }
}

fn direction_effect(direction: VoteType, kind: TargetKind) -> Payout {
    match (direction, kind) {
        (VoteType::Up, TargetKind::Post) => Payout {
            tally: 1,
            author: POST_UPVOTE_AUTHOR_REWARD,
            voter: UPVOTE_VOTER_REWARD,
        },
        (VoteType::Up, TargetKind::Comment) => Payout {
            tally: 1,
            author: COMMENT_UPVOTE_AUTHOR_REWARD,
            voter: UPVOTE_VOTER_REWARD,
        },
        (VoteType::Down, _) => Payout {
            tally: -1,
            author: DOWNVOTE_AUTHOR_PENALTY,
            voter: 0,
        },
    }
}
