use crate::types::{TargetId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of content a vote is cast on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Post,
    Comment,
}

impl TargetKind {
    /// Storage code of the target kind (`SMALLINT` column).
    pub fn code(&self) -> i16 {
        match self {
            TargetKind::Post => 0,
            TargetKind::Comment => 1,
        }
    }

    /// Decodes a storage code, returning `None` for unknown codes.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(TargetKind::Post),
            1 => Some(TargetKind::Comment),
            _ => None,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Post => f.write_str("post"),
            TargetKind::Comment => f.write_str("comment"),
        }
    }
}

/// Addresses one post or comment.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VoteTarget {
    pub id: TargetId,
    pub kind: TargetKind,
}

impl VoteTarget {
    pub fn post(id: TargetId) -> Self {
        Self {
            id,
            kind: TargetKind::Post,
        }
    }

    pub fn comment(id: TargetId) -> Self {
        Self {
            id,
            kind: TargetKind::Comment,
        }
    }
}

/// A post or comment as seen by the vote engine: who wrote it and its current tally.
///
/// The tally is the denormalized net vote count. It starts at 0 and is only
/// ever adjusted through additive deltas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VotableTarget {
    pub id: TargetId,
    pub kind: TargetKind,
    pub author_id: UserId,
    pub tally: i64,
}

impl VotableTarget {
    pub fn target(&self) -> VoteTarget {
        VoteTarget {
            id: self.id,
            kind: self.kind,
        }
    }
}
