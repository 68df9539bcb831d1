use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents the direction of a vote cast by a user.
///
/// On the wire a vote is spelled `"upvote"` or `"downvote"`; any other
/// spelling is rejected by [`VoteType::from_str`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VoteType {
    /// Indicates an upvote or positive endorsement.
    #[serde(rename = "upvote")]
    Up,
    /// Indicates a downvote or negative endorsement.
    #[serde(rename = "downvote")]
    Down,
}

/// Returned when a vote type string is neither `"upvote"` nor `"downvote"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid vote type: {0}")]
pub struct ParseVoteTypeError(pub String);

impl VoteType {
    /// Wire spelling of the vote type.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Up => "upvote",
            VoteType::Down => "downvote",
        }
    }

    /// Storage code of the vote type (`SMALLINT` column).
    pub fn code(&self) -> i16 {
        match self {
            VoteType::Up => 0,
            VoteType::Down => 1,
        }
    }

    /// Decodes a storage code, returning `None` for unknown codes.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(VoteType::Up),
            1 => Some(VoteType::Down),
            _ => None,
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = ParseVoteTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(VoteType::Up),
            "downvote" => Ok(VoteType::Down),
            other => Err(ParseVoteTypeError(other.to_string())),
        }
    }
}
