mod ids;
mod payout;
mod target;
mod user_score;
mod vote_record;
mod vote_type;

pub use ids::{TargetId, UserId};
pub use payout::{
    Payout, VoteTransition, COMMENT_UPVOTE_AUTHOR_REWARD, DOWNVOTE_AUTHOR_PENALTY,
    POST_UPVOTE_AUTHOR_REWARD, UPVOTE_VOTER_REWARD,
};
pub use target::{TargetKind, VotableTarget, VoteTarget};
pub use user_score::UserScore;
pub use vote_record::VoteRecord;
pub use vote_type::{ParseVoteTypeError, VoteType};
