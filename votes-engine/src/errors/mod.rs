mod vote;

pub use vote::VoteError;
