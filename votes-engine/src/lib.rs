//! # Votes Engine
//! This crate implements the vote transition engine: given a vote request it
//! decides whether this is a first vote, a repeat or a change, records it in
//! the ledger, adjusts the target tally and propagates reputation to the
//! author and the voter.
//!
//! Ledger and tally effects are authoritative and their failures abort the
//! request. Reputation propagation is best-effort: failures are logged and
//! reported in the outcome, never returned as errors.
pub mod engine;
pub mod errors;
pub mod reputation;

pub use engine::{VoteBranch, VoteEngine, VoteOutcome};
pub use errors::VoteError;
pub use reputation::{EffectStatus, ReputationReport};
