//! This module defines and re-exports the interfaces for the votes repository.
//! It serves as a central point for accessing traits related to data interaction.
mod reputation;
mod tally_counter;
mod vote_ledger;

pub use reputation::ReputationAccumulator;
pub use tally_counter::TallyCounter;
pub use vote_ledger::VoteLedger;
