//! Error types for the votes repository.
//! Consolidates and re-exports one error type per storage interface.
mod reputation;
mod tally_counter;
mod vote_ledger;

pub use reputation::ReputationError;
pub use tally_counter::TallyError;
pub use vote_ledger::LedgerError;
