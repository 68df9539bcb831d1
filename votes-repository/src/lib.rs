//! # Votes Repository
//! This crate provides traits and implementations for interacting with the
//! vote ledger, the per-target tally counters and the per-user reputation
//! scores. It includes definitions for errors, interfaces, a PostgreSQL
//! implementation and an in-memory implementation.
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod postgres;

pub use errors::{LedgerError, ReputationError, TallyError};
pub use interfaces::{ReputationAccumulator, TallyCounter, VoteLedger};
pub use memory::InMemoryVotesStore;
pub use postgres::{
    PostgresReputationAccumulator, PostgresTallyCounter, PostgresVoteLedger, MIGRATOR,
};
