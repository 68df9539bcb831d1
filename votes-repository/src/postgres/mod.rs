//! PostgreSQL implementations of the votes repository interfaces.
//!
//! ## Database Tables
//!
//! - `vote_records`: one row per `(voter_id, target_id)`, enforced by the primary key
//! - `posts` / `comments`: carry the denormalized `votes` tally
//! - `users`: carries the reputation `score`
//!
//! Every counter update is a single `UPDATE ... SET x = x + $delta RETURNING x`
//! statement, so concurrent adjustments never lose updates.
mod reputation;
mod tally_counter;
mod vote_ledger;

pub use reputation::PostgresReputationAccumulator;
pub use tally_counter::PostgresTallyCounter;
pub use vote_ledger::PostgresVoteLedger;

/// Embedded schema migrations for the votes tables.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("src/postgres/migrations");
