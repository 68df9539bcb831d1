//! PostgreSQL implementation of the vote ledger.
//!
//! Votes live in the `vote_records` table whose primary key is
//! `(voter_id, target_id)`. Inserts deliberately carry no `ON CONFLICT`
//! clause: a unique violation is surfaced as `LedgerError::Conflict` so the
//! caller can fall back to the update path. Updates compare the stored
//! direction with the one that was read and report `LedgerError::StaleVote`
//! when another change got there first.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::postgres::PgRow;
use votes_shared::types::{TargetId, TargetKind, UserId, VoteRecord, VoteType};
use crate::{LedgerError, VoteLedger};

/// PostgreSQL-backed vote ledger.
pub struct PostgresVoteLedger {
    pool: sqlx::PgPool,
}

impl PostgresVoteLedger {
    /// Creates a new PostgreSQL vote ledger instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with required schema
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    fn decode_record(row: PgRow) -> Result<VoteRecord, LedgerError> {
        let target_kind: i16 = row.try_get("target_kind")?;
        let vote_type: i16 = row.try_get("vote_type")?;
        let voted_at: DateTime<Utc> = row.try_get("voted_at")?;

        Ok(VoteRecord {
            voter_id: row.try_get("voter_id")?,
            target_id: row.try_get("target_id")?,
            target_kind: TargetKind::from_code(target_kind)
                .ok_or(LedgerError::InvalidTargetKind(target_kind))?,
            vote_type: VoteType::from_code(vote_type)
                .ok_or(LedgerError::InvalidVoteType(vote_type))?,
            voted_at,
        })
    }
}

#[async_trait]
impl VoteLedger for PostgresVoteLedger {
    async fn find_vote(
        &self,
        voter_id: UserId,
        target_id: TargetId,
    ) -> Result<Option<VoteRecord>, LedgerError> {
        let row = sqlx::query(
            r#"
            SELECT voter_id, target_id, target_kind, vote_type, voted_at
            FROM vote_records
            WHERE voter_id = $1 AND target_id = $2
            "#,
        )
        .bind(voter_id)
        .bind(target_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::decode_record).transpose()
    }

    async fn insert_vote(&self, record: &VoteRecord) -> Result<(), LedgerError> {
        sqlx::query(
            r#"
            INSERT INTO vote_records (voter_id, target_id, target_kind, vote_type, voted_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.voter_id)
        .bind(record.target_id)
        .bind(record.target_kind.code())
        .bind(record.vote_type.code())
        .bind(record.voted_at)
        .execute(&self.pool)
        .await
        .map_err(LedgerError::from_insert)?;

        Ok(())
    }

    async fn update_vote_type(
        &self,
        record: &VoteRecord,
        new_type: VoteType,
    ) -> Result<(), LedgerError> {
        let result = sqlx::query(
            r#"
            UPDATE vote_records
            SET vote_type = $3, voted_at = NOW()
            WHERE voter_id = $1 AND target_id = $2 AND vote_type = $4
            "#,
        )
        .bind(record.voter_id)
        .bind(record.target_id)
        .bind(new_type.code())
        .bind(record.vote_type.code())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(LedgerError::StaleVote);
        }
        Ok(())
    }
}
