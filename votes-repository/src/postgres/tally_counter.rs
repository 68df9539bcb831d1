//! PostgreSQL implementation of the tally counter.
//!
//! Posts and comments keep their tally in a `votes` column of their own table.

use crate::TallyCounter;
use crate::errors::TallyError;
use async_trait::async_trait;
use sqlx::Row;
use votes_shared::types::{TargetKind, VotableTarget, VoteTarget};

/// PostgreSQL-backed tally counter over the `posts` and `comments` tables.
pub struct PostgresTallyCounter {
    /// PostgreSQL connection pool
    pool: sqlx::PgPool,
}

impl PostgresTallyCounter {
    /// Creates a new PostgreSQL tally counter instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with the `posts` and
    ///   `comments` tables
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

fn table(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Post => "posts",
        TargetKind::Comment => "comments",
    }
}

#[async_trait]
impl TallyCounter for PostgresTallyCounter {
    async fn find_target(&self, target: VoteTarget) -> Result<Option<VotableTarget>, TallyError> {
        let query = format!("SELECT author_id, votes FROM {} WHERE id = $1", table(target.kind));
        let row = sqlx::query(&query)
            .bind(target.id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(VotableTarget {
                id: target.id,
                kind: target.kind,
                author_id: row.try_get("author_id")?,
                tally: row.try_get("votes")?,
            })),
            None => Ok(None),
        }
    }

    async fn adjust_tally(&self, target: VoteTarget, delta: i64) -> Result<i64, TallyError> {
        let query = format!(
            "UPDATE {} SET votes = votes + $2 WHERE id = $1 RETURNING votes",
            table(target.kind)
        );
        let tally: Option<i64> = sqlx::query_scalar(&query)
            .bind(target.id)
            .bind(delta)
            .fetch_optional(&self.pool)
            .await?;

        tally.ok_or(TallyError::UnknownTarget(target))
    }

    async fn get_tally(&self, target: VoteTarget) -> Result<Option<i64>, TallyError> {
        let query = format!("SELECT votes FROM {} WHERE id = $1", table(target.kind));
        let tally = sqlx::query_scalar(&query)
            .bind(target.id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tally)
    }
}
