//! PostgreSQL implementation of the reputation accumulator.

use crate::ReputationAccumulator;
use crate::errors::ReputationError;
use async_trait::async_trait;
use votes_shared::types::{UserId, UserScore};

/// PostgreSQL-backed reputation accumulator over the `users.score` column.
pub struct PostgresReputationAccumulator {
    pool: sqlx::PgPool,
}

impl PostgresReputationAccumulator {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReputationAccumulator for PostgresReputationAccumulator {
    async fn adjust_score(&self, user_id: UserId, delta: i64) -> Result<i64, ReputationError> {
        let score: Option<i64> =
            sqlx::query_scalar("UPDATE users SET score = score + $2 WHERE id = $1 RETURNING score")
                .bind(user_id)
                .bind(delta)
                .fetch_optional(&self.pool)
                .await?;

        score.ok_or(ReputationError::UnknownUser(user_id))
    }

    async fn get_score(&self, user_id: UserId) -> Result<Option<UserScore>, ReputationError> {
        let score: Option<i64> = sqlx::query_scalar("SELECT score FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(score.map(|score| UserScore { user_id, score }))
    }
}
