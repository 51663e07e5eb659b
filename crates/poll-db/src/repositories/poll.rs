//! PostgreSQL implementation of PollRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use poll_core::entities::{Choice, Poll};
use poll_core::traits::{PollRepository, RepoResult};
use poll_core::value_objects::Snowflake;

use crate::models::{ChoiceModel, PollModel};

use super::error::{map_db_error, poll_not_found};

/// PostgreSQL implementation of PollRepository
#[derive(Clone)]
pub struct PgPollRepository {
    pool: PgPool,
}

impl PgPollRepository {
    /// Create a new PgPollRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PollRepository for PgPollRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Poll>> {
        let result = sqlx::query_as::<_, PollModel>(
            r"
            SELECT id, question, created_by, pub_date, expires_at, allow_multiple,
                   is_active, created_at, updated_at
            FROM polls
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Poll::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Poll>> {
        let results = sqlx::query_as::<_, PollModel>(
            r"
            SELECT id, question, created_by, pub_date, expires_at, allow_multiple,
                   is_active, created_at, updated_at
            FROM polls
            ORDER BY pub_date DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Poll::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_choices(&self, poll_id: Snowflake) -> RepoResult<Vec<Choice>> {
        let results = sqlx::query_as::<_, ChoiceModel>(
            r"
            SELECT id, poll_id, choice_text, votes
            FROM choices
            WHERE poll_id = $1
            ORDER BY id
            ",
        )
        .bind(poll_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Choice::from).collect())
    }

    #[instrument(skip(self, choices))]
    async fn create_with_choices(&self, poll: &Poll, choices: &[Choice]) -> RepoResult<()> {
        // Poll and choices land together or not at all
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO polls (id, question, created_by, pub_date, expires_at, allow_multiple,
                               is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(poll.id.into_inner())
        .bind(&poll.question)
        .bind(poll.created_by.map(Snowflake::into_inner))
        .bind(poll.pub_date)
        .bind(poll.expires_at)
        .bind(poll.allow_multiple)
        .bind(poll.is_active)
        .bind(poll.created_at)
        .bind(poll.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for choice in choices {
            sqlx::query(
                r"
                INSERT INTO choices (id, poll_id, choice_text, votes)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(choice.id.into_inner())
            .bind(choice.poll_id.into_inner())
            .bind(&choice.text)
            .bind(choice.votes)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE polls
            SET is_active = FALSE, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(poll_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM polls WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(poll_not_found(id));
        }

        Ok(())
    }
}
