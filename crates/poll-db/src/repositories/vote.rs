//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use poll_core::entities::Vote;
use poll_core::error::DomainError;
use poll_core::traits::{RepoResult, VoteRepository};
use poll_core::value_objects::Snowflake;

use crate::mappers::vote_with_choices;
use crate::models::VoteModel;

use super::error::{choice_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load selected choice IDs for a vote
    async fn load_choice_ids(&self, vote_id: i64) -> Result<Vec<i64>, DomainError> {
        let choice_ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT choice_id FROM vote_choices WHERE vote_id = $1 ORDER BY choice_id
            ",
        )
        .bind(vote_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(choice_ids)
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find_by_user_and_poll(
        &self,
        user_id: Snowflake,
        poll_id: Snowflake,
    ) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT id, poll_id, user_id, created_at
            FROM votes
            WHERE user_id = $1 AND poll_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(poll_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let choice_ids = self.load_choice_ids(model.id).await?;
                Ok(Some(vote_with_choices(model, choice_ids)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn has_voted(&self, user_id: Snowflake, poll_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM votes WHERE user_id = $1 AND poll_id = $2)
            ",
        )
        .bind(user_id.into_inner())
        .bind(poll_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create_with_choices(&self, vote: &Vote) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // The UNIQUE (poll_id, user_id) constraint catches concurrent
        // duplicates that slipped past the has_voted precheck
        sqlx::query(
            r"
            INSERT INTO votes (id, poll_id, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(vote.id.into_inner())
        .bind(vote.poll_id.into_inner())
        .bind(vote.user_id.into_inner())
        .bind(vote.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::AlreadyVoted {
                poll_id: vote.poll_id,
            })
        })?;

        for choice_id in &vote.choice_ids {
            // Incrementing first doubles as the existence check: zero rows
            // means the choice is missing or belongs to another poll, and
            // the early return rolls the whole vote back
            let result = sqlx::query(
                r"
                UPDATE choices
                SET votes = votes + 1
                WHERE id = $1 AND poll_id = $2
                ",
            )
            .bind(choice_id.into_inner())
            .bind(vote.poll_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            if result.rows_affected() == 0 {
                return Err(choice_not_found(*choice_id));
            }

            sqlx::query(
                r"
                INSERT INTO vote_choices (vote_id, choice_id)
                VALUES ($1, $2)
                ",
            )
            .bind(vote.id.into_inner())
            .bind(choice_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
