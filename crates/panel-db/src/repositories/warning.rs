//! PostgreSQL implementation of WarningRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use panel_core::entities::Warning;
use panel_core::traits::{NewWarning, RepoResult, WarningRepository};

use crate::models::WarningModel;

use super::error::map_db_error;

const WARNING_COLUMNS: &str =
    "id, player_id, issuer_id, message, warning_type, created_at, updated_at";

#[derive(Clone)]
pub struct PgWarningRepository {
    pool: PgPool,
}

impl PgWarningRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarningRepository for PgWarningRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Warning>> {
        let result = sqlx::query_as::<_, WarningModel>(&format!(
            "SELECT {WARNING_COLUMNS} FROM warnings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Warning::from))
    }

    #[instrument(skip(self))]
    async fn find_by_player(&self, player_id: i64) -> RepoResult<Vec<Warning>> {
        let results = sqlx::query_as::<_, WarningModel>(&format!(
            r"
            SELECT {WARNING_COLUMNS} FROM warnings
            WHERE player_id = $1
            ORDER BY created_at DESC, id DESC
            "
        ))
        .bind(player_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Warning::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_player(&self, player_id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM warnings WHERE player_id = $1 AND warning_type = 'warning'",
        )
        .bind(player_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, warning), fields(player_id = warning.player_id))]
    async fn create(&self, warning: &NewWarning) -> RepoResult<Warning> {
        let result = sqlx::query_as::<_, WarningModel>(&format!(
            r"
            INSERT INTO warnings (player_id, issuer_id, message, warning_type)
            VALUES ($1, $2, $3, $4)
            RETURNING {WARNING_COLUMNS}
            "
        ))
        .bind(warning.player_id)
        .bind(warning.issuer_id)
        .bind(&warning.message)
        .bind(warning.warning_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Warning::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM warnings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
