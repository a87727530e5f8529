//! PostgreSQL implementation of BanRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use panel_core::entities::Ban;
use panel_core::error::DomainError;
use panel_core::traits::{BanRepository, NewBan, PageRequest, RepoResult};

use crate::models::BanModel;

use super::error::{map_db_error, map_unique_violation};

const BAN_COLUMNS: &str =
    "id, ban_hash, identifier, creator_name, creator_identifier, reason, timestamp, expire";

/// PostgreSQL implementation of BanRepository
#[derive(Clone)]
pub struct PgBanRepository {
    pool: PgPool,
}

impl PgBanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BanRepository for PgBanRepository {
    #[instrument(skip(self))]
    async fn find_by_identifiers(&self, identifiers: &[String]) -> RepoResult<Vec<Ban>> {
        if identifiers.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, BanModel>(&format!(
            r"
            SELECT {BAN_COLUMNS} FROM user_bans
            WHERE identifier = ANY($1)
            ORDER BY timestamp DESC, id
            "
        ))
        .bind(identifiers)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Ban::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_hash(&self, ban_hash: &str) -> RepoResult<Vec<Ban>> {
        let results = sqlx::query_as::<_, BanModel>(&format!(
            "SELECT {BAN_COLUMNS} FROM user_bans WHERE ban_hash = $1 ORDER BY id"
        ))
        .bind(ban_hash)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Ban::from).collect())
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Vec<Ban>> {
        // one row per hash, preferring the steam identifier row
        let results = sqlx::query_as::<_, BanModel>(&format!(
            r"
            SELECT {BAN_COLUMNS} FROM (
                SELECT DISTINCT ON (ban_hash) {BAN_COLUMNS}
                FROM user_bans
                ORDER BY ban_hash, (identifier LIKE 'steam:%') DESC, id
            ) bans
            ORDER BY timestamp DESC, id DESC
            LIMIT $1 OFFSET $2
            "
        ))
        .bind(page.fetch_limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Ban::from).collect())
    }

    #[instrument(skip(self, bans), fields(count = bans.len()))]
    async fn create_many(&self, bans: &[NewBan]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for ban in bans {
            sqlx::query(
                r"
                INSERT INTO user_bans (ban_hash, identifier, creator_name, creator_identifier, reason, expire)
                VALUES ($1, $2, $3, $4, $5, $6)
                ",
            )
            .bind(&ban.ban_hash)
            .bind(&ban.identifier)
            .bind(&ban.creator_name)
            .bind(&ban.creator_identifier)
            .bind(&ban.reason)
            .bind(ban.expire)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::AlreadyBanned))?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_hash(&self, ban_hash: &str) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM user_bans WHERE ban_hash = $1")
            .bind(ban_hash)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
