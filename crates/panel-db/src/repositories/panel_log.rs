//! PostgreSQL implementation of PanelLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use panel_core::entities::PanelLog;
use panel_core::traits::{NewPanelLog, PageRequest, PanelLogRepository, RepoResult};

use crate::models::PanelLogModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgPanelLogRepository {
    pool: PgPool,
}

impl PgPanelLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PanelLogRepository for PgPanelLogRepository {
    #[instrument(skip(self, log), fields(action = %log.action))]
    async fn create(&self, log: &NewPanelLog) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO panel_logs (source_identifier, target_identifier, action, log)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&log.source_identifier)
        .bind(&log.target_identifier)
        .bind(&log.action)
        .bind(&log.log)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        target_identifier: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Vec<PanelLog>> {
        let results = sqlx::query_as::<_, PanelLogModel>(
            r"
            SELECT id, source_identifier, target_identifier, action, log, timestamp
            FROM panel_logs
            WHERE ($1::TEXT IS NULL OR target_identifier = $1)
            ORDER BY timestamp DESC, id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(target_identifier)
        .bind(page.fetch_limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PanelLog::from).collect())
    }
}
