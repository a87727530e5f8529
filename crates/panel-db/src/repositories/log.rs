//! PostgreSQL implementation of LogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use panel_core::entities::LogEntry;
use panel_core::traits::{LogFilter, LogRepository, PageRequest, RepoResult};

use crate::models::LogModel;
use crate::query::build_log_query;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgLogRepository {
    pool: PgPool,
}

impl PgLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogRepository for PgLogRepository {
    #[instrument(skip(self))]
    async fn search(&self, filter: &LogFilter, page: PageRequest) -> RepoResult<Vec<LogEntry>> {
        let mut query = build_log_query(filter, page);

        let results = query
            .build_query_as::<LogModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(LogEntry::from).collect())
    }
}
