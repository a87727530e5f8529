//! Log listing service

use panel_core::{LogEntry, LogFilter, PageRequest, LOG_PAGE_SIZE};
use std::time::Instant;
use tracing::instrument;

use crate::dto::{LogListResponse, LogQuery, LogResponse, PageLinks};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::names::NameService;

pub struct LogService<'a> {
    ctx: &'a ServiceContext,
}

fn log_identifier(entry: &LogEntry) -> &str {
    &entry.identifier
}

impl<'a> LogService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of filtered logs, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, query: LogQuery) -> ServiceResult<LogListResponse> {
        let started = Instant::now();

        let filter = LogFilter::from_raw(
            query.identifier.as_deref(),
            query.before.as_deref(),
            query.after.as_deref(),
            query.server.as_deref(),
            query.action.as_deref(),
            query.details.as_deref(),
        );
        let page = PageRequest::new(query.page.unwrap_or(1), LOG_PAGE_SIZE);

        let mut entries = self.ctx.log_repo().search(&filter, page).await?;
        let has_more = entries.len() > page.per_page as usize;
        entries.truncate(page.per_page as usize);

        let elapsed = started.elapsed().as_millis();

        let player_map = NameService::new(self.ctx)
            .player_name_map(&entries, &[log_identifier])
            .await?;

        Ok(LogListResponse {
            logs: entries.into_iter().map(LogResponse::from).collect(),
            filters: query,
            links: PageLinks {
                prev: page.prev_page(),
                next: page.next_page(has_more),
            },
            time: u64::try_from(elapsed).unwrap_or(u64::MAX),
            player_map,
            page: page.page,
        })
    }
}
