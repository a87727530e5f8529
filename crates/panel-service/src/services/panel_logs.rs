//! Panel log listing and recording

use panel_core::{NewPanelLog, PageRequest, Player};
use tracing::{info, instrument};

use crate::dto::{PageResponse, PanelLogResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct PanelLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PanelLogService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Panel logs newest first, optionally only those targeting one identifier
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        target_identifier: Option<&str>,
        page: PageRequest,
    ) -> ServiceResult<PageResponse<PanelLogResponse>> {
        let target = target_identifier.map(str::trim).filter(|t| !t.is_empty());
        let rows = self.ctx.panel_log_repo().list(target, page).await?;
        Ok(PageResponse::from_lookahead(rows, page).map(PanelLogResponse::from))
    }

    /// Record a staff action against a player
    pub async fn record(
        &self,
        staff: &Player,
        target_identifier: &str,
        action: &str,
        log: String,
    ) -> ServiceResult<()> {
        self.ctx
            .panel_log_repo()
            .create(&NewPanelLog {
                source_identifier: staff.steam_identifier.clone(),
                target_identifier: target_identifier.to_string(),
                action: action.to_string(),
                log,
            })
            .await?;

        info!(
            staff = %staff.steam_identifier,
            target = %target_identifier,
            action,
            "Recorded panel log"
        );
        Ok(())
    }
}
