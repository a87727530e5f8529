//! Ban browsing and moderation

use chrono::Utc;
use panel_core::{DomainError, NewBan, PageRequest, Player};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{BanResponse, IssueBanRequest, PageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::panel_logs::PanelLogService;
use super::player::PlayerService;

pub struct BanService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BanService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One row per ban hash, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, page: PageRequest) -> ServiceResult<PageResponse<BanResponse>> {
        let rows = self.ctx.ban_repo().list(page).await?;
        Ok(PageResponse::from_lookahead(rows, page).map(BanResponse::from))
    }

    /// Bans on any identifier the player ever used
    #[instrument(skip(self))]
    pub async fn for_player(&self, steam_identifier: &str) -> ServiceResult<Vec<BanResponse>> {
        let player = PlayerService::new(self.ctx).find_player(steam_identifier).await?;
        let bans = self
            .ctx
            .ban_repo()
            .find_by_identifiers(&player.all_identifiers())
            .await?;
        Ok(bans.iter().map(BanResponse::from).collect())
    }

    /// Ban every bannable identifier of a player under one hash
    #[instrument(skip(self, staff, request), fields(staff = %staff.steam_identifier))]
    pub async fn issue(
        &self,
        staff: &Player,
        steam_identifier: &str,
        request: IssueBanRequest,
    ) -> ServiceResult<Vec<BanResponse>> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let player = PlayerService::new(self.ctx).find_player(steam_identifier).await?;

        let existing = self
            .ctx
            .ban_repo()
            .find_by_identifiers(&player.all_identifiers())
            .await?;
        if player.active_ban(&existing, Utc::now()).is_some() {
            return Err(DomainError::AlreadyBanned.into());
        }

        let ban_hash = Uuid::new_v4().simple().to_string();
        let reason = request
            .reason
            .map(|reason| reason.trim().to_string())
            .filter(|reason| !reason.is_empty());

        let new_bans: Vec<NewBan> = player
            .bannable_identifiers()
            .into_iter()
            .map(|identifier| NewBan {
                ban_hash: ban_hash.clone(),
                identifier,
                creator_name: Some(staff.player_name.clone()),
                creator_identifier: Some(staff.steam_identifier.clone()),
                reason: reason.clone(),
                expire: request.expire,
            })
            .collect();
        self.ctx.ban_repo().create_many(&new_bans).await?;

        let duration = match request.expire {
            Some(seconds) => format!("for {seconds} seconds"),
            None => "permanently".to_string(),
        };
        PanelLogService::new(self.ctx)
            .record(
                staff,
                &player.steam_identifier,
                "Issued Ban",
                format!(
                    "{} banned {} {duration}: {}",
                    staff.player_name,
                    player.player_name,
                    reason.as_deref().unwrap_or("no reason given"),
                ),
            )
            .await?;

        info!(ban_hash = %ban_hash, target = %player.steam_identifier, rows = new_bans.len(), "Ban issued");

        let created = self.ctx.ban_repo().find_by_hash(&ban_hash).await?;
        Ok(created.iter().map(BanResponse::from).collect())
    }

    /// Remove every row of a ban
    #[instrument(skip(self, staff), fields(staff = %staff.steam_identifier))]
    pub async fn lift(&self, staff: &Player, ban_hash: &str) -> ServiceResult<()> {
        let rows = self.ctx.ban_repo().find_by_hash(ban_hash).await?;
        let Some(first) = rows.first() else {
            return Err(ServiceError::not_found("Ban", ban_hash));
        };

        let target = rows
            .iter()
            .find(|ban| ban.identifier.starts_with("steam:"))
            .unwrap_or(first)
            .identifier
            .clone();

        let deleted = self.ctx.ban_repo().delete_by_hash(ban_hash).await?;
        if deleted == 0 {
            return Err(ServiceError::not_found("Ban", ban_hash));
        }

        PanelLogService::new(self.ctx)
            .record(
                staff,
                &target,
                "Removed Ban",
                format!("{} removed ban {ban_hash} from {target}", staff.player_name),
            )
            .await?;

        info!(ban_hash, rows = deleted, "Ban lifted");
        Ok(())
    }
}
