//! Player warnings and notes

use panel_core::{DomainError, NewWarning, Player, WarningType};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateWarningRequest, WarningResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::panel_logs::PanelLogService;
use super::player::PlayerService;

pub struct WarningService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WarningService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Warnings of a player, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, steam_identifier: &str) -> ServiceResult<Vec<WarningResponse>> {
        let player = PlayerService::new(self.ctx).find_player(steam_identifier).await?;
        let warnings = self.ctx.warning_repo().find_by_player(player.user_id).await?;
        Ok(warnings.into_iter().map(WarningResponse::from).collect())
    }

    #[instrument(skip(self, staff, request), fields(staff = %staff.steam_identifier))]
    pub async fn create(
        &self,
        staff: &Player,
        steam_identifier: &str,
        request: CreateWarningRequest,
    ) -> ServiceResult<WarningResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let warning_type = match request.warning_type.as_deref() {
            None | Some("") => WarningType::default(),
            Some(raw) => raw
                .parse::<WarningType>()
                .map_err(ServiceError::validation)?,
        };

        let message = request.message.trim().to_string();
        if message.is_empty() {
            return Err(ServiceError::validation("Message must not be blank"));
        }

        let player = PlayerService::new(self.ctx).find_player(steam_identifier).await?;

        let warning = self
            .ctx
            .warning_repo()
            .create(&NewWarning {
                player_id: player.user_id,
                issuer_id: staff.user_id,
                message,
                warning_type,
            })
            .await?;

        PanelLogService::new(self.ctx)
            .record(
                staff,
                &player.steam_identifier,
                "Added Warning",
                format!(
                    "{} added a {warning_type} to {}",
                    staff.player_name, player.player_name
                ),
            )
            .await?;

        info!(warning_id = warning.id, target = %player.steam_identifier, "Warning added");
        Ok(warning.into())
    }

    /// Delete a warning, allowed for its issuer and super admins
    #[instrument(skip(self, staff), fields(staff = %staff.steam_identifier))]
    pub async fn delete(&self, staff: &Player, warning_id: i64) -> ServiceResult<()> {
        let warning = self
            .ctx
            .warning_repo()
            .find_by_id(warning_id)
            .await?
            .ok_or(DomainError::WarningNotFound(warning_id))?;

        let roles = staff.roles(self.ctx.root_users());
        if !warning.is_issued_by(staff.user_id) && !roles.is_super_admin() {
            return Err(DomainError::NotWarningIssuer.into());
        }

        if !self.ctx.warning_repo().delete(warning_id).await? {
            return Err(DomainError::WarningNotFound(warning_id).into());
        }

        let target = self
            .ctx
            .player_repo()
            .find_by_id(warning.player_id)
            .await?
            .map(|player| player.steam_identifier)
            .unwrap_or_default();

        PanelLogService::new(self.ctx)
            .record(
                staff,
                &target,
                "Removed Warning",
                format!(
                    "{} removed {} #{warning_id}",
                    staff.player_name, warning.warning_type
                ),
            )
            .await?;

        info!(warning_id, "Warning removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, player, FakeDb, FakeGameServers};
    use panel_core::RootUsers;
    use std::sync::Arc;

    const TARGET: &str = "steam:1100001bbbb";

    fn staff(user_id: i64, steam: &str, super_admin: bool) -> Player {
        let mut staff = player(user_id, steam, &format!("Staff {user_id}"));
        staff.is_staff = true;
        staff.is_super_admin = super_admin;
        staff
    }

    fn setup() -> (Arc<FakeDb>, ServiceContext) {
        let db = Arc::new(FakeDb::default());
        db.add_player(player(2, TARGET, "Target"));
        let ctx = context(
            db.clone(),
            Arc::new(FakeGameServers::default()),
            Vec::new(),
            RootUsers::default(),
        );
        (db, ctx)
    }

    fn request(message: &str, warning_type: Option<&str>) -> CreateWarningRequest {
        CreateWarningRequest {
            message: message.to_string(),
            warning_type: warning_type.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (db, ctx) = setup();
        let service = WarningService::new(&ctx);
        let issuer = staff(1, "steam:1100001aaaa", false);

        let warning = service
            .create(&issuer, TARGET, request("Fail RP", None))
            .await
            .unwrap();
        assert_eq!(warning.warning_type, "warning");
        assert_eq!(warning.issuer_id, 1);

        service
            .create(&issuer, TARGET, request("Watch this one", Some("note")))
            .await
            .unwrap();

        let listed = service.list(TARGET).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].warning_type, "note");
        assert_eq!(db.panel_log_actions(), vec!["Added Warning", "Added Warning"]);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_input() {
        let (_db, ctx) = setup();
        let service = WarningService::new(&ctx);
        let issuer = staff(1, "steam:1100001aaaa", false);

        let err = service
            .create(&issuer, TARGET, request("", None))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);

        let err = service
            .create(&issuer, TARGET, request("   ", None))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);

        let err = service
            .create(&issuer, TARGET, request("ok", Some("strike")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);

        let err = service
            .create(&issuer, TARGET, request(&"x".repeat(2001), None))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_delete_permissions() {
        let (db, ctx) = setup();
        let service = WarningService::new(&ctx);
        let issuer = staff(1, "steam:1100001aaaa", false);
        let other = staff(3, "steam:1100001cccc", false);
        let admin = staff(4, "steam:1100001dddd", true);

        let first = service
            .create(&issuer, TARGET, request("one", None))
            .await
            .unwrap();
        let second = service
            .create(&issuer, TARGET, request("two", None))
            .await
            .unwrap();

        let err = service.delete(&other, first.id).await.unwrap_err();
        assert_eq!(err.status_code(), 403);

        service.delete(&issuer, first.id).await.unwrap();
        service.delete(&admin, second.id).await.unwrap();
        assert!(db.warnings.lock().unwrap().is_empty());

        let logs = db.panel_logs.lock().unwrap();
        assert_eq!(logs.last().unwrap().action, "Removed Warning");
        assert_eq!(logs.last().unwrap().target_identifier, TARGET);
        drop(logs);

        let err = service.delete(&admin, second.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
