//! Staff sessions

use panel_core::{DomainError, Player};
use tracing::{debug, instrument};

use crate::dto::{AuthResponse, StaffResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::player::PlayerService;

pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Player behind a token subject, who must be staff
    #[instrument(skip(self))]
    pub async fn staff_member(&self, steam_identifier: &str) -> ServiceResult<Player> {
        let player = self
            .ctx
            .player_repo()
            .find_by_steam(steam_identifier)
            .await?
            .ok_or(DomainError::NotStaff)?;

        if !player.roles(self.ctx.root_users()).is_staff() {
            debug!(steam = %steam_identifier, "Token subject is not staff");
            return Err(DomainError::NotStaff.into());
        }

        Ok(player)
    }

    /// Exchange a refresh token for a new pair
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<AuthResponse> {
        let (steam, tokens) = self.ctx.jwt_service().refresh(refresh_token)?;
        let staff = self.staff_member(steam.as_str()).await?;

        Ok(AuthResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
            staff: self.me(&staff).await,
        })
    }

    /// The authenticated staff member with resolved roles and avatar
    pub async fn me(&self, staff: &Player) -> StaffResponse {
        let avatar = PlayerService::new(self.ctx).steam_avatar(staff).await;

        StaffResponse {
            id: staff.user_id,
            steam_identifier: staff.steam_identifier.clone(),
            player_name: staff.player_name.clone(),
            avatar: Player::avatar_url(avatar.as_deref()),
            roles: staff.roles(self.ctx.root_users()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, player, FakeDb, FakeGameServers};
    use panel_core::{RootUsers, SteamIdentifier, DEFAULT_AVATAR_URL};
    use std::sync::Arc;

    fn setup(root: &[&str]) -> ServiceContext {
        let db = Arc::new(FakeDb::default());
        let mut staff = player(1, "steam:1100001aaaa", "Admin");
        staff.is_staff = true;
        db.add_player(staff);
        db.add_player(player(2, "steam:1100001bbbb", "Regular"));
        db.add_player(player(3, "steam:1100001cccc", "Owner"));
        context(
            db,
            Arc::new(FakeGameServers::default()),
            Vec::new(),
            RootUsers::new(root.iter().copied()),
        )
    }

    #[tokio::test]
    async fn test_staff_member_requires_staff() {
        let ctx = setup(&["steam:1100001cccc"]);
        let service = AuthService::new(&ctx);

        assert!(service.staff_member("steam:1100001aaaa").await.is_ok());
        assert!(service.staff_member("steam:1100001cccc").await.is_ok());

        let err = service.staff_member("steam:1100001bbbb").await.unwrap_err();
        assert_eq!(err.status_code(), 403);

        let err = service.staff_member("steam:1100001ffff").await.unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[tokio::test]
    async fn test_refresh_returns_staff() {
        let ctx = setup(&[]);
        let steam = SteamIdentifier::parse("steam:1100001aaaa").unwrap();
        let pair = ctx.jwt_service().issue(&steam).unwrap();

        let response = AuthService::new(&ctx)
            .refresh(&pair.refresh_token)
            .await
            .unwrap();
        assert_eq!(response.staff.player_name, "Admin");
        assert_eq!(response.staff.avatar, DEFAULT_AVATAR_URL);
        assert!(response.staff.roles.is_staff());
        assert!(!response.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let ctx = setup(&[]);
        let steam = SteamIdentifier::parse("steam:1100001aaaa").unwrap();
        let pair = ctx.jwt_service().issue(&steam).unwrap();

        let err = AuthService::new(&ctx)
            .refresh(&pair.access_token)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
    }
}
