//! Character browsing

use panel_core::PageRequest;
use tracing::instrument;

use crate::dto::{
    CharacterResponse, ExtendedCharacterResponse, PageResponse, PlayerResponse, VehicleResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct CharacterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CharacterService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Search by full name, or exactly by steam identifier
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: Option<&str>,
        page: PageRequest,
    ) -> ServiceResult<PageResponse<CharacterResponse>> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let rows = self.ctx.character_repo().search(query, page).await?;
        Ok(PageResponse::from_lookahead(rows, page).map(CharacterResponse::from))
    }

    /// Character with vehicles and owning player
    #[instrument(skip(self))]
    pub async fn detail(&self, character_id: i64) -> ServiceResult<ExtendedCharacterResponse> {
        let character = self
            .ctx
            .character_repo()
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Character", character_id.to_string()))?;

        let vehicles = self.ctx.character_repo().find_vehicles(character_id).await?;
        let player = self
            .ctx
            .player_repo()
            .find_by_steam(&character.steam_identifier)
            .await?;

        Ok(ExtendedCharacterResponse {
            character: CharacterResponse::from(&character),
            vehicles: vehicles.into_iter().map(VehicleResponse::from).collect(),
            player: player.map(PlayerResponse::from),
        })
    }
}
