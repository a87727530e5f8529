//! PostgreSQL implementation of PlayerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use panel_core::entities::Player;
use panel_core::traits::{PageRequest, PlayerRepository, PlayerSearch, RepoResult};

use crate::models::{PlayerModel, PlayerNameModel};

use super::error::map_db_error;

const PLAYER_COLUMNS: &str = r"
    user_id, steam_identifier, player_name, identifiers, is_staff, is_super_admin,
    is_trusted, is_panel_trusted, is_debugger, is_soft_banned, playtime, total_joins,
    priority_level, last_connection
";

/// PostgreSQL implementation of PlayerRepository
#[derive(Clone)]
pub struct PgPlayerRepository {
    pool: PgPool,
}

impl PgPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PgPlayerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, user_id: i64) -> RepoResult<Option<Player>> {
        let result = sqlx::query_as::<_, PlayerModel>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Player::from))
    }

    #[instrument(skip(self))]
    async fn find_by_steam(&self, steam_identifier: &str) -> RepoResult<Option<Player>> {
        let result = sqlx::query_as::<_, PlayerModel>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM users WHERE steam_identifier = $1"
        ))
        .bind(steam_identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Player::from))
    }

    #[instrument(skip(self))]
    async fn search(&self, search: &PlayerSearch, page: PageRequest) -> RepoResult<Vec<Player>> {
        let results = match search.query.as_deref() {
            Some(query) if search.is_steam_lookup() => {
                sqlx::query_as::<_, PlayerModel>(&format!(
                    r"
                    SELECT {PLAYER_COLUMNS} FROM users
                    WHERE steam_identifier = $1
                    ORDER BY user_id
                    LIMIT $2 OFFSET $3
                    "
                ))
                .bind(query.to_lowercase())
                .bind(page.fetch_limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await
            }
            Some(query) => {
                sqlx::query_as::<_, PlayerModel>(&format!(
                    r"
                    SELECT {PLAYER_COLUMNS} FROM users
                    WHERE player_name ILIKE $1
                    ORDER BY user_id
                    LIMIT $2 OFFSET $3
                    "
                ))
                .bind(format!("%{query}%"))
                .bind(page.fetch_limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, PlayerModel>(&format!(
                    r"
                    SELECT {PLAYER_COLUMNS} FROM users
                    ORDER BY user_id
                    LIMIT $1 OFFSET $2
                    "
                ))
                .bind(page.fetch_limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Player::from).collect())
    }

    #[instrument(skip(self), fields(count = steam_identifiers.len()))]
    async fn find_names(&self, steam_identifiers: &[String]) -> RepoResult<Vec<(String, String)>> {
        if steam_identifiers.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, PlayerNameModel>(
            r"
            SELECT steam_identifier, player_name
            FROM users
            WHERE steam_identifier = ANY($1)
            ",
        )
        .bind(steam_identifiers)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|row| (row.steam_identifier, row.player_name))
            .collect())
    }
}
