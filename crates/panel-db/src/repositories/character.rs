//! PostgreSQL implementation of CharacterRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use panel_core::entities::{Character, Vehicle};
use panel_core::traits::{CharacterRepository, PageRequest, RepoResult};

use crate::models::{CharacterModel, VehicleModel};

use super::error::map_db_error;

const CHARACTER_COLUMNS: &str = r"
    character_id, steam_identifier, character_slot, gender, first_name, last_name,
    date_of_birth, cash, bank, stocks_balance, job_name, department_name, position_name,
    backstory, character_deleted, character_deletion_timestamp
";

#[derive(Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, character_id: i64) -> RepoResult<Option<Character>> {
        let result = sqlx::query_as::<_, CharacterModel>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM characters WHERE character_id = $1"
        ))
        .bind(character_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Character::from))
    }

    #[instrument(skip(self))]
    async fn find_by_steam(&self, steam_identifier: &str) -> RepoResult<Vec<Character>> {
        let results = sqlx::query_as::<_, CharacterModel>(&format!(
            r"
            SELECT {CHARACTER_COLUMNS} FROM characters
            WHERE steam_identifier = $1
            ORDER BY character_slot
            "
        ))
        .bind(steam_identifier)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Character::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, query: Option<&str>, page: PageRequest) -> RepoResult<Vec<Character>> {
        let results = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(query) => {
                sqlx::query_as::<_, CharacterModel>(&format!(
                    r"
                    SELECT {CHARACTER_COLUMNS} FROM characters
                    WHERE steam_identifier = $1
                       OR (first_name || ' ' || last_name) ILIKE $2
                    ORDER BY character_id
                    LIMIT $3 OFFSET $4
                    "
                ))
                .bind(query.to_lowercase())
                .bind(format!("%{query}%"))
                .bind(page.fetch_limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, CharacterModel>(&format!(
                    r"
                    SELECT {CHARACTER_COLUMNS} FROM characters
                    ORDER BY character_id
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

        Ok(results.into_iter().map(Character::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_vehicles(&self, character_id: i64) -> RepoResult<Vec<Vehicle>> {
        let results = sqlx::query_as::<_, VehicleModel>(
            r"
            SELECT vehicle_id, owner_cid, model_name, plate, garage_identifier, mileage
            FROM character_vehicles
            WHERE owner_cid = $1
            ORDER BY vehicle_id
            ",
        )
        .bind(character_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Vehicle::from).collect())
    }
}
