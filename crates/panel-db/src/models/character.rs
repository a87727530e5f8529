//! Character and vehicle database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CharacterModel {
    pub character_id: i64,
    pub steam_identifier: String,
    pub character_slot: i32,
    pub gender: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub cash: i64,
    pub bank: i64,
    pub stocks_balance: i64,
    pub job_name: Option<String>,
    pub department_name: Option<String>,
    pub position_name: Option<String>,
    pub backstory: Option<String>,
    pub character_deleted: bool,
    pub character_deletion_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct VehicleModel {
    pub vehicle_id: i64,
    pub owner_cid: i64,
    pub model_name: String,
    pub plate: String,
    pub garage_identifier: Option<String>,
    pub mileage: f64,
}
