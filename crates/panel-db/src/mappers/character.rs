//! Character and vehicle models -> entities

use panel_core::entities::{Character, Vehicle};

use crate::models::{CharacterModel, VehicleModel};

impl From<CharacterModel> for Character {
    fn from(model: CharacterModel) -> Self {
        Character {
            character_id: model.character_id,
            steam_identifier: model.steam_identifier,
            character_slot: model.character_slot,
            gender: model.gender,
            first_name: model.first_name,
            last_name: model.last_name,
            date_of_birth: model.date_of_birth,
            cash: model.cash,
            bank: model.bank,
            stocks_balance: model.stocks_balance,
            job_name: model.job_name,
            department_name: model.department_name,
            position_name: model.position_name,
            backstory: model.backstory,
            character_deleted: model.character_deleted,
            character_deletion_timestamp: model.character_deletion_timestamp,
        }
    }
}

impl From<VehicleModel> for Vehicle {
    fn from(model: VehicleModel) -> Self {
        Vehicle {
            vehicle_id: model.vehicle_id,
            owner_cid: model.owner_cid,
            model_name: model.model_name,
            plate: model.plate,
            garage_identifier: model.garage_identifier,
            mileage: model.mileage,
        }
    }
}
