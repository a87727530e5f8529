//! Character entity - a player's in-game character

use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
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

impl Character {
    /// First and last name
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Cash plus bank balance
    #[inline]
    pub fn money(&self) -> i64 {
        self.cash + self.bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_money() {
        let character = Character {
            character_id: 1,
            steam_identifier: "steam:1100001aaaa".to_string(),
            character_slot: 1,
            gender: 0,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 1),
            cash: 250,
            bank: 1_000,
            stocks_balance: 0,
            job_name: None,
            department_name: None,
            position_name: None,
            backstory: None,
            character_deleted: false,
            character_deletion_timestamp: None,
        };

        assert_eq!(character.name(), "John Doe");
        assert_eq!(character.money(), 1_250);
    }
}
