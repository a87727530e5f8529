//! Vehicle owned by a character

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub vehicle_id: i64,
    /// Owning character id
    pub owner_cid: i64,
    pub model_name: String,
    pub plate: String,
    pub garage_identifier: Option<String>,
    pub mileage: f64,
}
