use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct RoomType {
    pub id: i64,
    pub name: String,
    pub nightly_rate: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Room {
    pub id: i64,
    pub room_number: i64,
    pub floor: Option<i64>,
    pub smoking: bool,
    pub hotel_id: Option<i64>,
    pub room_type_id: Option<i64>,
}

/// A room joined with its hotel and type, as returned by the
/// availability search.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct AvailableRoom {
    pub id: i64,
    pub room_number: i64,
    pub city: String,
    pub room_type: String,
    pub nightly_rate: f64,
    pub floor: Option<i64>,
    pub smoking: bool,
}
