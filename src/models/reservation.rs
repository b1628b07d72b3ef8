use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
pub struct Reservation {
    pub id: i64,
    pub arrival_date: chrono::NaiveDate,
    pub departure_date: chrono::NaiveDate,
    pub client_id: i64,
    pub room_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateReservation {
    pub client_id: i64,
    pub room_id: i64,
    pub arrival_date: chrono::NaiveDate,
    pub departure_date: chrono::NaiveDate,
}

/// A reservation joined with client and room details, as shown in the
/// reservation listing.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct ReservationSummary {
    pub id: i64,
    pub client_name: String,
    pub hotel_city: String,
    pub room_number: i64,
    pub arrival_date: chrono::NaiveDate,
    pub departure_date: chrono::NaiveDate,
}
