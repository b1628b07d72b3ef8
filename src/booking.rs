//! Booking invariant enforcement.
//!
//! A stay is a half-open interval `[arrival, departure)`: a departure on
//! the same day as another reservation's arrival is not an overlap, so
//! same-day room turnover is allowed. Reservations for one room must be
//! pairwise disjoint. `book` enforces this by re-checking availability
//! and inserting inside a single transaction; the schema additionally
//! carries a trigger that aborts any overlapping insert, so a concurrent
//! writer cannot slip between the check and the insert.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::reservation::Reservation;
use crate::models::room::AvailableRoom;

/// Rejects zero-length and inverted stays before any storage access.
pub fn validate_stay(arrival: NaiveDate, departure: NaiveDate) -> Result<(), ApiError> {
    if departure <= arrival {
        return Err(ApiError::validation(
            "departure date must be after arrival date",
        ));
    }
    Ok(())
}

/// True iff no existing reservation for the room overlaps
/// `[arrival, departure)`.
pub async fn is_available(
    pool: &SqlitePool,
    room_id: i64,
    arrival: NaiveDate,
    departure: NaiveDate,
) -> Result<bool, ApiError> {
    let overlapping: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM reservations \
         WHERE room_id = ? AND arrival_date < ? AND departure_date > ?",
    )
    .bind(room_id)
    .bind(departure)
    .bind(arrival)
    .fetch_one(pool)
    .await?;

    Ok(overlapping == 0)
}

/// All rooms, across all hotels, with no reservation overlapping the
/// requested interval. Ordered by city then room number.
pub async fn list_available_rooms(
    pool: &SqlitePool,
    arrival: NaiveDate,
    departure: NaiveDate,
) -> Result<Vec<AvailableRoom>, ApiError> {
    validate_stay(arrival, departure)?;

    let rooms = sqlx::query_as::<_, AvailableRoom>(
        r#"
        SELECT
            r.id,
            r.room_number,
            h.city,
            t.name AS room_type,
            t.nightly_rate,
            r.floor,
            r.smoking
        FROM rooms r
        JOIN hotels h ON r.hotel_id = h.id
        JOIN room_types t ON r.room_type_id = t.id
        WHERE r.id NOT IN (
            SELECT res.room_id FROM reservations res
            WHERE res.arrival_date < ? AND res.departure_date > ?
        )
        ORDER BY h.city, r.room_number
        "#,
    )
    .bind(departure)
    .bind(arrival)
    .fetch_all(pool)
    .await?;

    Ok(rooms)
}

/// Books a room for a client. The availability check and the insert run
/// in one transaction; an identical retry fails with a conflict rather
/// than double-inserting.
pub async fn book(
    pool: &SqlitePool,
    client_id: i64,
    room_id: i64,
    arrival: NaiveDate,
    departure: NaiveDate,
) -> Result<Reservation, ApiError> {
    validate_stay(arrival, departure)?;

    let mut tx = pool.begin().await?;

    let client: Option<i64> = sqlx::query_scalar("SELECT id FROM clients WHERE id = ?")
        .bind(client_id)
        .fetch_optional(&mut *tx)
        .await?;
    if client.is_none() {
        return Err(ApiError::not_found("client not found"));
    }

    let room: Option<i64> = sqlx::query_scalar("SELECT id FROM rooms WHERE id = ?")
        .bind(room_id)
        .fetch_optional(&mut *tx)
        .await?;
    if room.is_none() {
        return Err(ApiError::not_found("room not found"));
    }

    let overlapping: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM reservations \
         WHERE room_id = ? AND arrival_date < ? AND departure_date > ?",
    )
    .bind(room_id)
    .bind(departure)
    .bind(arrival)
    .fetch_one(&mut *tx)
    .await?;
    if overlapping > 0 {
        return Err(ApiError::conflict(
            "room is no longer available for these dates",
        ));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO reservations (arrival_date, departure_date, client_id, room_id) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(arrival)
    .bind(departure)
    .bind(client_id)
    .bind(room_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| match &e {
        // The no-overlap trigger fires if another writer booked the room
        // between our check and this insert.
        sqlx::Error::Database(db) if db.message().contains("overlapping") => {
            ApiError::conflict("room is no longer available for these dates")
        }
        _ => ApiError::Storage(e),
    })?;

    tx.commit().await?;

    Ok(Reservation {
        id,
        arrival_date: arrival,
        departure_date: departure,
        client_id,
        room_id,
    })
}
