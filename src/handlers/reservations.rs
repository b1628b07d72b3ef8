use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::booking;
use crate::error::ApiError;
use crate::models::reservation::{CreateReservation, ReservationSummary};

pub async fn get_reservations(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let reservations = sqlx::query_as::<_, ReservationSummary>(
        r#"
        SELECT
            res.id,
            c.full_name AS client_name,
            h.city AS hotel_city,
            r.room_number,
            res.arrival_date,
            res.departure_date
        FROM reservations res
        JOIN clients c ON res.client_id = c.id
        JOIN rooms r ON res.room_id = r.id
        JOIN hotels h ON r.hotel_id = h.id
        ORDER BY res.arrival_date DESC
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(reservations))
}

pub async fn create_reservation(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateReservation>,
) -> Result<HttpResponse, ApiError> {
    let reservation = booking::book(
        pool.get_ref(),
        body.client_id,
        body.room_id,
        body.arrival_date,
        body.departure_date,
    )
    .await?;

    Ok(HttpResponse::Created().json(reservation))
}
