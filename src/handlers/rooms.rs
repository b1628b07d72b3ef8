use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::booking;
use crate::error::ApiError;

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub arrival: chrono::NaiveDate,
    pub departure: chrono::NaiveDate,
}

pub async fn get_available_rooms(
    pool: web::Data<SqlitePool>,
    params: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse, ApiError> {
    let rooms = booking::list_available_rooms(pool.get_ref(), params.arrival, params.departure).await?;

    Ok(HttpResponse::Ok().json(rooms))
}
