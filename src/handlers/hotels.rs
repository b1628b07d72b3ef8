use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::hotel::Hotel;
use crate::models::service::Service;

#[derive(Deserialize)]
pub struct HotelSearch {
    pub city: Option<String>,
}

pub async fn get_hotels(
    pool: web::Data<SqlitePool>,
    params: web::Query<HotelSearch>,
) -> Result<HttpResponse, ApiError> {
    let hotels = match &params.city {
        Some(city) => {
            sqlx::query_as::<_, Hotel>(
                "SELECT * FROM hotels WHERE city LIKE '%' || ? || '%' ORDER BY city",
            )
            .bind(city)
            .fetch_all(pool.get_ref())
            .await?
        }
        None => {
            sqlx::query_as::<_, Hotel>("SELECT * FROM hotels ORDER BY city")
                .fetch_all(pool.get_ref())
                .await?
        }
    };

    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn get_hotel_by_id(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let hotel = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = ?")
        .bind(id)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or_else(|| ApiError::not_found("hotel not found"))?;

    Ok(HttpResponse::Ok().json(hotel))
}

pub async fn get_hotel_services(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let hotel: Option<i64> = sqlx::query_scalar("SELECT id FROM hotels WHERE id = ?")
        .bind(id)
        .fetch_optional(pool.get_ref())
        .await?;
    if hotel.is_none() {
        return Err(ApiError::not_found("hotel not found"));
    }

    let services = sqlx::query_as::<_, Service>(
        "SELECT s.id, s.name, s.price FROM services s \
         JOIN hotel_services hs ON hs.service_id = s.id \
         WHERE hs.hotel_id = ? ORDER BY s.name",
    )
    .bind(id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(services))
}
