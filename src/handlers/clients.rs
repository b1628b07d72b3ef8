use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::ApiError;
use crate::models::client::{Client, CreateClient};

pub async fn get_clients(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY full_name")
        .fetch_all(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(clients))
}

pub async fn create_client(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateClient>,
) -> Result<HttpResponse, ApiError> {
    body.validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO clients (full_name, email, address, city, postal_code, phone) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&body.full_name)
    .bind(&body.email)
    .bind(&body.address)
    .bind(&body.city)
    .bind(&body.postal_code)
    .bind(&body.phone)
    .fetch_one(pool.get_ref())
    .await
    .map_err(|e| ApiError::on_unique_violation(e, "email already registered"))?;

    let body = body.into_inner();
    Ok(HttpResponse::Created().json(Client {
        id,
        full_name: body.full_name,
        email: body.email,
        address: body.address,
        city: body.city,
        postal_code: body.postal_code,
        phone: body.phone,
    }))
}
