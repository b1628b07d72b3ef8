use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::ApiError;
use crate::models::evaluation::{CreateEvaluation, Evaluation};

pub async fn get_evaluation(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let reservation_id = path.into_inner();

    let evaluation =
        sqlx::query_as::<_, Evaluation>("SELECT * FROM evaluations WHERE reservation_id = ?")
            .bind(reservation_id)
            .fetch_optional(pool.get_ref())
            .await?
            .ok_or_else(|| ApiError::not_found("no evaluation for this reservation"))?;

    Ok(HttpResponse::Ok().json(evaluation))
}

pub async fn create_evaluation(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<CreateEvaluation>,
) -> Result<HttpResponse, ApiError> {
    let reservation_id = path.into_inner();

    body.validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let reservation: Option<i64> = sqlx::query_scalar("SELECT id FROM reservations WHERE id = ?")
        .bind(reservation_id)
        .fetch_optional(pool.get_ref())
        .await?;
    if reservation.is_none() {
        return Err(ApiError::not_found("reservation not found"));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO evaluations (evaluation_date, rating, comment, reservation_id) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(body.evaluation_date)
    .bind(body.rating)
    .bind(&body.comment)
    .bind(reservation_id)
    .fetch_one(pool.get_ref())
    .await
    .map_err(|e| ApiError::on_unique_violation(e, "reservation already has an evaluation"))?;

    let body = body.into_inner();
    Ok(HttpResponse::Created().json(Evaluation {
        id,
        evaluation_date: body.evaluation_date,
        rating: body.rating,
        comment: body.comment,
        reservation_id,
    }))
}
