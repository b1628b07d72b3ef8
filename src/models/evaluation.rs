use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
pub struct Evaluation {
    pub id: i64,
    pub evaluation_date: chrono::NaiveDate,
    pub rating: i64,
    pub comment: Option<String>,
    pub reservation_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEvaluation {
    pub evaluation_date: chrono::NaiveDate,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i64,
    pub comment: Option<String>,
}
