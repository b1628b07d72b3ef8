use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Hotel {
    pub id: i64,
    pub city: String,
    pub country: String,
    pub postal_code: Option<String>,
}
