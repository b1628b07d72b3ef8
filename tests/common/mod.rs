use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Fresh in-memory database with the production schema and seed data.
/// A single connection keeps every query on the same in-memory store.
pub async fn setup_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    hotel_manager::db::seed::seed(&pool).await.unwrap();

    pool
}

pub fn date(s: &str) -> chrono::NaiveDate {
    s.parse().unwrap()
}
