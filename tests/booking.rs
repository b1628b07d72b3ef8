//! Booking invariant tests against the seeded schema.
//!
//! Seed fixtures used here: room 1 is room 201 (Paris), reserved
//! 2025-06-15 to 2025-06-18; room 2 is room 502 (Lyon), reserved
//! 2025-07-01 to 2025-07-05.

mod common;

use common::{date, setup_pool};
use hotel_manager::booking;
use hotel_manager::error::ApiError;

#[actix_web::test]
async fn overlap_uses_half_open_intervals() {
    let pool = setup_pool().await;

    // Overlaps the 06-15..06-18 stay on both sides.
    assert!(!booking::is_available(&pool, 1, date("2025-06-16"), date("2025-06-20"))
        .await
        .unwrap());
    assert!(!booking::is_available(&pool, 1, date("2025-06-10"), date("2025-06-16"))
        .await
        .unwrap());
    assert!(!booking::is_available(&pool, 1, date("2025-06-15"), date("2025-06-18"))
        .await
        .unwrap());

    // Same-day turnover: departure == existing arrival and vice versa.
    assert!(booking::is_available(&pool, 1, date("2025-06-18"), date("2025-06-20"))
        .await
        .unwrap());
    assert!(booking::is_available(&pool, 1, date("2025-06-13"), date("2025-06-15"))
        .await
        .unwrap());
}

#[actix_web::test]
async fn available_rooms_excludes_overlapping_and_orders_by_city_then_number() {
    let pool = setup_pool().await;

    // No seeded reservation touches this window.
    let all = booking::list_available_rooms(&pool, date("2025-06-20"), date("2025-06-25"))
        .await
        .unwrap();
    let numbers: Vec<i64> = all.iter().map(|r| r.room_number).collect();
    assert_eq!(numbers, vec![104, 307, 410, 502, 101, 201, 202, 305]);
    assert!(all[0].city == "Lyon" && all[7].city == "Paris");

    // Room 502 (Lyon) is reserved 2025-07-01..2025-07-05.
    let rooms = booking::list_available_rooms(&pool, date("2025-07-01"), date("2025-07-03"))
        .await
        .unwrap();
    let numbers: Vec<i64> = rooms.iter().map(|r| r.room_number).collect();
    assert_eq!(numbers, vec![104, 307, 410, 101, 201, 202, 305]);
}

#[actix_web::test]
async fn book_inserts_and_identical_retry_conflicts() {
    let pool = setup_pool().await;

    let reservation = booking::book(&pool, 1, 1, date("2025-12-01"), date("2025-12-05"))
        .await
        .unwrap();
    assert_eq!(reservation.client_id, 1);
    assert_eq!(reservation.room_id, 1);

    let err = booking::book(&pool, 1, 1, date("2025-12-01"), date("2025-12-05"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));

    // The retry must not have inserted a second row.
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM reservations WHERE room_id = 1 AND arrival_date = '2025-12-01'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
}

#[actix_web::test]
async fn book_allows_same_day_turnover() {
    let pool = setup_pool().await;

    // Room 1 is occupied until 2025-06-18; checking in that day is fine.
    booking::book(&pool, 2, 1, date("2025-06-18"), date("2025-06-20"))
        .await
        .unwrap();
}

#[actix_web::test]
async fn book_rejects_invalid_stays_before_storage() {
    let pool = setup_pool().await;

    let err = booking::book(&pool, 1, 1, date("2025-12-01"), date("2025-12-01"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = booking::book(&pool, 1, 1, date("2025-12-05"), date("2025-12-01"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[actix_web::test]
async fn book_reports_missing_client_or_room() {
    let pool = setup_pool().await;

    let err = booking::book(&pool, 999, 1, date("2025-12-01"), date("2025-12-05"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let err = booking::book(&pool, 1, 999, date("2025-12-01"), date("2025-12-05"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[actix_web::test]
async fn schema_trigger_blocks_out_of_band_overlapping_insert() {
    let pool = setup_pool().await;

    // Bypass the booking layer entirely; the trigger must still refuse.
    let err = sqlx::query(
        "INSERT INTO reservations (arrival_date, departure_date, client_id, room_id) \
         VALUES ('2025-06-16', '2025-06-17', 1, 1)",
    )
    .execute(&pool)
    .await
    .unwrap_err();

    match err {
        sqlx::Error::Database(db) => assert!(db.message().contains("overlapping")),
        other => panic!("expected database error, got {other:?}"),
    }
}

#[actix_web::test]
async fn seed_is_idempotent() {
    let pool = setup_pool().await;

    hotel_manager::db::seed::seed(&pool).await.unwrap();

    let clients: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
        .fetch_one(&pool)
        .await
        .unwrap();
    let reservations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(clients, 5);
    assert_eq!(reservations, 8);
}
