use sqlx::SqlitePool;

/// Loads the sample dataset on first startup. Skipped whenever any
/// hotel already exists, so reruns leave the database untouched.
pub async fn seed(pool: &SqlitePool) -> sqlx::Result<()> {
    let hotel_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hotels")
        .fetch_one(pool)
        .await?;
    if hotel_count > 0 {
        log::info!("Seed data already present, skipping");
        return Ok(());
    }

    let mut tx = pool.begin().await?;

    for (id, city, country, postal_code) in [
        (1i64, "Paris", "France", "75001"),
        (2, "Lyon", "France", "69002"),
    ] {
        sqlx::query("INSERT INTO hotels (id, city, country, postal_code) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(city)
            .bind(country)
            .bind(postal_code)
            .execute(&mut *tx)
            .await?;
    }

    for (id, name, rate) in [(1i64, "Single", 80.00), (2, "Double", 120.00)] {
        sqlx::query("INSERT INTO room_types (id, name, nightly_rate) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(rate)
            .execute(&mut *tx)
            .await?;
    }

    // Room ids are assigned 1..=8 in insertion order; the reservation
    // fixtures below reference them by that id.
    for (number, floor, smoking, type_id, hotel_id) in [
        (201i64, 2i64, false, 1i64, 1i64),
        (502, 5, true, 1, 2),
        (305, 3, false, 2, 1),
        (410, 4, false, 2, 2),
        (104, 1, true, 2, 2),
        (202, 2, false, 1, 1),
        (307, 3, true, 1, 2),
        (101, 1, false, 1, 1),
    ] {
        sqlx::query(
            "INSERT INTO rooms (room_number, floor, smoking, room_type_id, hotel_id) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(number)
        .bind(floor)
        .bind(smoking)
        .bind(type_id)
        .bind(hotel_id)
        .execute(&mut *tx)
        .await?;
    }

    for (id, address, city, postal_code, email, phone, full_name) in [
        (1i64, "12 Rue de Paris", "Paris", "75001", "jean.dupont@email.fr", "0612345678", "Jean Dupont"),
        (2, "5 Avenue Victor Hugo", "Lyon", "69002", "marie.leroy@email.fr", "0623456789", "Marie Leroy"),
        (3, "8 Boulevard Saint-Michel", "Marseille", "13005", "paul.moreau@email.fr", "0634567890", "Paul Moreau"),
        (4, "27 Rue Nationale", "Lille", "59800", "lucie.martin@email.fr", "0645678901", "Lucie Martin"),
        (5, "3 Rue des Fleurs", "Nice", "06000", "emma.giraud@email.fr", "0656789012", "Emma Giraud"),
    ] {
        sqlx::query(
            "INSERT INTO clients (id, address, city, postal_code, email, phone, full_name) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(address)
        .bind(city)
        .bind(postal_code)
        .bind(email)
        .bind(phone)
        .bind(full_name)
        .execute(&mut *tx)
        .await?;
    }

    for (id, name, price) in [
        (1i64, "Breakfast", 15.00),
        (2, "Airport shuttle", 30.00),
        (3, "Free Wi-Fi", 0.00),
        (4, "Spa and wellness", 50.00),
        (5, "Secure parking", 20.00),
    ] {
        sqlx::query("INSERT INTO services (id, name, price) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(price)
            .execute(&mut *tx)
            .await?;
    }

    for (hotel_id, service_id) in [(1i64, 1i64), (1, 3), (1, 5), (2, 1), (2, 2), (2, 3), (2, 4)] {
        sqlx::query("INSERT INTO hotel_services (hotel_id, service_id) VALUES (?, ?)")
            .bind(hotel_id)
            .bind(service_id)
            .execute(&mut *tx)
            .await?;
    }

    for (id, arrival, departure, client_id, room_id) in [
        (1i64, "2025-06-15", "2025-06-18", 1i64, 1i64),
        (2, "2025-07-01", "2025-07-05", 2, 2),
        (7, "2025-11-12", "2025-11-14", 2, 7),
        (10, "2026-02-01", "2026-02-05", 2, 4),
        (3, "2025-08-10", "2025-08-14", 3, 3),
        (4, "2025-09-05", "2025-09-07", 4, 6),
        (9, "2026-01-15", "2026-01-18", 4, 8),
        (5, "2025-09-20", "2025-09-25", 5, 5),
    ] {
        sqlx::query(
            "INSERT INTO reservations (id, arrival_date, departure_date, client_id, room_id) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(arrival)
        .bind(departure)
        .bind(client_id)
        .bind(room_id)
        .execute(&mut *tx)
        .await?;
    }

    for (id, date, rating, comment, reservation_id) in [
        (1i64, "2025-06-15", 5i64, "Excellent stay, very welcoming staff.", 1i64),
        (2, "2025-07-01", 4, "Clean room, good value for money.", 2),
        (3, "2025-08-10", 3, "Decent stay but noisy at night.", 3),
        (4, "2025-09-05", 5, "Impeccable service, highly recommended.", 4),
        (5, "2025-09-20", 4, "Very good breakfast, well-located hotel.", 5),
    ] {
        sqlx::query(
            "INSERT INTO evaluations (id, evaluation_date, rating, comment, reservation_id) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(date)
        .bind(rating)
        .bind(comment)
        .bind(reservation_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    log::info!("Seed data inserted");
    Ok(())
}
