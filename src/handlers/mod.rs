use actix_web::web;

pub mod clients;
pub mod evaluations;
pub mod hotels;
pub mod reservations;
pub mod rooms;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/hotels")
            .route("", web::get().to(hotels::get_hotels))
            .route("/{id}", web::get().to(hotels::get_hotel_by_id))
            .route("/{id}/services", web::get().to(hotels::get_hotel_services)),
    )
    .service(
        web::scope("/clients")
            .route("", web::get().to(clients::get_clients))
            .route("", web::post().to(clients::create_client)),
    )
    .service(web::scope("/rooms").route("/available", web::get().to(rooms::get_available_rooms)))
    .service(
        web::scope("/reservations")
            .route("", web::get().to(reservations::get_reservations))
            .route("", web::post().to(reservations::create_reservation))
            .route(
                "/{id}/evaluation",
                web::get().to(evaluations::get_evaluation),
            )
            .route(
                "/{id}/evaluation",
                web::post().to(evaluations::create_evaluation),
            ),
    );
}
