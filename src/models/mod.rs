pub mod client;
pub mod evaluation;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod service;
