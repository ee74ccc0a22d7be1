pub mod seat_map_service;

pub use seat_map_service::SeatMapService;
