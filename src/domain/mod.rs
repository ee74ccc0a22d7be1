pub mod errors;
pub mod events;
pub mod logging;
pub mod seat_map;
pub mod state;
pub mod venue;
