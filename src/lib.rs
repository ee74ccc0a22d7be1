use leptos::{mount_to_body, view};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, get_logger};

pub mod macros;

pub mod app;
pub mod currency;
pub mod event_utils;
pub mod global_state;
pub mod time_utils;
pub mod view_state;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use presentation::SeatMapApi;

/// Wire logging and mount the seat map page
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(app::LeptosLogger::new(console)));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Seat map starting");

    mount_to_body(|| view! { <App /> });
}
