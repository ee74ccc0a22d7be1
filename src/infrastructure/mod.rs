pub mod data;
pub mod rendering;
pub mod services;

pub use data::StaticSeatMapRepository;
pub use services::{BrowserTimeProvider, ConsoleLogger};
