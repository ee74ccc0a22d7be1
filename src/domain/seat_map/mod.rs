//! Seat map aggregate: viewport value objects, selection/filter/hover state
//! and the pure derivations rendered on top of the venue catalog.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
