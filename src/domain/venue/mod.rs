//! Venue aggregate: price tiers, sections and seats as loaded from the data source.

pub mod catalog;
pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use catalog::*;
pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
