use super::entities::SeatMapData;
use crate::domain::errors::DataResult;

/// Источник данных о зале (mock JSON, fixtures in tests, an API later)
pub trait SeatMapRepository {
    /// Load one immutable snapshot of the venue
    fn load(&self) -> DataResult<SeatMapData>;
}
