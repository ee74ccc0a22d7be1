use crate::domain::errors::DataResult;
use crate::domain::logging::LogComponent;
use crate::domain::venue::{SeatMapData, SeatMapRepository};
use crate::log_debug;

/// Mock venue shipped inside the bundle
const EMBEDDED_SEAT_MAP: &str = include_str!("../../data/seat_map.json");

/// Repository over a JSON document held in memory
#[derive(Debug, Clone)]
pub struct StaticSeatMapRepository {
    source: String,
}

impl StaticSeatMapRepository {
    pub fn embedded() -> Self {
        Self { source: EMBEDDED_SEAT_MAP.to_string() }
    }

    pub fn from_json(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }
}

impl Default for StaticSeatMapRepository {
    fn default() -> Self {
        Self::embedded()
    }
}

impl SeatMapRepository for StaticSeatMapRepository {
    fn load(&self) -> DataResult<SeatMapData> {
        let data = SeatMapData::from_json(&self.source)?;
        log_debug!(
            LogComponent::Infrastructure("StaticRepository"),
            "parsed venue '{}' with {} sections",
            data.venue_name,
            data.sections.len()
        );
        Ok(data)
    }
}
