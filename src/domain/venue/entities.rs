use super::value_objects::{
    LabeledRect, Point, Price, Rect, SeatId, SeatStatus, SectionId, SlotStatus, TierId,
};
use crate::domain::seat_map::value_objects::SeatMapConfig;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ценовая категория
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTier {
    pub id: TierId,
    pub price: Price,
    pub color: String,
    #[serde(default)]
    pub name: String,
}

/// Место в зале. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: SeatId,
    pub row: String,
    pub number: u32,
    pub x: f64,
    pub y: f64,
    pub price_tier_id: TierId,
    #[serde(default)]
    pub status: SeatStatus,
    #[serde(default)]
    pub is_restricted_view: bool,
}

impl Seat {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_booked(&self) -> bool {
        self.status == SeatStatus::Booked
    }

    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }

    /// Row letter followed by seat number, e.g. `B12`
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    pub name: String,
    #[serde(default)]
    pub label_position: Option<Point>,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

impl Section {
    /// Where the section caption goes. Falls back to 30 units above the first
    /// seat, or a fixed spot when the section is empty.
    pub fn caption_position(&self) -> Point {
        if let Some(position) = self.label_position {
            return position;
        }
        match self.seats.first() {
            Some(seat) => Point::new(200.0, seat.y - 30.0),
            None => Point::new(200.0, 50.0),
        }
    }
}

/// Date chip on the schedule picker
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOption {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub is_selected: bool,
}

impl DateOption {
    /// Second token of `date` ("Oct 27" -> "27"), the whole string otherwise.
    pub fn short_date(&self) -> &str {
        self.date.split_whitespace().nth(1).unwrap_or(&self.date)
    }
}

/// Show time on the schedule picker
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub status: String,
}

impl TimeSlot {
    pub fn slot_status(&self) -> SlotStatus {
        SlotStatus::from_str(&self.status).unwrap_or(SlotStatus::Unknown)
    }

    pub fn is_selling_out_fast(&self) -> bool {
        self.slot_status() == SlotStatus::SellingOutFast
    }
}

/// The whole venue document as supplied by the data source
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMapData {
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub venue_name: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub dates: Vec<DateOption>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub times: Vec<TimeSlot>,
    #[serde(default)]
    pub price_tiers: Vec<PriceTier>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub background_dots: Vec<Point>,
    #[serde(default)]
    pub stage: Option<Rect>,
    #[serde(default)]
    pub sound_video_area: Option<LabeledRect>,
    #[serde(default)]
    pub config: Option<SeatMapConfig>,
}

impl SeatMapData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Optional lists that may arrive as `null`, a scalar or with broken items:
/// anything that is not a clean array of `T` becomes an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
