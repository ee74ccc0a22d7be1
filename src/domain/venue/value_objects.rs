use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Value Object - идентификатор места
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, From, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeatId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - идентификатор ценовой категории
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, From, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct TierId(String);

impl TierId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TierId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - идентификатор секции
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - цена в целых единицах валюты (без копеек)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Deref, Constructor, Serialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Whole rupees from an arbitrary JSON amount: fractions round to the
    /// nearest rupee, negative and non-finite amounts become zero.
    pub fn from_amount(amount: f64) -> Price {
        if amount.is_finite() && amount > 0.0 { Price(amount.round() as u64) } else { Price::ZERO }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        Ok(match number.as_u64() {
            Some(exact) => Price(exact),
            None => Price::from_amount(number.as_f64().unwrap_or_default()),
        })
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

/// Seat availability, fixed for the whole session
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    #[default]
    #[strum(serialize = "available")]
    Available,
    #[strum(serialize = "booked")]
    Booked,
}

/// Point in chart space (the seat-map coordinate system)
#[derive(Debug, Clone, Copy, Default, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance_sq(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Axis-aligned rectangle in chart space
#[derive(Debug, Clone, Copy, Default, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Rectangle with a caption (sound/video desk and the like)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabeledRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub label: String,
}

/// Availability hint on a show time
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString, AsRefStr)]
pub enum SlotStatus {
    #[strum(serialize = "available")]
    Available,
    #[strum(serialize = "selling-out-fast")]
    SellingOutFast,
    #[strum(serialize = "unavailable", serialize = "sold-out")]
    Unavailable,
    #[strum(serialize = "unknown")]
    Unknown,
}
