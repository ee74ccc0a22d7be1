use super::value_objects::ScreenPoint;
use crate::currency::format_inr;
use crate::domain::venue::{Price, PriceTier, SeatCatalog, SeatId, SeatRef, TierId, TimeSlot};
use serde::Serialize;
use std::collections::HashSet;

/// Why a click on a seat did not change the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    UnknownSeat,
    Booked,
    FilteredOut,
}

/// Outcome of a selection mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Added(SeatId),
    Removed(SeatId),
    Ignored(RejectReason),
}

/// Active price-tier filter. `None` admits every tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: Option<TierId>,
}

impl FilterState {
    pub fn active(&self) -> Option<&TierId> {
        self.active.as_ref()
    }

    /// Picking the active tier again clears the filter.
    pub fn toggle(&mut self, tier: TierId) {
        self.active = match self.active.take() {
            Some(current) if current == tier => None,
            _ => Some(tier),
        };
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn admits(&self, tier: &TierId) -> bool {
        self.active.as_ref().is_none_or(|active| active == tier)
    }
}

/// A selected seat joined with its section and tier, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedSeat {
    pub id: SeatId,
    pub label: String,
    pub section_name: String,
    pub tier_id: TierId,
    pub tier_name: Option<String>,
    pub price: Price,
}

/// Выбранные места в порядке выбора
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    order: Vec<SeatId>,
    members: HashSet<SeatId>,
}

impl SelectionState {
    pub fn contains(&self, id: &SeatId) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Selected ids in insertion order
    pub fn ids(&self) -> &[SeatId] {
        &self.order
    }

    /// Flip membership of an available seat admitted by `filter`; anything
    /// else leaves the selection untouched.
    pub fn toggle(&mut self, catalog: &SeatCatalog, filter: &FilterState, id: &SeatId) -> SelectionChange {
        let Some(SeatRef { seat, .. }) = catalog.seat(id) else {
            return SelectionChange::Ignored(RejectReason::UnknownSeat);
        };
        if seat.is_booked() {
            return SelectionChange::Ignored(RejectReason::Booked);
        }
        if !filter.admits(&seat.price_tier_id) {
            return SelectionChange::Ignored(RejectReason::FilteredOut);
        }
        if self.remove(id) {
            SelectionChange::Removed(id.clone())
        } else {
            self.members.insert(id.clone());
            self.order.push(id.clone());
            SelectionChange::Added(id.clone())
        }
    }

    /// Drop a seat whatever the filter says (trash button on the list).
    pub fn remove(&mut self, id: &SeatId) -> bool {
        if !self.members.remove(id) {
            return false;
        }
        self.order.retain(|s| s != id);
        true
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    pub fn details(&self, catalog: &SeatCatalog) -> Vec<SelectedSeat> {
        self.order
            .iter()
            .filter_map(|id| catalog.seat(id))
            .map(|SeatRef { seat, section }| {
                let tier = catalog.tier(&seat.price_tier_id);
                SelectedSeat {
                    id: seat.id.clone(),
                    label: seat.label(),
                    section_name: section.name.clone(),
                    tier_id: seat.price_tier_id.clone(),
                    tier_name: tier.map(|t| t.name.clone()),
                    price: tier.map(|t| t.price).unwrap_or(Price::ZERO),
                }
            })
            .collect()
    }

    /// Sum of tier prices; seats with an unknown tier count as zero.
    pub fn total(&self, catalog: &SeatCatalog) -> Price {
        self.order
            .iter()
            .filter_map(|id| catalog.seat(id))
            .filter_map(|r| catalog.tier(&r.seat.price_tier_id))
            .map(|t| t.price)
            .sum()
    }
}

/// Содержимое всплывающей подсказки над местом
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipData {
    pub seat_id: SeatId,
    pub title: String,
    pub restricted: bool,
    pub price_label: String,
    pub x: f64,
    pub y: f64,
}

impl TooltipData {
    pub fn new(seat: SeatRef<'_>, tier: Option<&PriceTier>, at: ScreenPoint) -> Self {
        Self {
            seat_id: seat.seat.id.clone(),
            title: format!("{} — {}", seat.section.name, seat.seat.label()),
            restricted: seat.seat.is_restricted_view,
            price_label: tier.map(|t| format_inr(t.price.value())).unwrap_or_else(|| "—".to_string()),
            x: at.x,
            y: at.y,
        }
    }

    pub fn formatted_text(&self) -> String {
        if self.restricted {
            format!("{}\nRestricted view\n{}", self.title, self.price_label)
        } else {
            format!("{}\n{}", self.title, self.price_label)
        }
    }
}

/// Hover is last-write-wins: one tooltip at most.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    tooltip: Option<TooltipData>,
}

impl HoverState {
    pub fn tooltip(&self) -> Option<&TooltipData> {
        self.tooltip.as_ref()
    }

    /// Booked and unknown seats do not raise a tooltip and leave the current
    /// one as it is. Returns whether the tooltip changed.
    pub fn enter(&mut self, catalog: &SeatCatalog, id: &SeatId, at: ScreenPoint) -> bool {
        let Some(seat) = catalog.seat(id) else { return false };
        if seat.seat.is_booked() {
            return false;
        }
        let tier = catalog.tier(&seat.seat.price_tier_id);
        self.tooltip = Some(TooltipData::new(seat, tier, at));
        true
    }

    pub fn leave(&mut self) -> bool {
        self.tooltip.take().is_some()
    }
}

/// Date and time picks on the schedule panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSelection {
    pub date_index: usize,
    pub time_index: usize,
}

impl Default for ScheduleSelection {
    fn default() -> Self {
        // second chip is preselected on first render
        Self { date_index: 1, time_index: 1 }
    }
}

impl ScheduleSelection {
    pub fn select_date(&mut self, index: usize, available: usize) -> bool {
        if index >= available {
            return false;
        }
        self.date_index = index;
        true
    }

    pub fn select_time(&mut self, index: usize, available: usize) -> bool {
        if index >= available {
            return false;
        }
        self.time_index = index;
        true
    }

    pub fn time_label<'a>(&self, times: &'a [TimeSlot]) -> &'a str {
        times.get(self.time_index).map(|t| t.time.as_str()).unwrap_or("N/A")
    }
}
