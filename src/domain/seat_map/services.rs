use super::entities::FilterState;
use crate::domain::venue::{Point, PriceTier, Seat, Section, SectionId};
use serde::Serialize;
use std::collections::HashMap;
use strum::AsRefStr;

pub const BOOKED_FILL: &str = "#9CA3AF";
pub const FALLBACK_FILL: &str = "#CBD5E1";
pub const RESTRICTED_BACKDROP: &str = "white";
pub const SELECTED_STROKE: &str = "#111827";
pub const DEFAULT_STROKE: &str = "white";

pub const BOOKED_OPACITY: f64 = 0.3;
pub const FILTERED_OPACITY: f64 = 0.2;

/// CSS cursor shown over a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum SeatCursor {
    #[strum(serialize = "pointer")]
    Pointer,
    #[strum(serialize = "not-allowed")]
    NotAllowed,
}

/// How a seat disk is drawn
#[derive(Debug, Clone, PartialEq)]
pub enum SeatShape {
    Disk,
    /// Restricted view: left half in the tier colour, right half in `backdrop`
    SplitDisk { backdrop: &'static str },
}

/// Everything the renderer needs to draw one seat
#[derive(Debug, Clone, PartialEq)]
pub struct SeatVisual {
    pub fill: String,
    pub opacity: f64,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub cursor: SeatCursor,
    pub interactive: bool,
    pub shape: SeatShape,
}

/// Resolve a seat's look from its tier (which may be missing), the active
/// filter and whether it is selected.
pub fn resolve_seat_visual(seat: &Seat, tier: Option<&PriceTier>, filter: &FilterState, selected: bool) -> SeatVisual {
    let booked = seat.is_booked();
    let admitted = filter.admits(&seat.price_tier_id);
    let interactive = !booked && admitted;

    let fill = if booked {
        BOOKED_FILL.to_string()
    } else {
        tier.map(|t| t.color.clone()).unwrap_or_else(|| FALLBACK_FILL.to_string())
    };

    let opacity = if booked {
        BOOKED_OPACITY
    } else if !admitted {
        FILTERED_OPACITY
    } else {
        1.0
    };

    let (stroke, stroke_width) = if selected { (SELECTED_STROKE, 3.0) } else { (DEFAULT_STROKE, 2.0) };

    let shape = if seat.is_restricted_view && !booked {
        SeatShape::SplitDisk { backdrop: RESTRICTED_BACKDROP }
    } else {
        SeatShape::Disk
    };

    SeatVisual {
        fill,
        opacity,
        stroke,
        stroke_width,
        cursor: if interactive { SeatCursor::Pointer } else { SeatCursor::NotAllowed },
        interactive,
        shape,
    }
}

/// Which side of the seat block a row label sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowLabel {
    pub section_id: SectionId,
    pub row: String,
    pub side: LabelSide,
    pub position: Point,
}

/// Row captions on both ends of every (section, row), computed once per
/// catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowLabelIndex {
    labels: Vec<RowLabel>,
}

struct RowExtent {
    y_sum: f64,
    count: usize,
    min_x: f64,
    max_x: f64,
}

impl RowLabelIndex {
    pub fn build(sections: &[Section], offset: f64) -> Self {
        let mut labels = Vec::new();
        for section in sections {
            // rows keep the order in which they first appear
            let mut order: Vec<&str> = Vec::new();
            let mut extents: HashMap<&str, RowExtent> = HashMap::new();
            for seat in &section.seats {
                let extent = extents.entry(seat.row.as_str()).or_insert_with(|| {
                    order.push(seat.row.as_str());
                    RowExtent { y_sum: 0.0, count: 0, min_x: f64::INFINITY, max_x: f64::NEG_INFINITY }
                });
                extent.y_sum += seat.y;
                extent.count += 1;
                extent.min_x = extent.min_x.min(seat.x);
                extent.max_x = extent.max_x.max(seat.x);
            }

            for row in order {
                let extent = &extents[row];
                let y = extent.y_sum / extent.count as f64;
                labels.push(RowLabel {
                    section_id: section.id.clone(),
                    row: row.to_string(),
                    side: LabelSide::Left,
                    position: Point::new(extent.min_x - offset, y),
                });
                labels.push(RowLabel {
                    section_id: section.id.clone(),
                    row: row.to_string(),
                    side: LabelSide::Right,
                    position: Point::new(extent.max_x + offset, y),
                });
            }
        }
        Self { labels }
    }

    pub fn labels(&self) -> &[RowLabel] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn for_section<'a>(&'a self, id: &SectionId) -> impl Iterator<Item = &'a RowLabel> + use<'a> {
        let id = id.clone();
        self.labels.iter().filter(move |l| l.section_id == id)
    }
}
