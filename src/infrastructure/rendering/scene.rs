use crate::domain::logging::LogComponent;
use crate::domain::seat_map::services::SeatVisual;
use crate::domain::state::SeatMapSession;
use crate::domain::venue::{Point, SeatCatalog, SeatId, SectionId};
use crate::log_trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Catalogs at least this big are resolved on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 2_000;

/// One seat, ready to be emitted as SVG
#[derive(Debug, Clone, PartialEq)]
pub struct SeatGlyph {
    pub seat_id: SeatId,
    pub center: Point,
    pub radius: f64,
    pub visual: SeatVisual,
}

impl SeatGlyph {
    /// Changes whenever anything visible about the seat changes; used to
    /// key the keyed list in the view so untouched seats are not redrawn.
    pub fn key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.seat_id, self.visual.fill, self.visual.opacity, self.visual.stroke_width, self.visual.interactive
        )
    }
}

/// Section caption
#[derive(Debug, Clone, PartialEq)]
pub struct SectionCaption {
    pub section_id: SectionId,
    pub text: String,
    pub position: Point,
}

/// Resolve glyphs for every seat in catalog order.
pub fn build_seat_glyphs(session: &SeatMapSession) -> Vec<SeatGlyph> {
    let radius = session.config().seat_radius;
    let seats: Vec<_> = session.catalog().seats().collect();
    let glyph = |r: &crate::domain::venue::SeatRef<'_>| SeatGlyph {
        seat_id: r.seat.id.clone(),
        center: r.seat.position(),
        radius,
        visual: session.seat_visual(*r),
    };

    #[cfg(feature = "parallel")]
    let glyphs: Vec<SeatGlyph> = if seats.len() >= PARALLEL_THRESHOLD {
        log_trace!(LogComponent::Infrastructure("Scene"), "resolving {} seats in parallel", seats.len());
        seats.par_iter().map(glyph).collect()
    } else {
        seats.iter().map(glyph).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let glyphs: Vec<SeatGlyph> = {
        log_trace!(LogComponent::Infrastructure("Scene"), "resolving {} seats", seats.len());
        seats.iter().map(glyph).collect()
    };

    glyphs
}

pub fn build_section_captions(catalog: &SeatCatalog) -> Vec<SectionCaption> {
    catalog
        .sections()
        .iter()
        .map(|s| SectionCaption {
            section_id: s.id.clone(),
            text: s.name.clone(),
            position: s.caption_position(),
        })
        .collect()
}

/// SVG path of the left half of a disk (split along the vertical diameter)
pub fn left_half_disk_path(center: Point, radius: f64) -> String {
    format!(
        "M {cx} {top} A {r} {r} 0 0 0 {cx} {bottom} Z",
        cx = center.x,
        top = center.y - radius,
        bottom = center.y + radius,
        r = radius
    )
}

/// SVG path of the right half of a disk
pub fn right_half_disk_path(center: Point, radius: f64) -> String {
    format!(
        "M {cx} {top} A {r} {r} 0 0 1 {cx} {bottom} Z",
        cx = center.x,
        top = center.y - radius,
        bottom = center.y + radius,
        r = radius
    )
}
