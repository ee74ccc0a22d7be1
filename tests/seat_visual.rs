use seat_map_wasm::domain::seat_map::{
    BOOKED_FILL, FALLBACK_FILL, FilterState, RESTRICTED_BACKDROP, SELECTED_STROKE, SeatCursor, SeatShape,
    resolve_seat_visual,
};
use seat_map_wasm::domain::venue::{Price, PriceTier, Seat, SeatStatus};

fn tier(id: &str) -> PriceTier {
    PriceTier { id: id.into(), price: Price::new(500), color: "#F59E0B".to_string(), name: "Gold".to_string() }
}

fn seat(tier: &str, status: SeatStatus, restricted: bool) -> Seat {
    Seat {
        id: "g-D4".into(),
        row: "D".to_string(),
        number: 4,
        x: 100.0,
        y: 200.0,
        price_tier_id: tier.into(),
        status,
        is_restricted_view: restricted,
    }
}

fn filter_on(id: &str) -> FilterState {
    let mut filter = FilterState::default();
    filter.toggle(id.into());
    filter
}

#[test]
fn available_seat_uses_tier_colour() {
    let gold = tier("gold");
    let visual = resolve_seat_visual(&seat("gold", SeatStatus::Available, false), Some(&gold), &FilterState::default(), false);
    assert_eq!(visual.fill, "#F59E0B");
    assert_eq!(visual.opacity, 1.0);
    assert_eq!(visual.stroke_width, 2.0);
    assert_eq!(visual.cursor, SeatCursor::Pointer);
    assert!(visual.interactive);
    assert_eq!(visual.shape, SeatShape::Disk);
}

#[test]
fn booked_seat_is_grey_and_inert() {
    let gold = tier("gold");
    let visual = resolve_seat_visual(&seat("gold", SeatStatus::Booked, true), Some(&gold), &FilterState::default(), false);
    assert_eq!(visual.fill, BOOKED_FILL);
    assert_eq!(visual.opacity, 0.3);
    assert_eq!(visual.cursor.as_ref(), "not-allowed");
    assert!(!visual.interactive);
    // booked wins over restricted view
    assert_eq!(visual.shape, SeatShape::Disk);
}

#[test]
fn filtered_out_seat_keeps_colour_but_fades() {
    let gold = tier("gold");
    let visual = resolve_seat_visual(&seat("gold", SeatStatus::Available, false), Some(&gold), &filter_on("silver"), false);
    assert_eq!(visual.fill, "#F59E0B");
    assert_eq!(visual.opacity, 0.2);
    assert_eq!(visual.cursor, SeatCursor::NotAllowed);
    assert!(!visual.interactive);
}

#[test]
fn matching_filter_leaves_seat_interactive() {
    let gold = tier("gold");
    let visual = resolve_seat_visual(&seat("gold", SeatStatus::Available, false), Some(&gold), &filter_on("gold"), false);
    assert_eq!(visual.opacity, 1.0);
    assert!(visual.interactive);
}

#[test]
fn selected_seat_gets_thick_dark_outline() {
    let gold = tier("gold");
    let visual = resolve_seat_visual(&seat("gold", SeatStatus::Available, false), Some(&gold), &FilterState::default(), true);
    assert_eq!(visual.stroke, SELECTED_STROKE);
    assert_eq!(visual.stroke_width, 3.0);
}

#[test]
fn missing_tier_falls_back() {
    let visual = resolve_seat_visual(&seat("ghost", SeatStatus::Available, false), None, &FilterState::default(), false);
    assert_eq!(visual.fill, FALLBACK_FILL);
    assert!(visual.interactive);
}

#[test]
fn restricted_view_is_split() {
    let gold = tier("gold");
    let visual = resolve_seat_visual(&seat("gold", SeatStatus::Available, true), Some(&gold), &FilterState::default(), false);
    assert_eq!(visual.shape, SeatShape::SplitDisk { backdrop: RESTRICTED_BACKDROP });
    assert_eq!(visual.fill, "#F59E0B");
}
