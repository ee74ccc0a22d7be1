use quickcheck_macros::quickcheck;
use seat_map_wasm::domain::events::{SeatMapEvent, SessionEvent};
use seat_map_wasm::domain::seat_map::RejectReason;
use seat_map_wasm::domain::state::SeatMapSession;
use seat_map_wasm::domain::venue::{Price, SeatId, SeatMapData};

const VENUE: &str = r##"{
    "priceTiers": [
        {"id": "A", "price": 1000, "color": "#7C3AED", "name": "Alpha"},
        {"id": "B", "price": 250, "color": "#10B981", "name": "Beta"}
    ],
    "sections": [{
        "id": "main", "name": "Main",
        "seats": [
            {"id": "s1", "row": "A", "number": 1, "x": 10, "y": 10, "priceTierId": "A", "status": "available"},
            {"id": "s2", "row": "A", "number": 2, "x": 30, "y": 10, "priceTierId": "A", "status": "booked"},
            {"id": "s3", "row": "A", "number": 3, "x": 50, "y": 10, "priceTierId": "B", "status": "available"},
            {"id": "s4", "row": "B", "number": 1, "x": 10, "y": 30, "priceTierId": "B", "status": "available", "isRestrictedView": true},
            {"id": "s5", "row": "B", "number": 2, "x": 30, "y": 30, "priceTierId": "A", "status": "available"},
            {"id": "s6", "row": "B", "number": 3, "x": 50, "y": 30, "priceTierId": "B", "status": "booked"}
        ]
    }]
}"##;

const AVAILABLE: [&str; 4] = ["s1", "s3", "s4", "s5"];
const ALL: [&str; 7] = ["s1", "s2", "s3", "s4", "s5", "s6", "nope"];

fn session() -> SeatMapSession {
    SeatMapSession::new(SeatMapData::from_json(VENUE).unwrap())
}

fn click(session: &mut SeatMapSession, id: &str) -> Option<SessionEvent> {
    session.apply(SeatMapEvent::SeatClicked(SeatId::from(id)))
}

fn selected_ids(session: &SeatMapSession) -> Vec<String> {
    session.selection().ids().iter().map(|id| id.to_string()).collect()
}

#[test]
fn booked_click_after_selection_leaves_total() {
    let mut s = session();
    click(&mut s, "s1");
    assert_eq!(s.selected_total(), Price::new(1000));

    let change = click(&mut s, "s2");
    assert_eq!(
        change,
        Some(SessionEvent::SeatRejected { seat_id: Some(SeatId::from("s2")), reason: RejectReason::Booked })
    );
    assert_eq!(selected_ids(&s), vec!["s1"]);
    assert_eq!(s.selected_total(), Price::new(1000));
}

#[test]
fn empty_selection_aggregates_are_zero() {
    let s = session();
    assert_eq!(s.selected_count(), 0);
    assert_eq!(s.selected_total(), Price::ZERO);
    assert!(s.selected_details().is_empty());
}

#[test]
fn second_click_deselects() {
    let mut s = session();
    click(&mut s, "s3");
    click(&mut s, "s3");
    assert_eq!(s.selected_count(), 0);
    assert_eq!(s.selected_total(), Price::ZERO);
}

#[test]
fn selection_keeps_click_order() {
    let mut s = session();
    for id in ["s5", "s1", "s4"] {
        click(&mut s, id);
    }
    click(&mut s, "s1");
    click(&mut s, "s1");
    assert_eq!(selected_ids(&s), vec!["s5", "s4", "s1"]);

    let details = s.selected_details();
    assert_eq!(details[1].label, "B1");
    assert_eq!(details[1].section_name, "Main");
    assert_eq!(details[1].tier_name.as_deref(), Some("Beta"));
    assert_eq!(details[1].price, Price::new(250));
}

#[test]
fn unknown_seat_is_rejected() {
    let mut s = session();
    assert_eq!(
        click(&mut s, "zz"),
        Some(SessionEvent::SeatRejected { seat_id: Some(SeatId::from("zz")), reason: RejectReason::UnknownSeat })
    );
    assert_eq!(s.selected_count(), 0);
}

#[test]
fn filter_blocks_new_picks_but_keeps_existing() {
    let mut s = session();
    click(&mut s, "s1");
    s.apply(SeatMapEvent::TierClicked("B".into()));

    assert_eq!(
        click(&mut s, "s5"),
        Some(SessionEvent::SeatRejected { seat_id: Some(SeatId::from("s5")), reason: RejectReason::FilteredOut })
    );
    assert_eq!(selected_ids(&s), vec!["s1"]);
    assert_eq!(s.selected_total(), Price::new(1000));

    // filtered-out seat is also not deselectable by click
    click(&mut s, "s1");
    assert_eq!(selected_ids(&s), vec!["s1"]);

    click(&mut s, "s3");
    assert_eq!(s.selected_total(), Price::new(1250));
}

#[test]
fn tier_click_toggles_filter() {
    let mut s = session();
    s.apply(SeatMapEvent::TierClicked("A".into()));
    assert_eq!(s.filter().active().map(|t| t.as_str()), Some("A"));

    s.apply(SeatMapEvent::TierClicked("B".into()));
    assert_eq!(s.filter().active().map(|t| t.as_str()), Some("B"));

    let change = s.apply(SeatMapEvent::TierClicked("B".into()));
    assert_eq!(change, Some(SessionEvent::FilterChanged { active: None }));
}

#[test]
fn remove_ignores_filter() {
    let mut s = session();
    click(&mut s, "s1");
    click(&mut s, "s3");
    s.apply(SeatMapEvent::TierClicked("B".into()));

    let change = s.apply(SeatMapEvent::SeatRemoved(SeatId::from("s1")));
    assert_eq!(change, Some(SessionEvent::SelectionChanged { count: 1, total: Price::new(250) }));
    assert_eq!(s.apply(SeatMapEvent::SeatRemoved(SeatId::from("s1"))), None);
}

#[test]
fn clear_all_resets_total() {
    let mut s = session();
    for id in AVAILABLE {
        click(&mut s, id);
    }
    assert_eq!(s.selected_total(), Price::new(2500));

    let change = s.apply(SeatMapEvent::ClearAll);
    assert_eq!(change, Some(SessionEvent::SelectionChanged { count: 0, total: Price::ZERO }));
    assert_eq!(s.selected_total(), Price::ZERO);
}

#[quickcheck]
fn booked_click_never_changes_selection(history: Vec<u8>, booked: bool) -> bool {
    let mut s = session();
    for i in history {
        click(&mut s, ALL[i as usize % ALL.len()]);
    }
    let before = s.selection().clone();
    click(&mut s, if booked { "s2" } else { "s6" });
    s.selection() == &before
}

#[quickcheck]
fn total_matches_selected_tiers(history: Vec<u8>) -> bool {
    let mut s = session();
    for i in history {
        click(&mut s, AVAILABLE[i as usize % AVAILABLE.len()]);
    }
    let expected: u64 = s
        .selection()
        .ids()
        .iter()
        .filter_map(|id| s.catalog().seat(id))
        .filter_map(|r| s.catalog().tier(&r.seat.price_tier_id))
        .map(|t| t.price.value())
        .sum();
    let cleared = s.clone().reduce(SeatMapEvent::ClearAll);
    s.selected_total().value() == expected && cleared.selected_total() == Price::ZERO
}
