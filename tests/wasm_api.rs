#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use leptos::{SignalWith, create_effect, create_runtime, create_rw_signal};
use seat_map_wasm::SeatMapApi;
use seat_map_wasm::app::{dispatch_into, seat_glyphs_memo};
use seat_map_wasm::application::SeatMapService;
use seat_map_wasm::domain::events::SeatMapEvent;
use seat_map_wasm::domain::seat_map::ScreenPoint;
use seat_map_wasm::domain::venue::SeatId;
use seat_map_wasm::infrastructure::StaticSeatMapRepository;
use seat_map_wasm::time_utils::{DateParts, format_generated_date};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn api_selects_and_totals() {
    let mut api = SeatMapApi::from_json(
        r#"{
            "priceTiers": [{"id": "A", "price": 1234, "color": "red", "name": "A"}],
            "sections": [{"id": "m", "name": "Main", "seats": [
                {"id": "s1", "row": "A", "number": 1, "x": 10, "y": 10, "priceTierId": "A"},
                {"id": "s2", "row": "A", "number": 2, "x": 30, "y": 10, "priceTierId": "A", "status": "booked"}
            ]}]
        }"#
        .to_string(),
    )
    .unwrap();

    assert!(api.click_seat("s1".to_string()));
    assert!(!api.click_seat("s2".to_string()));
    assert_eq!(api.selected_count(), 1);
    assert_eq!(api.formatted_total(), "₹1,234");
    assert!(api.selected_json().unwrap().contains("\"sectionName\":\"Main\""));

    api.reset_view();
    assert_eq!(api.view_box(), "0 0 750 850");
}

#[wasm_bindgen_test]
fn embedded_api_starts() {
    let api = SeatMapApi::new().unwrap();
    assert_eq!(api.selected_count(), 0);
}

#[wasm_bindgen_test]
fn generated_at_parses_in_browser() {
    let parts = DateParts::parse("2025-10-27T12:00:00").unwrap();
    assert_eq!(format_generated_date(&parts), "27 Oct 2025");
    assert!(DateParts::parse("not a date").is_none());
}

const VENUE: &str = r##"{
    "priceTiers": [{"id": "A", "price": 1000, "color": "#7C3AED", "name": "Alpha"}],
    "sections": [{"id": "m", "name": "Main", "seats": [
        {"id": "s1", "row": "A", "number": 1, "x": 10, "y": 10, "priceTierId": "A"},
        {"id": "s2", "row": "A", "number": 2, "x": 30, "y": 10, "priceTierId": "A"}
    ]}]
}"##;

fn counter() -> (Rc<Cell<usize>>, Rc<Cell<usize>>) {
    let runs = Rc::new(Cell::new(0));
    (Rc::clone(&runs), runs)
}

#[wasm_bindgen_test]
fn hover_moves_do_not_notify_the_session() {
    let runtime = create_runtime();
    let service = SeatMapService::new(StaticSeatMapRepository::from_json(VENUE));
    let session = create_rw_signal(service.start_session().unwrap());
    let (runs, counted) = counter();
    create_effect(move |_| {
        session.track();
        counted.set(counted.get() + 1);
    });
    assert_eq!(runs.get(), 1);

    assert!(dispatch_into(session, &service, SeatMapEvent::PointerMove(ScreenPoint::new(5.0, 5.0))).is_none());
    assert!(dispatch_into(session, &service, SeatMapEvent::SeatLeft).is_none());
    assert_eq!(runs.get(), 1);

    assert!(dispatch_into(session, &service, SeatMapEvent::ZoomIn).is_some());
    assert_eq!(runs.get(), 2);
    runtime.dispose();
}

#[wasm_bindgen_test]
fn panning_leaves_seat_glyphs_alone() {
    let runtime = create_runtime();
    let service = SeatMapService::new(StaticSeatMapRepository::from_json(VENUE));
    let session = create_rw_signal(service.start_session().unwrap());
    let glyphs = seat_glyphs_memo(session);
    let (runs, counted) = counter();
    create_effect(move |_| {
        glyphs.track();
        counted.set(counted.get() + 1);
    });
    assert_eq!(runs.get(), 1);

    dispatch_into(session, &service, SeatMapEvent::PointerDown(ScreenPoint::new(100.0, 100.0)));
    assert!(dispatch_into(session, &service, SeatMapEvent::PointerMove(ScreenPoint::new(140.0, 120.0))).is_some());
    dispatch_into(session, &service, SeatMapEvent::PointerUp);
    dispatch_into(session, &service, SeatMapEvent::ZoomIn);
    assert_eq!(runs.get(), 1);

    dispatch_into(session, &service, SeatMapEvent::SeatClicked(SeatId::from("s1")));
    assert_eq!(runs.get(), 2);
    assert_eq!(glyphs.with(|g| g.len()), 2);
    runtime.dispose();
}
