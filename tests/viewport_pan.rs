use seat_map_wasm::domain::seat_map::{ScreenPoint, SeatMapConfig, SurfaceSize, Viewport};
use seat_map_wasm::domain::venue::{SeatCatalog, SeatMapData};
use seat_map_wasm::view_state::ViewState;

fn catalog() -> SeatCatalog {
    let data = SeatMapData::from_json(
        r#"{
            "priceTiers": [{"id": "t1", "price": 100, "color": "red", "name": "One"}],
            "sections": [{
                "id": "sec", "name": "Stalls",
                "seats": [
                    {"id": "a1", "row": "A", "number": 1, "x": 10, "y": 10, "priceTierId": "t1"},
                    {"id": "a2", "row": "A", "number": 2, "x": 30, "y": 10, "priceTierId": "t1"}
                ]
            }]
        }"#,
    )
    .unwrap();
    SeatCatalog::new(data)
}

#[test]
fn drag_pans_by_frame_to_frame_delta() {
    let mut view = ViewState::from_config(&SeatMapConfig::default());
    view.begin_drag(ScreenPoint::new(100.0, 100.0));

    assert!(view.continue_drag(ScreenPoint::new(110.0, 100.0)));
    assert_eq!(view.viewport.x, -10.0);

    assert!(view.continue_drag(ScreenPoint::new(115.0, 90.0)));
    assert_eq!(view.viewport.x, -15.0);
    assert_eq!(view.viewport.y, 10.0);

    view.end_drag();
    assert!(!view.continue_drag(ScreenPoint::new(500.0, 500.0)));
    assert_eq!(view.viewport.x, -15.0);
}

#[test]
fn drag_delta_scales_with_zoom() {
    let viewport = Viewport::new(0.0, 0.0, 475.0, 425.0);
    let mut view = ViewState::new(viewport, SurfaceSize::new(950.0, 850.0), 300.0, 2000.0);
    view.begin_drag(ScreenPoint::new(0.0, 0.0));
    view.continue_drag(ScreenPoint::new(100.0, 0.0));
    assert_eq!(view.viewport.x, -50.0);
    assert_eq!(view.viewport.width, 475.0);
}

#[test]
fn hit_test_picks_nearest_seat_within_radius() {
    let catalog = catalog();
    let view = ViewState::from_config(&SeatMapConfig::default());

    let hit = view.hit_test(&catalog, ScreenPoint::new(12.0, 12.0), 7.0);
    assert_eq!(hit.map(|r| r.seat.id.as_str()), Some("a1"));

    let hit = view.hit_test(&catalog, ScreenPoint::new(24.0, 10.0), 7.0);
    assert_eq!(hit.map(|r| r.seat.id.as_str()), Some("a2"));

    assert!(view.hit_test(&catalog, ScreenPoint::new(20.0, 30.0), 7.0).is_none());
}

#[test]
fn hit_test_follows_the_viewport() {
    let catalog = catalog();
    let viewport = Viewport::new(20.0, 0.0, 475.0, 425.0);
    let view = ViewState::new(viewport, SurfaceSize::new(950.0, 850.0), 300.0, 2000.0);

    // two screen pixels per chart unit; a2 sits at (30 - 20) * 2 = 20
    let hit = view.hit_test(&catalog, ScreenPoint::new(20.0, 20.0), 7.0);
    assert_eq!(hit.map(|r| r.seat.id.as_str()), Some("a2"));
}

#[test]
fn letterboxed_viewport_maps_centre_to_centre() {
    let view = ViewState::new(
        Viewport::new(0.0, 0.0, 750.0, 850.0),
        SurfaceSize::new(950.0, 850.0),
        300.0,
        2000.0,
    );
    let centre = view.screen_to_chart(ScreenPoint::new(475.0, 425.0));
    assert!((centre.x - 375.0).abs() < 1e-9);
    assert!((centre.y - 425.0).abs() < 1e-9);
}
