use wasm_bindgen::prelude::*;

use crate::application::SeatMapService;
use crate::currency::format_inr;
use crate::domain::events::{SeatMapEvent, SessionEvent};
use crate::domain::seat_map::value_objects::{ScreenPoint, SurfaceSize};
use crate::domain::state::SeatMapSession;
use crate::infrastructure::StaticSeatMapRepository;

/// WASM API for driving the seat map from plain JavaScript.
/// Thin bridge: every call becomes a `SeatMapEvent`.
#[wasm_bindgen]
pub struct SeatMapApi {
    service: SeatMapService<StaticSeatMapRepository>,
    session: SeatMapSession,
}

#[wasm_bindgen]
impl SeatMapApi {
    /// Session over the embedded mock venue
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SeatMapApi, JsValue> {
        Self::with_repository(StaticSeatMapRepository::embedded())
    }

    /// Session over a caller-supplied venue document
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: String) -> Result<SeatMapApi, JsValue> {
        Self::with_repository(StaticSeatMapRepository::from_json(json))
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&mut self) {
        self.send(SeatMapEvent::ZoomIn);
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&mut self) {
        self.send(SeatMapEvent::ZoomOut);
    }

    #[wasm_bindgen(js_name = resetView)]
    pub fn reset_view(&mut self) {
        self.send(SeatMapEvent::ResetView);
    }

    pub fn wheel(&mut self, delta_y: f64, x: f64, y: f64) {
        self.send(SeatMapEvent::Wheel { delta_y, at: ScreenPoint::new(x, y) });
    }

    #[wasm_bindgen(js_name = resizeSurface)]
    pub fn resize_surface(&mut self, width: f64, height: f64) {
        self.send(SeatMapEvent::SurfaceResized(SurfaceSize::new(width, height)));
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.send(SeatMapEvent::PointerDown(ScreenPoint::new(x, y)));
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.send(SeatMapEvent::PointerMove(ScreenPoint::new(x, y)));
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.send(SeatMapEvent::PointerUp);
    }

    /// Toggle a seat by id; `true` when the selection changed
    #[wasm_bindgen(js_name = clickSeat)]
    pub fn click_seat(&mut self, seat_id: String) -> bool {
        matches!(
            self.service.dispatch(&mut self.session, SeatMapEvent::SeatClicked(seat_id.into())),
            Some(SessionEvent::SelectionChanged { .. })
        )
    }

    /// Toggle whatever seat lies under a surface point
    #[wasm_bindgen(js_name = clickAt)]
    pub fn click_at(&mut self, x: f64, y: f64) {
        self.send(SeatMapEvent::ClickAt(ScreenPoint::new(x, y)));
    }

    #[wasm_bindgen(js_name = toggleTier)]
    pub fn toggle_tier(&mut self, tier_id: String) {
        self.send(SeatMapEvent::TierClicked(tier_id.into()));
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.send(SeatMapEvent::ClearAll);
    }

    #[wasm_bindgen(js_name = viewBox)]
    pub fn view_box(&self) -> String {
        self.session.view.viewport.view_box()
    }

    #[wasm_bindgen(js_name = selectedCount)]
    pub fn selected_count(&self) -> usize {
        self.session.selected_count()
    }

    /// Total in whole rupees (exact below 2^53)
    #[wasm_bindgen(js_name = selectedTotal)]
    pub fn selected_total(&self) -> f64 {
        self.session.selected_total().value() as f64
    }

    #[wasm_bindgen(js_name = formattedTotal)]
    pub fn formatted_total(&self) -> String {
        format_inr(self.session.selected_total().value())
    }

    /// Selected seats as a JSON array, in selection order
    #[wasm_bindgen(js_name = selectedJson)]
    pub fn selected_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.selected_details()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl SeatMapApi {
    fn with_repository(repository: StaticSeatMapRepository) -> Result<SeatMapApi, JsValue> {
        let service = SeatMapService::new(repository);
        let session = service.start_session()?;
        Ok(Self { service, session })
    }

    fn send(&mut self, event: SeatMapEvent) {
        self.service.dispatch(&mut self.session, event);
    }
}
