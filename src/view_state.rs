use crate::domain::seat_map::value_objects::{ScreenPoint, SeatMapConfig, SurfaceSize, Viewport};
use crate::domain::venue::{Point, SeatCatalog, SeatRef};

/// Pan/zoom state of the seat map: the visible chart-space window, the
/// on-screen surface it is mapped onto, and the drag in progress (if any).
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub viewport: Viewport,
    pub surface: SurfaceSize,
    pub min_width: f64,
    pub max_width: f64,
    home: Viewport,
    drag_last: Option<ScreenPoint>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&SeatMapConfig::default())
    }
}

impl ViewState {
    pub fn new(viewport: Viewport, surface: SurfaceSize, min_width: f64, max_width: f64) -> Self {
        Self { viewport, surface, min_width, max_width, home: viewport, drag_last: None }
    }

    pub fn from_config(config: &SeatMapConfig) -> Self {
        Self {
            home: config.reset_viewport,
            ..Self::new(config.initial_viewport, config.surface, config.min_width, config.max_width)
        }
    }

    /// Viewport size after zooming by `factor`, aspect taken from the current
    /// viewport. `None` for factors that are not a positive finite number.
    fn zoomed_size(&self, factor: f64) -> Option<(f64, f64)> {
        if !(factor.is_finite() && factor > 0.0) {
            return None;
        }
        let width = (self.viewport.width / factor).clamp(self.min_width, self.max_width);
        Some((width, width * self.viewport.aspect()))
    }

    /// Zoom around the centre of the viewport (zoom buttons).
    pub fn zoom(&mut self, factor: f64) {
        let Some((width, height)) = self.zoomed_size(factor) else { return };
        self.viewport = Viewport {
            x: self.viewport.x + (self.viewport.width - width) / 2.0,
            y: self.viewport.y + (self.viewport.height - height) / 2.0,
            width,
            height,
        };
    }

    /// Zoom keeping the chart point under `at` stable, letterboxing included.
    pub fn zoom_at(&mut self, factor: f64, at: ScreenPoint) {
        if self.surface.is_degenerate() {
            self.zoom(factor);
            return;
        }
        let Some((width, height)) = self.zoomed_size(factor) else { return };
        let anchor = self.screen_to_chart(at);
        self.viewport.width = width;
        self.viewport.height = height;
        let Some((k, pad_x, pad_y)) = self.fit() else { return };
        self.viewport.x = anchor.x + pad_x - at.x * k;
        self.viewport.y = anchor.y + pad_y - at.y * k;
    }

    /// Mouse wheel: scrolling up zooms in by `step`, anything else zooms out.
    pub fn wheel(&mut self, delta_y: f64, at: ScreenPoint, step: f64) {
        let factor = if delta_y < 0.0 { step } else { 1.0 / step };
        self.zoom_at(factor, at);
    }

    pub fn begin_drag(&mut self, at: ScreenPoint) {
        self.drag_last = Some(at);
    }

    /// Pan by the pointer movement since the previous drag step. Returns
    /// `false` when no drag is active.
    pub fn continue_drag(&mut self, at: ScreenPoint) -> bool {
        let Some(last) = self.drag_last else { return false };
        let scale = self.scale();
        self.viewport.x -= (at.x - last.x) * scale;
        self.viewport.y -= (at.y - last.y) * scale;
        self.drag_last = Some(at);
        true
    }

    pub fn end_drag(&mut self) {
        self.drag_last = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_last.is_some()
    }

    pub fn reset(&mut self) {
        self.viewport = self.home;
        self.drag_last = None;
    }

    pub fn set_surface(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }

    /// Chart units per screen pixel as drawn.
    pub fn scale(&self) -> f64 {
        self.fit().map_or(1.0, |(k, _, _)| k)
    }

    /// Uniform scale and letterbox padding of an SVG `viewBox` drawn with
    /// `preserveAspectRatio="xMidYMid meet"`.
    fn fit(&self) -> Option<(f64, f64, f64)> {
        if self.surface.is_degenerate() {
            return None;
        }
        let k = (self.viewport.width / self.surface.width).max(self.viewport.height / self.surface.height);
        let pad_x = (self.surface.width * k - self.viewport.width) / 2.0;
        let pad_y = (self.surface.height * k - self.viewport.height) / 2.0;
        Some((k, pad_x, pad_y))
    }

    pub fn screen_to_chart(&self, p: ScreenPoint) -> Point {
        match self.fit() {
            Some((k, pad_x, pad_y)) => {
                Point::new(self.viewport.x - pad_x + p.x * k, self.viewport.y - pad_y + p.y * k)
            }
            None => Point::new(self.viewport.x, self.viewport.y),
        }
    }

    pub fn chart_to_screen(&self, p: Point) -> ScreenPoint {
        match self.fit() {
            Some((k, pad_x, pad_y)) => ScreenPoint::new(
                (p.x - self.viewport.x + pad_x) / k,
                (p.y - self.viewport.y + pad_y) / k,
            ),
            None => ScreenPoint::default(),
        }
    }

    /// Nearest seat whose disk of `radius` chart units covers `at`.
    pub fn hit_test<'a>(&self, catalog: &'a SeatCatalog, at: ScreenPoint, radius: f64) -> Option<SeatRef<'a>> {
        let target = self.screen_to_chart(at);
        let limit = radius * radius;
        catalog
            .seats()
            .map(|r| (r.seat.position().distance_sq(&target), r))
            .filter(|(d, _)| *d <= limit)
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, r)| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewState {
        ViewState::new(Viewport::new(0.0, 0.0, 950.0, 850.0), SurfaceSize::new(950.0, 850.0), 300.0, 2000.0)
    }

    #[test]
    fn non_positive_factor_is_ignored() {
        let mut v = view();
        v.zoom(0.0);
        v.zoom(-2.0);
        v.zoom_at(f64::NAN, ScreenPoint::new(10.0, 10.0));
        assert_eq!(v.viewport, view().viewport);
    }

    #[test]
    fn continue_drag_without_begin_is_noop() {
        let mut v = view();
        assert!(!v.continue_drag(ScreenPoint::new(50.0, 50.0)));
        assert_eq!(v.viewport, view().viewport);
    }

    #[test]
    fn screen_chart_round_trip_with_letterbox() {
        let mut v = view();
        v.viewport = Viewport::new(100.0, 40.0, 750.0, 850.0);
        let p = Point::new(420.0, 333.0);
        let back = v.screen_to_chart(v.chart_to_screen(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn drag_tracks_pointer_with_letterbox() {
        let mut v = view();
        v.viewport = Viewport::new(0.0, 0.0, 750.0, 850.0);
        let grabbed = v.screen_to_chart(ScreenPoint::new(300.0, 200.0));
        v.begin_drag(ScreenPoint::new(300.0, 200.0));
        v.continue_drag(ScreenPoint::new(340.0, 260.0));
        let under = v.screen_to_chart(ScreenPoint::new(340.0, 260.0));
        assert!((under.x - grabbed.x).abs() < 1e-9);
        assert!((under.y - grabbed.y).abs() < 1e-9);
    }
}
