use crate::domain::errors::{AppError, AppResult};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Value Object - Viewport: the visible window in chart space.
///
/// Rendered as the SVG `viewBox` of the seat map.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, width: 950.0, height: 850.0 }
    }
}

impl Viewport {
    /// height / width
    pub fn aspect(&self) -> f64 {
        if self.width == 0.0 {
            return 1.0;
        }
        self.height / self.width
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// `"x y w h"` for the SVG `viewBox` attribute
    pub fn view_box(&self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// Size of the on-screen surface in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self { width: 950.0, height: 850.0 }
    }
}

impl SurfaceSize {
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Pointer position relative to the top-left corner of the surface, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Constructor, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Tunables of the seat map. Every field has a default, so a partial
/// `config` object in the venue document only overrides what it names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeatMapConfig {
    /// Narrowest visible width (maximum zoom-in)
    pub min_width: f64,
    /// Widest visible width (maximum zoom-out)
    pub max_width: f64,
    pub initial_viewport: Viewport,
    /// Target of the reset button
    pub reset_viewport: Viewport,
    pub surface: SurfaceSize,
    pub button_zoom_step: f64,
    pub wheel_zoom_step: f64,
    pub seat_radius: f64,
    pub row_label_offset: f64,
}

impl Default for SeatMapConfig {
    fn default() -> Self {
        Self {
            min_width: 300.0,
            max_width: 2000.0,
            initial_viewport: Viewport::default(),
            reset_viewport: Viewport::new(0.0, 0.0, 750.0, 850.0),
            surface: SurfaceSize::default(),
            button_zoom_step: 1.15,
            wheel_zoom_step: 1.1,
            seat_radius: 7.0,
            row_label_offset: 20.0,
        }
    }
}

impl SeatMapConfig {
    /// Reject tunables the viewport math cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !(positive(self.min_width) && positive(self.max_width) && self.min_width <= self.max_width) {
            return Err(AppError::ValidationError(format!(
                "zoom bounds must satisfy 0 < minWidth <= maxWidth, got {} / {}",
                self.min_width, self.max_width
            )));
        }
        if !(self.button_zoom_step > 1.0 && self.wheel_zoom_step > 1.0) {
            return Err(AppError::ValidationError("zoom steps must be greater than 1".to_string()));
        }
        if !positive(self.seat_radius) {
            return Err(AppError::ValidationError(format!("seat radius must be positive, got {}", self.seat_radius)));
        }
        for (name, viewport) in [("initialViewport", self.initial_viewport), ("resetViewport", self.reset_viewport)] {
            if !(positive(viewport.width) && positive(viewport.height)) {
                return Err(AppError::ValidationError(format!("{} must have a positive size", name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: SeatMapConfig = serde_json::from_str(r#"{"minWidth": 400}"#).unwrap();
        assert_eq!(cfg.min_width, 400.0);
        assert_eq!(cfg.max_width, 2000.0);
        assert_eq!(cfg.reset_viewport, Viewport::new(0.0, 0.0, 750.0, 850.0));
    }

    #[test]
    fn inverted_zoom_bounds_are_rejected() {
        let cfg = SeatMapConfig { min_width: 2500.0, ..SeatMapConfig::default() };
        assert!(matches!(cfg.validate(), Err(AppError::ValidationError(_))));
        assert!(SeatMapConfig::default().validate().is_ok());
    }

    #[test]
    fn view_box_is_space_separated() {
        assert_eq!(Viewport::new(10.0, -5.5, 300.0, 200.0).view_box(), "10 -5.5 300 200");
    }
}
