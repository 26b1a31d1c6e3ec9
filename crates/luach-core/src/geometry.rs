//! Overlay geometry.

use serde::{Deserialize, Serialize};

/// An axis-aligned box in page pixels.
///
/// Captured from an element's bounding rectangle at tracking time; overlays
/// are placed from this value and do not re-track later layout changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Overlay placement: the viewport rectangle shifted by the page scroll
    /// offsets at the moment the overlay is (re)positioned.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_shifts_origin_only() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0).offset(5.0, 15.0);
        assert_eq!(rect, Rect::new(15.0, 35.0, 100.0, 50.0));
    }
}
