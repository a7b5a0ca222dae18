//! Canvas coordinate mapping.
//!
//! All stored overlay geometry is normalized: positions are percentages
//! (0–100) of the canvas's current width/height, independent of device
//! pixel size. Pointer events arrive in device coordinates and are mapped
//! here against the canvas's *current* bounding rectangle, which callers
//! must re-query per event rather than cache.

use kurbo::{Point, Rect};

/// Upper bound of the normalized coordinate range.
pub const NORM_MAX: f64 = 100.0;

/// The canvas's current bounding rectangle in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    rect: Rect,
}

impl CanvasBounds {
    /// Create bounds from an origin and extents in device pixels.
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(origin.x, origin.y, origin.x + width, origin.y + height),
        }
    }

    /// Create bounds from a device-pixel rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// Width of the canvas in device pixels.
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Height of the canvas in device pixels.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Map a device pointer position to normalized canvas coordinates.
    ///
    /// Both axes are clamped to [0, 100]: fast drags routinely report
    /// positions outside the canvas rectangle. A degenerate (zero-extent)
    /// canvas maps every position to the origin.
    pub fn to_normalized(&self, device: Point) -> Point {
        if self.rect.width() <= f64::EPSILON || self.rect.height() <= f64::EPSILON {
            return Point::ZERO;
        }
        let x = (device.x - self.rect.x0) / self.rect.width() * NORM_MAX;
        let y = (device.y - self.rect.y0) / self.rect.height() * NORM_MAX;
        Point::new(x.clamp(0.0, NORM_MAX), y.clamp(0.0, NORM_MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_interior_point() {
        let bounds = CanvasBounds::new(Point::new(100.0, 50.0), 800.0, 500.0);
        let p = bounds.to_normalized(Point::new(500.0, 300.0));
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_outside_positions() {
        let bounds = CanvasBounds::new(Point::new(0.0, 0.0), 400.0, 400.0);
        let p = bounds.to_normalized(Point::new(-50.0, 900.0));
        assert_eq!(p, Point::new(0.0, NORM_MAX));
    }

    #[test]
    fn test_resize_uses_current_rect() {
        // Same device position, different canvas sizes: the mapping must
        // follow the rect passed in, never a cached one.
        let device = Point::new(200.0, 200.0);
        let small = CanvasBounds::new(Point::ZERO, 400.0, 400.0);
        let large = CanvasBounds::new(Point::ZERO, 800.0, 800.0);
        assert!((small.to_normalized(device).x - 50.0).abs() < 1e-9);
        assert!((large.to_normalized(device).x - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_canvas() {
        let bounds = CanvasBounds::new(Point::ZERO, 0.0, 0.0);
        assert_eq!(bounds.to_normalized(Point::new(10.0, 10.0)), Point::ZERO);
    }
}
