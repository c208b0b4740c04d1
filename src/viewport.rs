/*
 * Viewport Module
 *
 * This module defines the Viewport struct describing the drawing surface:
 * its logical size, the device pixel scale and whether the device counts as
 * constrained. It provides coordinate transformations between simulation
 * space (origin top-left, y down, logical pixels) and nannou's window space
 * (origin at the centre, y up).
 */

use nannou::prelude::*;

// Reference screen area the base star count is tuned for
pub const REFERENCE_WIDTH: f32 = 1920.0;
pub const REFERENCE_HEIGHT: f32 = 1080.0;

// Viewports narrower than this are treated as constrained devices
pub const CONSTRAINED_WIDTH: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale_factor: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scale_factor: 1.0,
        }
    }

    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    // Size of the backing surface in physical pixels
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.scale_factor).round().max(0.0) as u32,
            (self.height * self.scale_factor).round().max(0.0) as u32,
        )
    }

    pub fn is_narrow(&self) -> bool {
        self.width < CONSTRAINED_WIDTH
    }

    pub fn contains(&self, point: Point2) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }

    // Convert a point from simulation space to window space
    pub fn to_window(&self, point: Point2, window_rect: Rect) -> Point2 {
        pt2(window_rect.left() + point.x, window_rect.top() - point.y)
    }

    // Convert a point from window space to simulation space
    pub fn from_window(&self, point: Point2, window_rect: Rect) -> Point2 {
        pt2(point.x - window_rect.left(), window_rect.top() - point.y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(REFERENCE_WIDTH, REFERENCE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_round_trip() {
        let viewport = Viewport::new(800.0, 600.0);
        let rect = Rect::from_w_h(800.0, 600.0);

        let top_left = viewport.to_window(pt2(0.0, 0.0), rect);
        assert!((top_left.x - (-400.0)).abs() < 0.001);
        assert!((top_left.y - 300.0).abs() < 0.001);

        let point = pt2(123.0, 456.0);
        let back = viewport.from_window(viewport.to_window(point, rect), rect);
        assert!((back - point).length() < 0.001);
    }

    #[test]
    fn test_physical_size() {
        let viewport = Viewport::new(800.0, 600.0).with_scale_factor(2.0);
        assert_eq!(viewport.physical_size(), (1600, 1200));
    }

    #[test]
    fn test_contains_is_half_open() {
        let viewport = Viewport::new(100.0, 50.0);
        assert!(viewport.contains(pt2(0.0, 0.0)));
        assert!(!viewport.contains(pt2(100.0, 10.0)));
        assert!(!viewport.contains(pt2(10.0, 50.0)));
        assert!(!viewport.contains(pt2(-0.1, 10.0)));
    }

    #[test]
    fn test_narrow_viewport() {
        assert!(Viewport::new(375.0, 812.0).is_narrow());
        assert!(!Viewport::default().is_narrow());
    }
}
