//! Viewport geometry in CSS pixels, as reported by `getBoundingClientRect`.

/// Axis-aligned rectangle relative to the viewport's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// True when the vertical line `y` falls within `[top, bottom]`.
    #[inline]
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && self.bottom() >= y
    }

    /// True when any part of the rectangle lies inside a viewport of the given height.
    #[inline]
    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom() > 0.0
    }

    /// Viewport x coordinate at the given fraction of the width.
    #[inline]
    pub fn x_at(&self, fraction: f32) -> f64 {
        self.left + self.width * fraction as f64
    }
}

/// Clamp into `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
