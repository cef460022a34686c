//! Pure mappings from geometry to audio levels and background colours.

use crate::geometry::{clamp01, Rect};

/// Progress of the scroll transition from section `a` into the following section `b`.
///
/// 0 while `b` is still entirely below the viewport, 1 once `a` and any gap after it
/// have left through the top; otherwise the share of the two sections' combined height
/// that has been scrolled through.
pub fn scroll_fraction(a: &Rect, b: &Rect, viewport_height: f64) -> f32 {
    if b.top >= viewport_height {
        return 0.0;
    }
    if a.bottom() <= 0.0 && b.top <= 0.0 {
        return 1.0;
    }
    let total = a.height + b.height;
    if total <= 0.0 {
        return 1.0;
    }
    let scrolled_past = (-a.bottom()).max(0.0);
    let scrolled_into = (viewport_height - b.top).max(0.0);
    clamp01(((scrolled_past + scrolled_into) / total) as f32)
}

/// Ringtone level for a transition fraction; stays within `[0, base_volume]`.
#[inline]
pub fn fade_volume(base_volume: f32, fraction: f32) -> f32 {
    let base = base_volume.max(0.0);
    (base * (1.0 - clamp01(fraction))).clamp(0.0, base)
}

/// Horizontal pointer position as a fraction of the section width.
///
/// `None` when the section has no usable width.
pub fn pointer_intensity(pointer_x: f64, section: &Rect) -> Option<f32> {
    if !(section.width > 0.0) || !pointer_x.is_finite() {
        return None;
    }
    Some(clamp01(((pointer_x - section.left) / section.width) as f32))
}

/// Two-stop horizontal grayscale gradient; each stop is a 0..=255 gray level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub left: u8,
    pub right: u8,
}

impl Gradient {
    pub const NEUTRAL: Gradient = Gradient {
        left: 255,
        right: 0,
    };

    /// Gradient for a pointer intensity in `[0, 1]`.
    ///
    /// The left half darkens the right stop while the left stays white; the right half
    /// then darkens the left stop while the right stays black.
    pub fn for_intensity(intensity: f32) -> Self {
        let i = clamp01(intensity);
        if i <= 0.5 {
            Gradient {
                left: 255,
                right: gray(1.0 - i * 2.0),
            }
        } else {
            Gradient {
                left: gray(1.0 - (i - 0.5) * 2.0),
                right: 0,
            }
        }
    }

    /// CSS `background` value.
    pub fn css(&self) -> String {
        format!(
            "linear-gradient(90deg, rgb({l}, {l}, {l}) 0%, rgb({r}, {r}, {r}) 100%)",
            l = self.left,
            r = self.right
        )
    }
}

#[inline]
fn gray(whiteness: f32) -> u8 {
    (255.0 * clamp01(whiteness)).round() as u8
}

/// Levels of the two ambient tracks for one pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossFade {
    pub birds: f32,
    pub thunder: f32,
}

impl CrossFade {
    /// Birds fade in towards the left edge, thunder towards the right; only one is audible.
    pub fn for_intensity(intensity: f32, peak: f32) -> Self {
        let i = clamp01(intensity);
        let peak = clamp01(peak);
        if i < 0.5 {
            CrossFade {
                birds: (0.5 - i) * 2.0 * peak,
                thunder: 0.0,
            }
        } else {
            CrossFade {
                birds: 0.0,
                thunder: (i - 0.5) * 2.0 * peak,
            }
        }
    }

    /// True when the pointer sits on the birds side of the split.
    #[inline]
    pub fn birds_side(intensity: f32) -> bool {
        clamp01(intensity) < 0.5
    }
}
