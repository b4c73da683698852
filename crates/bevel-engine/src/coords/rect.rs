use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Stored exactly as given. Negative sizes are not normalized here; the
/// uniform layer forwards geometry to the shader untouched.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Largest corner radius that still fits both axes.
    ///
    /// Informational only; nothing in the upload path clamps to it.
    #[inline]
    pub fn max_corner_radius(self) -> f32 {
        0.5 * self.size.x.abs().min(self.size.y.abs())
    }
}
