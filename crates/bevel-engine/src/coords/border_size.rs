/// Per-edge border thickness (logical pixels).
///
/// Edges follow CSS order: top, right, bottom, left. Values are carried to the
/// GPU as-is; negative or oversized widths are the shader's problem.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BorderSize {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl BorderSize {
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same thickness on all four edges.
    #[inline]
    pub const fn all(w: f32) -> Self {
        Self::new(w, w, w, w)
    }

    /// No border.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// `[top, right, bottom, left]`, the order the shader reads.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

impl From<[f32; 4]> for BorderSize {
    #[inline]
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}
