use core::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::coords::{BorderSize, ColorRgba, Rect};

use super::layout::{FieldLayout, UniformLayout, fields_fit};

/// Paint attributes for one bordered, rounded rectangle.
///
/// Layout (80 bytes, 16-byte GPU alignment):
///
///  offset  0  size              [f32; 2]  (width, height)
///  offset  8  origin            [f32; 2]  (x, y), top-left
///  offset 16  background_color  [f32; 4]  linear RGBA
///  offset 32  border_size       [f32; 4]  (top, right, bottom, left)
///  offset 48  border_color      [f32; 4]  linear RGBA
///  offset 64  corner_radius     f32
///  offset 68  _pad              [f32; 3]
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PerRectUniforms {
    pub size: [f32; 2],
    pub origin: [f32; 2],
    pub background_color: [f32; 4],
    pub border_size: [f32; 4],
    pub border_color: [f32; 4],
    pub corner_radius: f32,
    pub _pad: [f32; 3],
}

impl PerRectUniforms {
    pub const SIZE: usize = 80;

    /// Builds the block from host-side values.
    ///
    /// Everything is copied as given: negative sizes, negative borders and
    /// radii larger than the rect are all left for the shader to resolve.
    #[inline]
    pub fn new(
        rect: Rect,
        background_color: ColorRgba,
        border_size: BorderSize,
        border_color: ColorRgba,
        corner_radius: f32,
    ) -> Self {
        Self {
            size: rect.size.to_array(),
            origin: rect.origin.to_array(),
            background_color: background_color.to_array(),
            border_size: border_size.to_array(),
            border_color: border_color.to_array(),
            corner_radius,
            _pad: [0.0; 3],
        }
    }

    /// Raw-array variant of [`new`](Self::new), geometry given as
    /// `(width, height, x, y)`.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn from_parts(
        width: f32,
        height: f32,
        x: f32,
        y: f32,
        background_color: [f32; 4],
        border_size: [f32; 4],
        border_color: [f32; 4],
        corner_radius: f32,
    ) -> Self {
        Self {
            size: [width, height],
            origin: [x, y],
            background_color,
            border_size,
            border_color,
            corner_radius,
            _pad: [0.0; 3],
        }
    }

    /// Serialized form, ready for upload.
    #[inline]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        bytemuck::cast(*self)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.size
            .iter()
            .chain(&self.origin)
            .chain(&self.background_color)
            .chain(&self.border_size)
            .chain(&self.border_color)
            .chain(core::iter::once(&self.corner_radius))
            .all(|v| v.is_finite())
    }
}

impl UniformLayout for PerRectUniforms {
    const NAME: &'static str = "PerRectUniforms";
    const GPU_ALIGN: usize = 16;
    const FIELDS: &'static [FieldLayout] = &[
        FieldLayout::new("size", offset_of!(PerRectUniforms, size), 8),
        FieldLayout::new("origin", offset_of!(PerRectUniforms, origin), 8),
        FieldLayout::new("background_color", offset_of!(PerRectUniforms, background_color), 16),
        FieldLayout::new("border_size", offset_of!(PerRectUniforms, border_size), 16),
        FieldLayout::new("border_color", offset_of!(PerRectUniforms, border_color), 16),
        FieldLayout::new("corner_radius", offset_of!(PerRectUniforms, corner_radius), 4),
    ];
}

const _: () = {
    assert!(size_of::<PerRectUniforms>() == PerRectUniforms::SIZE);
    assert!(offset_of!(PerRectUniforms, size) == 0);
    assert!(offset_of!(PerRectUniforms, origin) == 8);
    assert!(offset_of!(PerRectUniforms, background_color) == 16);
    assert!(offset_of!(PerRectUniforms, border_size) == 32);
    assert!(offset_of!(PerRectUniforms, border_color) == 48);
    assert!(offset_of!(PerRectUniforms, corner_radius) == 64);
    assert!(fields_fit(
        <PerRectUniforms as UniformLayout>::FIELDS,
        PerRectUniforms::SIZE,
        <PerRectUniforms as UniformLayout>::GPU_ALIGN,
    ));
};
