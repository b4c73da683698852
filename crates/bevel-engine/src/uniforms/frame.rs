use core::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;

use super::layout::{FieldLayout, UniformLayout, fields_fit};

/// Per-frame state shared by every rect in a pass.
///
/// Padded to 16 bytes: downlevel (WebGL2) uniform bindings cannot be smaller,
/// and the WGSL declaration carries the same `_pad` member.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub viewport_size: [f32; 2],
    pub _pad: [f32; 2],
}

impl Uniforms {
    pub const SIZE: usize = 16;

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            viewport_size: [width, height],
            _pad: [0.0; 2],
        }
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        bytemuck::cast(*self)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.viewport_size.iter().all(|v| v.is_finite())
    }
}

impl From<Viewport> for Uniforms {
    #[inline]
    fn from(v: Viewport) -> Self {
        Self::new(v.width, v.height)
    }
}

impl UniformLayout for Uniforms {
    const NAME: &'static str = "Uniforms";
    const GPU_ALIGN: usize = 8;
    const FIELDS: &'static [FieldLayout] = &[
        FieldLayout::new("viewport_size", offset_of!(Uniforms, viewport_size), 8),
    ];
}

const _: () = {
    assert!(size_of::<Uniforms>() == Uniforms::SIZE);
    assert!(offset_of!(Uniforms, viewport_size) == 0);
    assert!(fields_fit(
        <Uniforms as UniformLayout>::FIELDS,
        Uniforms::SIZE,
        <Uniforms as UniformLayout>::GPU_ALIGN,
    ));
};
