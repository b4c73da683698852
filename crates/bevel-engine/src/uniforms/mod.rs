//! Uniform blocks shared between the host and the rounded-rect shader.
//!
//! Two fixed layouts cross the CPU/GPU boundary:
//! - [`PerRectUniforms`]: one per rectangle drawn in a pass (80 bytes)
//! - [`Uniforms`]: one per frame/pass (16 bytes)
//!
//! Field order and padding are pinned with `#[repr(C)]` and explicit `_pad`
//! fields, then checked at compile time against the offsets the WGSL
//! declarations in `render::SHADER_TYPES_WGSL` produce. Bytes are written in
//! host order; every wgpu target is little-endian.
//!
//! Nothing here validates or clamps. Values reach the GPU bit-for-bit.

mod frame;
mod layout;
mod per_rect;

pub use frame::Uniforms;
pub use layout::{FieldLayout, UniformLayout};
pub use per_rect::PerRectUniforms;
