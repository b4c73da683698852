//! Host-side upload of rect uniforms via wgpu.
//!
//! The shader body is supplied by the caller. This module owns:
//! - the WGSL declarations of the uniform blocks and their bind slots
//! - the bind group layout and uniform buffers that back those slots
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using `uniforms.viewport_size`.

mod ctx;
mod shader;
mod upload;

pub use ctx::RenderCtx;
pub use shader::{RECT_BINDING, SHADER_TYPES_WGSL, UNIFORMS_BINDING, compose_shader};
pub use upload::{RectUniformBuffers, aligned_stride, pack_strided};
