//! Bevel engine crate.
//!
//! Host side of a bordered, rounded-rectangle shader: the byte-exact uniform
//! blocks it reads, their WGSL declarations, and the wgpu buffers they are
//! uploaded through.

pub mod coords;
pub mod device;
pub mod logging;
pub mod render;
pub mod uniforms;

pub use uniforms::{PerRectUniforms, UniformLayout, Uniforms};
