//! Host-side geometry and color values used to build uniform blocks.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Shaders map these into NDC using `Uniforms::viewport_size`.

mod border_size;
mod color;
mod rect;
mod vec2;
mod viewport;

pub use border_size::BorderSize;
pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
