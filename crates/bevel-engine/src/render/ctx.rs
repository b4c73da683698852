use crate::coords::Viewport;
use crate::uniforms::Uniforms;

/// Renderer-facing context (device/queue + viewport).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub viewport: Viewport, // logical px
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue, viewport: Viewport) -> Self {
        Self {
            device,
            queue,
            viewport,
        }
    }

    /// Per-frame block for the current viewport.
    #[inline]
    pub fn frame_uniforms(&self) -> Uniforms {
        Uniforms::from(self.viewport)
    }
}
