use anyhow::{Context, Result};

use crate::coords::Viewport;
use crate::render::RenderCtx;

use super::GpuInit;

/// Owns a wgpu device and queue without any surface.
///
/// Enough to create and fill uniform buffers; presentation is the
/// embedding application's job.
pub struct Gpu {
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl Gpu {
    /// Acquires an adapter, device and queue.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new_headless(init: GpuInit) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backends,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: None,
                force_fallback_adapter: init.force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("gpu: using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("bevel-engine device"),
                required_features: init.required_features,
                required_limits: init.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        Ok(Self { device, queue })
    }

    /// Blocking wrapper around [`new_headless`](Self::new_headless).
    pub fn new_headless_blocking(init: GpuInit) -> Result<Self> {
        pollster::block_on(Self::new_headless(init))
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Borrows device/queue for one frame at the given viewport.
    pub fn render_ctx(&self, viewport: Viewport) -> RenderCtx<'_> {
        RenderCtx::new(&self.device, &self.queue, viewport)
    }
}
