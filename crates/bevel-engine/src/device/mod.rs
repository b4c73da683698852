//! Headless GPU device acquisition.
//!
//! Creates the wgpu Instance/Adapter/Device/Queue used to back uniform
//! buffers. Surface and swapchain management belong to the host application.

mod gpu;
mod init;

pub use gpu::Gpu;
pub use init::GpuInit;
