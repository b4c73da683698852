use std::num::NonZeroU64;

use crate::uniforms::{PerRectUniforms, UniformLayout, Uniforms};

use super::RenderCtx;
use super::shader::{RECT_BINDING, UNIFORMS_BINDING};

const UNIFORMS_BINDING_SIZE: NonZeroU64 = match NonZeroU64::new(Uniforms::SIZE as u64) {
    Some(n) => n,
    None => panic!("Uniforms has zero size"),
};

const RECT_BINDING_SIZE: NonZeroU64 = match NonZeroU64::new(PerRectUniforms::SIZE as u64) {
    Some(n) => n,
    None => panic!("PerRectUniforms has zero size"),
};

const MIN_RECT_CAPACITY: usize = 64;

/// GPU buffers backing the `uniforms` and `rect` bindings.
///
/// All rects of a frame live in one buffer, one slot per rect. Slots are
/// `stride` bytes apart so each can be selected with a dynamic offset.
///
/// Per frame:
/// 1. `write_frame` once, before the pass is recorded
/// 2. `bind_rect` + a draw call for each rect
pub struct RectUniformBuffers {
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: Option<wgpu::BindGroup>,

    uniforms_ubo: wgpu::Buffer,
    rect_ubo: Option<wgpu::Buffer>,

    rect_stride: u64,
    rect_capacity: usize,
    rect_count: usize,

    staging: Vec<u8>,
    warned_non_finite: bool,
}

impl RectUniformBuffers {
    pub fn new(device: &wgpu::Device) -> Self {
        let alignment = u64::from(device.limits().min_uniform_buffer_offset_alignment);
        let rect_stride = aligned_stride(PerRectUniforms::SIZE as u64, alignment);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bevel rect uniforms bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: UNIFORMS_BINDING,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(UNIFORMS_BINDING_SIZE),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: RECT_BINDING,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: Some(RECT_BINDING_SIZE),
                    },
                    count: None,
                },
            ],
        });

        let uniforms_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("bevel uniforms ubo"),
            size: Uniforms::SIZE as u64,
            usage: ubo_usage(),
            mapped_at_creation: false,
        });

        log::debug!("rect uniform stride: {rect_stride} bytes (alignment {alignment})");

        Self {
            bind_group_layout,
            bind_group: None,
            uniforms_ubo,
            rect_ubo: None,
            rect_stride,
            rect_capacity: 0,
            rect_count: 0,
            staging: Vec::new(),
            warned_non_finite: false,
        }
    }

    /// Layout for group 0 of a pipeline that includes `SHADER_TYPES_WGSL`.
    #[inline]
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Byte distance between consecutive rect slots.
    #[inline]
    pub fn rect_stride(&self) -> u64 {
        self.rect_stride
    }

    #[inline]
    pub fn rect_capacity(&self) -> usize {
        self.rect_capacity
    }

    /// Number of rects written by the last `write_frame`.
    #[inline]
    pub fn len(&self) -> usize {
        self.rect_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rect_count == 0
    }

    /// Uploads the frame block and every rect block for this frame.
    ///
    /// Values are written unchanged, including non-finite ones.
    pub fn write_frame(
        &mut self,
        ctx: &RenderCtx<'_>,
        uniforms: &Uniforms,
        rects: &[PerRectUniforms],
    ) {
        let non_finite = !uniforms.is_finite() || rects.iter().any(|r| !r.is_finite());
        if non_finite && !self.warned_non_finite {
            log::debug!("RectUniformBuffers: non-finite uniform values uploaded as-is");
            self.warned_non_finite = true;
        }

        ctx.queue.write_buffer(&self.uniforms_ubo, 0, uniforms.as_bytes());

        self.rect_count = rects.len();
        if rects.is_empty() {
            return;
        }

        self.ensure_rect_capacity(ctx.device, rects.len());
        self.ensure_bind_group(ctx.device);

        pack_strided(rects, self.rect_stride as usize, &mut self.staging);

        let Some(rect_ubo) = self.rect_ubo.as_ref() else {
            return;
        };
        ctx.queue.write_buffer(rect_ubo, 0, &self.staging);
    }

    /// Binds group `group` with the dynamic offset of rect `index`.
    ///
    /// Returns `false` (and binds nothing) if `index` was not written this frame.
    pub fn bind_rect(&self, rpass: &mut wgpu::RenderPass<'_>, group: u32, index: usize) -> bool {
        if index >= self.rect_count {
            log::debug!(
                "RectUniformBuffers: rect {index} out of range ({} written)",
                self.rect_count
            );
            return false;
        }
        let Some(bind_group) = self.bind_group.as_ref() else {
            return false;
        };
        let Ok(offset) = u32::try_from(index as u64 * self.rect_stride) else {
            log::debug!("RectUniformBuffers: rect {index} offset exceeds u32");
            return false;
        };

        rpass.set_bind_group(group, bind_group, &[offset]);
        true
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_rect_capacity(&mut self, device: &wgpu::Device, required: usize) {
        if required <= self.rect_capacity && self.rect_ubo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(MIN_RECT_CAPACITY);
        let new_size = new_cap as u64 * self.rect_stride;

        log::debug!("RectUniformBuffers: growing rect ubo to {new_cap} slots ({new_size} bytes)");

        self.rect_ubo = Some(device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("bevel rect ubo"),
            size: new_size,
            usage: ubo_usage(),
            mapped_at_creation: false,
        }));
        self.rect_capacity = new_cap;
        self.bind_group = None;
    }

    fn ensure_bind_group(&mut self, device: &wgpu::Device) {
        if self.bind_group.is_some() {
            return;
        }
        let Some(rect_ubo) = self.rect_ubo.as_ref() else {
            return;
        };

        self.bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bevel rect uniforms bind group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: UNIFORMS_BINDING,
                    resource: self.uniforms_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: RECT_BINDING,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: rect_ubo,
                        offset: 0,
                        size: Some(RECT_BINDING_SIZE),
                    }),
                },
            ],
        }));
    }
}

fn ubo_usage() -> wgpu::BufferUsages {
    let usage = wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST;
    // Tests read uploaded bytes back.
    if cfg!(test) {
        usage | wgpu::BufferUsages::COPY_SRC
    } else {
        usage
    }
}

/// Rounds `size` up to a multiple of `alignment` (treated as at least 1).
#[inline]
pub fn aligned_stride(size: u64, alignment: u64) -> u64 {
    let alignment = alignment.max(1);
    size.div_ceil(alignment) * alignment
}

/// Writes `items` into `out`, item `i` at byte `i * stride`, gaps zeroed.
///
/// `out` is cleared first. `stride` must be at least `T::SIZE`.
pub fn pack_strided<T: UniformLayout>(items: &[T], stride: usize, out: &mut Vec<u8>) {
    debug_assert!(
        stride >= T::SIZE,
        "stride {stride} smaller than {} ({})",
        T::NAME,
        T::SIZE
    );

    out.clear();
    out.resize(items.len() * stride, 0);
    for (slot, item) in out.chunks_exact_mut(stride).zip(items) {
        slot[..T::SIZE].copy_from_slice(item.as_bytes());
    }
}
