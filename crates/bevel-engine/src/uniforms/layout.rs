use bytemuck::Pod;

/// Byte placement of one field inside a uniform block.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
}

impl FieldLayout {
    #[inline]
    pub const fn new(name: &'static str, offset: usize, size: usize) -> Self {
        Self { name, offset, size }
    }

    /// One past the last byte of the field.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }
}

/// A host struct whose bytes are read directly by a shader.
///
/// `FIELDS` lists the named (non-padding) members in declaration order.
/// `SIZE` is the padded size the shader expects, `GPU_ALIGN` the alignment of
/// the largest member under WGSL uniform rules.
pub trait UniformLayout: Pod {
    /// Struct name as declared on the shader side.
    const NAME: &'static str;
    const FIELDS: &'static [FieldLayout];
    const SIZE: usize = std::mem::size_of::<Self>();
    const GPU_ALIGN: usize;

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Appends the block's bytes to `dst`.
    #[inline]
    fn write_to(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(self.as_bytes());
    }

    fn field(name: &str) -> Option<FieldLayout> {
        Self::FIELDS.iter().copied().find(|f| f.name == name)
    }
}

/// Compile-time check used by the block definitions.
pub(super) const fn fields_fit(fields: &[FieldLayout], size: usize, align: usize) -> bool {
    if size % align != 0 {
        return false;
    }
    let mut i = 0;
    let mut prev_end = 0;
    while i < fields.len() {
        let f = fields[i];
        // Each vector member sits on its own natural alignment.
        let natural = if f.size > 8 { 16 } else { f.size };
        if f.offset % natural != 0 || f.offset < prev_end || f.end() > size {
            return false;
        }
        prev_end = f.end();
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_fit_accepts_packed_layout() {
        let fields = [FieldLayout::new("a", 0, 8), FieldLayout::new("b", 16, 16)];
        assert!(fields_fit(&fields, 32, 16));
    }

    #[test]
    fn fields_fit_rejects_misaligned_vec4() {
        let fields = [FieldLayout::new("a", 0, 8), FieldLayout::new("b", 8, 16)];
        assert!(!fields_fit(&fields, 32, 16));
    }

    #[test]
    fn fields_fit_rejects_overlap_and_overflow() {
        let overlap = [FieldLayout::new("a", 0, 16), FieldLayout::new("b", 8, 8)];
        assert!(!fields_fit(&overlap, 16, 16));

        let overflow = [FieldLayout::new("a", 16, 16)];
        assert!(!fields_fit(&overflow, 16, 16));
    }

    #[test]
    fn fields_fit_rejects_unrounded_size() {
        let fields = [FieldLayout::new("a", 0, 4)];
        assert!(!fields_fit(&fields, 4, 16));
    }
}
