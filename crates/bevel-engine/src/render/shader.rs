/// WGSL declarations of `PerRectUniforms` and `Uniforms` plus their bindings.
///
/// Bind group 0:
/// - binding 0: `uniforms: Uniforms`
/// - binding 1: `rect: PerRectUniforms` (dynamic offset)
pub const SHADER_TYPES_WGSL: &str = include_str!("shaders/rect_types.wgsl");

pub const UNIFORMS_BINDING: u32 = 0;
pub const RECT_BINDING: u32 = 1;

/// Prepends the uniform declarations to a shader body.
///
/// The body refers to the blocks as `uniforms` and `rect`.
pub fn compose_shader(body: &str) -> String {
    let mut src = String::with_capacity(SHADER_TYPES_WGSL.len() + body.len() + 1);
    src.push_str(SHADER_TYPES_WGSL);
    src.push('\n');
    src.push_str(body);
    src
}

/// Minimal body: stretches a quad over the rect and fills it.
#[cfg(test)]
pub(super) const SOLID_FILL_BODY: &str = r#"
@vertex
fn vs_main(@builtin(vertex_index) vi: u32) -> @builtin(position) vec4<f32> {
    let uv = vec2<f32>(f32(vi & 1u), f32((vi >> 1u) & 1u));
    let px = rect.origin + uv * rect.size;
    let ndc = px / uniforms.viewport_size * vec2<f32>(2.0, -2.0) + vec2<f32>(-1.0, 1.0);
    return vec4<f32>(ndc, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return rect.background_color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniforms::{PerRectUniforms, UniformLayout, Uniforms};

    fn parse(src: &str) -> naga::Module {
        match naga::front::wgsl::parse_str(src) {
            Ok(m) => m,
            Err(e) => panic!("WGSL parse error:\n{}", e.emit_to_string(src)),
        }
    }

    /// (name, offset, size) of each named member plus the struct span,
    /// as naga lays them out.
    fn wgsl_layout(module: &naga::Module, name: &str) -> (Vec<(String, usize, usize)>, usize) {
        let (_, ty) = module
            .types
            .iter()
            .find(|(_, t)| t.name.as_deref() == Some(name))
            .unwrap_or_else(|| panic!("struct {name} not declared"));

        let naga::TypeInner::Struct { members, span } = &ty.inner else {
            panic!("{name} is not a struct");
        };

        let fields = members
            .iter()
            .filter_map(|m| {
                let member = m.name.as_deref()?;
                if member.starts_with('_') {
                    return None;
                }
                let size = module.types[m.ty].inner.size(module.to_ctx()) as usize;
                Some((member.to_owned(), m.offset as usize, size))
            })
            .collect();

        (fields, *span as usize)
    }

    fn assert_matches<T: UniformLayout>(module: &naga::Module) {
        let (fields, span) = wgsl_layout(module, T::NAME);
        let host: Vec<(String, usize, usize)> = T::FIELDS
            .iter()
            .map(|f| (f.name.to_owned(), f.offset, f.size))
            .collect();
        assert_eq!(fields, host, "{} members", T::NAME);
        assert_eq!(span, T::SIZE, "{} size", T::NAME);
    }

    // ── declarations ──────────────────────────────────────────────────────

    #[test]
    fn per_rect_declaration_matches_host_layout() {
        assert_matches::<PerRectUniforms>(&parse(SHADER_TYPES_WGSL));
    }

    #[test]
    fn uniforms_declaration_matches_host_layout() {
        assert_matches::<Uniforms>(&parse(SHADER_TYPES_WGSL));
    }

    #[test]
    fn bindings_match_constants() {
        let module = parse(SHADER_TYPES_WGSL);
        let binding_of = |name: &str| {
            module
                .global_variables
                .iter()
                .find(|(_, g)| g.name.as_deref() == Some(name))
                .and_then(|(_, g)| g.binding.clone())
                .unwrap_or_else(|| panic!("global {name} missing"))
        };

        let u = binding_of("uniforms");
        assert_eq!((u.group, u.binding), (0, UNIFORMS_BINDING));
        let r = binding_of("rect");
        assert_eq!((r.group, r.binding), (0, RECT_BINDING));
    }

    // ── compose_shader ────────────────────────────────────────────────────

    #[test]
    fn composed_shader_validates() {
        let src = compose_shader(SOLID_FILL_BODY);
        let module = parse(&src);

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        if let Err(e) = validator.validate(&module) {
            panic!("WGSL validation error:\n{}", e.emit_to_string(&src));
        }
        assert_eq!(module.entry_points.len(), 2);
    }
}
