//! Procedural primitive shapes.
//!
//! Each shape module exposes a pure generator mapping shape parameters to
//! geometry in shape-local space, plus a `model` constructor that wires the
//! generated meshes, a program and an optional texture into a single-child
//! [`Model`]. Shapes are free functions returning populated models, not
//! subclasses; what varies between them is only the generated topology.
//!
//! Generators accept unchecked numeric parameters: zero or negative extents
//! produce degenerate but non-crashing geometry. The one fail-fast
//! configuration check is the sphere's stack-count floor.

pub mod cone;
pub mod cuboid;
pub mod cylinder;
pub mod quad;
pub mod sphere;

use cgmath::Vector3;

use crate::{
    data_structures::{mesh::Mesh, model::Model},
    geometry::Rotation,
    render::{ProgramHandle, TextureHandle},
};

/// Radial overshoot applied to cap rims so a cap never z-fights the surface
/// it closes.
pub(crate) const EXTRA_BORDER: f32 = 1.001;

/// Shared optional parameters of every shape constructor.
#[derive(Clone, Debug)]
pub struct ShapeConfig {
    pub color: [f32; 3],
    pub alpha: f32,
    /// Texture applied to every mesh of the shape, if any.
    pub texture: Option<TextureHandle>,
    pub position: Vector3<f32>,
    pub rotation: Rotation,
    pub scale: Vector3<f32>,
    /// Model name; each shape substitutes its own default when `None`.
    pub name: Option<String>,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            alpha: 1.0,
            texture: None,
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Rotation::up_y(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            name: None,
        }
    }
}

/// Appends one interleaved vertex to a flat buffer.
pub(crate) fn push_vertex(
    buffer: &mut Vec<f32>,
    position: [f32; 3],
    color: [f32; 3],
    alpha: f32,
    normal: [f32; 3],
    uv: [f32; 2],
) {
    buffer.extend_from_slice(&position);
    buffer.extend_from_slice(&color);
    buffer.push(alpha);
    buffer.extend_from_slice(&normal);
    buffer.extend_from_slice(&uv);
}

/// Common model wiring for generated shapes: every mesh renders with the
/// single program, the optional texture decorates every mesh, and one child
/// node carrying the configured transform references all of them.
pub(crate) fn assemble_model(
    default_name: &str,
    meshes: Vec<Mesh>,
    program: ProgramHandle,
    config: ShapeConfig,
) -> Model {
    let ShapeConfig {
        texture,
        position,
        rotation,
        scale,
        name,
        ..
    } = config;

    let mut model = Model::new(name.unwrap_or_else(|| default_name.to_string()));
    let mesh_count = meshes.len();
    for (mesh_idx, mesh) in meshes.into_iter().enumerate() {
        model.meshes.push(mesh);
        model.mesh_idx_with_program.push(0);
        if let Some(texture) = texture {
            model.texture_ids.push(texture);
            model.texture_idx_with_mesh_idx.push(mesh_idx);
        }
    }
    model.programs.push(program);

    let mesh_indices: Vec<usize> = (0..mesh_count).collect();
    model.with_single_child(position, rotation, scale, &mesh_indices)
}
