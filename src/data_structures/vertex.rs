//! Interleaved vertex layout shared by every generated mesh.
//!
//! Each vertex packs position(3), color(4), normal(3) and texture
//! coordinates(2) into 12 floats. Generators build flat `f32` buffers in this
//! layout and backends can reinterpret them with `bytemuck` for upload
//! without copying.

use bytemuck::{Pod, Zeroable};
use cgmath::{InnerSpace, Matrix4, Vector3, Vector4};

pub const POSITION_COMPONENT_COUNT: usize = 3;
pub const COLOR_COMPONENT_COUNT: usize = 4;
pub const NORMAL_COMPONENT_COUNT: usize = 3;
pub const TEXTURE_COORDINATES_COMPONENT_COUNT: usize = 2;
pub const TOTAL_COMPONENT_COUNT: usize = POSITION_COMPONENT_COUNT
    + COLOR_COMPONENT_COUNT
    + NORMAL_COMPONENT_COUNT
    + TEXTURE_COORDINATES_COMPONENT_COUNT;
pub const STRIDE: usize = TOTAL_COMPONENT_COUNT * std::mem::size_of::<f32>();

/// One interleaved vertex. Layout matches the flat `f32` buffers produced by
/// the shape generators, so a vertex buffer can be viewed either way.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn to_components(&self) -> [f32; TOTAL_COMPONENT_COUNT] {
        bytemuck::cast(*self)
    }
}

// Offsets of the normal components within one vertex.
const NORMAL_OFFSET: usize = POSITION_COMPONENT_COUNT + COLOR_COMPONENT_COUNT;

/// Bakes a world placement into an interleaved vertex buffer in place.
///
/// Positions are transformed homogeneously with `w = 1`. Normals are pushed
/// through the same matrix (also with `w = 1`), recentered by subtracting the
/// model's world `position` and renormalized. This stands in for a proper
/// inverse-transpose normal matrix and is only correct for uniform,
/// non-skewing scale.
pub fn bake_position_and_normal(
    vertex_data: &mut [f32],
    position: Vector3<f32>,
    model_matrix: &Matrix4<f32>,
) {
    for vertex in vertex_data.chunks_exact_mut(TOTAL_COMPONENT_COUNT) {
        let world = model_matrix * Vector4::new(vertex[0], vertex[1], vertex[2], 1.0);
        vertex[0] = world.x;
        vertex[1] = world.y;
        vertex[2] = world.z;

        let normal = Vector4::new(
            vertex[NORMAL_OFFSET],
            vertex[NORMAL_OFFSET + 1],
            vertex[NORMAL_OFFSET + 2],
            1.0,
        );
        let rotated = ((model_matrix * normal).truncate() - position).normalize();
        vertex[NORMAL_OFFSET] = rotated.x;
        vertex[NORMAL_OFFSET + 1] = rotated.y;
        vertex[NORMAL_OFFSET + 2] = rotated.z;
    }
}
