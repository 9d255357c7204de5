//! Flat quad facing +z, with clip-fraction texture coordinates.
//!
//! The `clip_s`/`clip_t` parameters inset the mapped texture rectangle from
//! each edge, which is how framebuffer quads sample a sub-rectangle of a
//! texture atlas.

use crate::{
    data_structures::{
        mesh::{Face, MeshContainer},
        model::Model,
    },
    render::ProgramHandle,
    shapes::{assemble_model, push_vertex, ShapeConfig},
};

/// Quad geometry centered at the origin: 4 vertices, 2 faces.
///
/// With `clip_s = clip_t = 0` the UV corners are exactly
/// `(0,0) (0,1) (1,1) (1,0)` in vertex order.
pub fn mesh_container(
    width: f32,
    height: f32,
    color: [f32; 3],
    alpha: f32,
    clip_s: f32,
    clip_t: f32,
) -> MeshContainer {
    let w_half = width / 2.0;
    let h_half = height / 2.0;
    let normal = [0.0, 0.0, 1.0];

    let mut vertices = Vec::with_capacity(4 * crate::data_structures::vertex::TOTAL_COMPONENT_COUNT);
    push_vertex(
        &mut vertices,
        [-w_half, -h_half, 0.0],
        color,
        alpha,
        normal,
        [clip_s, clip_t],
    );
    push_vertex(
        &mut vertices,
        [-w_half, h_half, 0.0],
        color,
        alpha,
        normal,
        [clip_s, 1.0 - clip_t],
    );
    push_vertex(
        &mut vertices,
        [w_half, h_half, 0.0],
        color,
        alpha,
        normal,
        [1.0 - clip_s, 1.0 - clip_t],
    );
    push_vertex(
        &mut vertices,
        [w_half, -h_half, 0.0],
        color,
        alpha,
        normal,
        [1.0 - clip_s, clip_t],
    );

    let faces = vec![Face::new(0, 1, 2), Face::new(0, 2, 3)];
    MeshContainer::new(vertices, faces)
}

/// Quad model with a single indexed mesh.
pub fn model(
    width: f32,
    height: f32,
    clip_s: f32,
    clip_t: f32,
    program: ProgramHandle,
    config: ShapeConfig,
) -> Model {
    let container = mesh_container(width, height, config.color, config.alpha, clip_s, clip_t);
    assemble_model("Quad", vec![container.into_mesh()], program, config)
}
