//! Cylinder: indexed lateral tube plus optional bottom/top fan caps.
//!
//! The tube is an indexed triangle list equivalent to a strip: one bottom and
//! one top ring vertex per slice, two triangles per slice quad, with the last
//! quad wrapping back onto the first ring pair. Caps are separate
//! triangle-fan meshes with the same extra-border rim trick as the cone cap.

use std::f32::consts::PI;

use crate::{
    data_structures::{
        mesh::{DrawMode, Face, Mesh, MeshContainer},
        model::Model,
        vertex::TOTAL_COMPONENT_COUNT,
    },
    render::ProgramHandle,
    shapes::{assemble_model, push_vertex, ShapeConfig, EXTRA_BORDER},
};

/// Lateral tube geometry: `slices * 2` vertices, two faces per slice quad.
pub fn lateral_mesh_container(
    height: f32,
    slices: usize,
    radius: f32,
    color: [f32; 3],
    alpha: f32,
) -> MeshContainer {
    let mut vertices = Vec::with_capacity(slices * 2 * TOTAL_COMPONENT_COUNT);
    let mut faces = Vec::with_capacity(slices * 2);

    for slice in 0..slices {
        let theta = -2.0 * PI * slice as f32 / (slices - 1) as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let tex_x = slice as f32 / (slices - 1) as f32;
        let normal = [cos_theta, 0.0, sin_theta];
        let x = radius * cos_theta;
        let z = radius * sin_theta;

        push_vertex(&mut vertices, [x, 0.0, z], color, alpha, normal, [tex_x, 0.0]);
        push_vertex(&mut vertices, [x, height, z], color, alpha, normal, [tex_x, 1.0]);

        // Quad between this slice and the next; the last quad wraps to the
        // first ring pair.
        let bottom = slice * 2;
        let top = bottom + 1;
        let next_bottom = if slice == slices - 1 { 0 } else { bottom + 2 };
        let next_top = next_bottom + 1;
        faces.push(Face::new(bottom, top, next_bottom));
        faces.push(Face::new(next_bottom, top, next_top));
    }

    MeshContainer::new(vertices, faces)
}

/// One end cap as a triangle fan at height `y`, facing up or down.
pub fn cap_mesh(
    slices: usize,
    radius: f32,
    y: f32,
    facing_up: bool,
    color: [f32; 3],
    alpha: f32,
) -> Mesh {
    let mut vertices = Vec::with_capacity((slices + 1) * TOTAL_COMPONENT_COUNT);
    let normal = if facing_up {
        [0.0, 1.0, 0.0]
    } else {
        [0.0, -1.0, 0.0]
    };

    push_vertex(&mut vertices, [0.0, y, 0.0], color, alpha, normal, [0.5, 0.5]);
    for slice in 0..slices {
        let theta = -2.0 * PI * slice as f32 / (slices - 1) as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let rim = EXTRA_BORDER * radius;
        push_vertex(
            &mut vertices,
            [rim * cos_theta, y, rim * sin_theta],
            color,
            alpha,
            normal,
            [0.5 + cos_theta * 0.5, 0.5 + sin_theta * 0.5],
        );
    }

    Mesh::from_vertex_order(vertices, slices + 1, DrawMode::TriangleFan)
}

/// All meshes of a cylinder in pool order: tube, then bottom cap, then top
/// cap, skipping caps that were not requested.
pub fn meshes(
    height: f32,
    slices: usize,
    radius: f32,
    bottom_cap: bool,
    top_cap: bool,
    color: [f32; 3],
    alpha: f32,
) -> Vec<Mesh> {
    let mut meshes = vec![lateral_mesh_container(height, slices, radius, color, alpha).into_mesh()];
    if bottom_cap {
        meshes.push(cap_mesh(slices, radius, 0.0, false, color, alpha));
    }
    if top_cap {
        meshes.push(cap_mesh(slices, radius, height, true, color, alpha));
    }
    meshes
}

/// Cylinder model: tube plus the requested caps.
pub fn model(
    height: f32,
    slices: usize,
    radius: f32,
    bottom_cap: bool,
    top_cap: bool,
    program: ProgramHandle,
    config: ShapeConfig,
) -> Model {
    let meshes = meshes(
        height,
        slices,
        radius,
        bottom_cap,
        top_cap,
        config.color,
        config.alpha,
    );
    assemble_model("Cylinder", meshes, program, config)
}
