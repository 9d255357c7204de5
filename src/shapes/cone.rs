//! Cone: slanted lateral surface plus an optional base cap.
//!
//! The lateral surface duplicates the base and apex per slice so every
//! triangle carries its own slanted normal instead of sharing a smoothed one.
//! The cap is a separate triangle-fan mesh whose rim is scaled slightly past
//! the base radius to avoid z-fighting along the shared edge.

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

/// Lateral surface geometry: `slices * 2` vertices, one face per slice.
pub fn lateral_mesh_container(
    height: f32,
    slices: usize,
    radius: f32,
    color: [f32; 3],
    alpha: f32,
) -> MeshContainer {
    let mut vertices = Vec::with_capacity(slices * 2 * TOTAL_COMPONENT_COUNT);
    let mut faces = Vec::with_capacity(slices);

    // Per-slice slanted normal from the flank right triangle.
    let flank = (radius * radius + height * height).sqrt();
    let slant_up = radius / flank;
    let slant_out = height / flank;

    for slice in 0..slices {
        let theta = -2.0 * PI * slice as f32 / (slices - 1) as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let tex_x = slice as f32 / (slices - 1) as f32;
        let normal = [slant_out * cos_theta, slant_up, slant_out * sin_theta];

        // Base-rim vertex of this slice.
        push_vertex(
            &mut vertices,
            [radius * cos_theta, 0.0, radius * sin_theta],
            color,
            alpha,
            normal,
            [tex_x, 0.0],
        );
        // Apex vertex, duplicated per slice to keep the slanted normal.
        push_vertex(
            &mut vertices,
            [0.0, height, 0.0],
            color,
            alpha,
            normal,
            [0.5, 1.0],
        );

        // The last slice closes back onto vertex 0.
        let base = slice * 2;
        let next = if slice == slices - 1 { 0 } else { base + 2 };
        faces.push(Face::new(base, base + 1, next));
    }

    MeshContainer::new(vertices, faces)
}

/// Base cap as a downward-facing triangle fan: center first, then the rim
/// scaled by the extra border.
pub fn cap_mesh(slices: usize, radius: f32, color: [f32; 3], alpha: f32) -> Mesh {
    let mut vertices = Vec::with_capacity((slices + 1) * TOTAL_COMPONENT_COUNT);
    let normal = [0.0, -1.0, 0.0];

    push_vertex(&mut vertices, [0.0, 0.0, 0.0], color, alpha, normal, [0.5, 0.5]);
    for slice in 0..slices {
        let theta = -2.0 * PI * slice as f32 / (slices - 1) as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let rim = EXTRA_BORDER * radius;
        push_vertex(
            &mut vertices,
            [rim * cos_theta, 0.0, rim * sin_theta],
            color,
            alpha,
            normal,
            [0.5 + cos_theta * 0.5, 0.5 + sin_theta * 0.5],
        );
    }

    Mesh::from_vertex_order(vertices, slices + 1, DrawMode::TriangleFan)
}

/// Cone model: lateral mesh, plus the cap mesh when `cap` is set.
pub fn model(
    height: f32,
    slices: usize,
    radius: f32,
    cap: bool,
    program: ProgramHandle,
    config: ShapeConfig,
) -> Model {
    let mut meshes = vec![
        lateral_mesh_container(height, slices, radius, config.color, config.alpha).into_mesh(),
    ];
    if cap {
        meshes.push(cap_mesh(slices, radius, config.color, config.alpha));
    }
    assemble_model("Cone", meshes, program, config)
}
