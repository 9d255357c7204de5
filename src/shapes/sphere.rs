//! UV sphere: latitude rings between two single pole vertices.
//!
//! `stacks` counts latitude rows including both poles, so a sphere carries
//! `stacks - 2` intermediate rings of `slices` vertices each plus the two
//! poles. Longitude uses `slices - 1` as the angle and texture-U denominator:
//! the last slice lands back on the first slice's position while its texture
//! coordinate still reaches 1.0, and the closing faces wrap to the ring start
//! instead of a new seam vertex.

use std::f32::consts::PI;

use crate::{
    data_structures::{
        mesh::{Face, MeshContainer},
        model::Model,
        vertex::TOTAL_COMPONENT_COUNT,
    },
    error::ShapeError,
    render::ProgramHandle,
    shapes::{assemble_model, push_vertex, ShapeConfig},
};

/// Sphere geometry centered at the origin.
///
/// Vertex count is `slices * (stacks - 2) + 2`; face count is
/// `2 * slices` pole fans plus `2 * slices * (stacks - 3)` band strips.
/// Fails fast when `stacks < 3`, which cannot form a closed surface.
pub fn mesh_container(
    stacks: usize,
    slices: usize,
    radius: f32,
    color: [f32; 3],
    alpha: f32,
) -> Result<MeshContainer, ShapeError> {
    if stacks < 3 {
        return Err(ShapeError::TooFewStacks { stacks });
    }

    let rings = stacks - 2;
    let vertex_count = rings * slices + 2;
    let mut vertices = Vec::with_capacity(vertex_count * TOTAL_COMPONENT_COUNT);

    // Bottom pole is a single vertex; no slice ring needed there.
    push_vertex(
        &mut vertices,
        [0.0, -radius, 0.0],
        color,
        alpha,
        [0.0, -1.0, 0.0],
        [0.5, 0.0],
    );

    for ring in 0..rings {
        let tex_y = (ring + 1) as f32 / (stacks - 1) as f32;
        let phi = PI * tex_y - PI / 2.0;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for slice in 0..slices {
            let theta = -2.0 * PI * slice as f32 / (slices - 1) as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let tex_x = slice as f32 / (slices - 1) as f32;
            let normal = [cos_phi * cos_theta, sin_phi, cos_phi * sin_theta];
            push_vertex(
                &mut vertices,
                [radius * normal[0], radius * normal[1], radius * normal[2]],
                color,
                alpha,
                normal,
                [tex_x, tex_y],
            );
        }
    }

    push_vertex(
        &mut vertices,
        [0.0, radius, 0.0],
        color,
        alpha,
        [0.0, 1.0, 0.0],
        [0.5, 1.0],
    );

    let first_ring = 1;
    let top_pole = first_ring + rings * slices;
    let mut faces = Vec::with_capacity(2 * slices * (rings - 1) + 2 * slices);

    // Bottom pole fan. The closing face wraps to the ring start, not past it.
    for slice in 0..slices {
        let next = if slice == slices - 1 { 0 } else { slice + 1 };
        faces.push(Face::new(0, first_ring + slice, first_ring + next));
    }

    // Strip faces between consecutive rings.
    for band in 0..rings - 1 {
        let lower = first_ring + band * slices;
        for slice in 0..slices {
            let next = if slice == slices - 1 { 0 } else { slice + 1 };
            let offset = lower + slice;
            let next_bottom = lower + next;
            let next_top = next_bottom + slices;
            faces.push(Face::new(offset, offset + slices, next_bottom));
            faces.push(Face::new(next_bottom, offset + slices, next_top));
        }
    }

    // Top pole fan.
    let last_ring = first_ring + (rings - 1) * slices;
    for slice in 0..slices {
        let next = if slice == slices - 1 { 0 } else { slice + 1 };
        faces.push(Face::new(last_ring + slice, top_pole, last_ring + next));
    }

    Ok(MeshContainer::new(vertices, faces))
}

/// Sphere model with a single indexed mesh.
pub fn model(
    stacks: usize,
    slices: usize,
    radius: f32,
    program: ProgramHandle,
    config: ShapeConfig,
) -> Result<Model, ShapeError> {
    let container = mesh_container(stacks, slices, radius, config.color, config.alpha)?;
    Ok(assemble_model(
        "Sphere",
        vec![container.into_mesh()],
        program,
        config,
    ))
}
