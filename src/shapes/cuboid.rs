//! Axis-aligned box: six independent quads with a shared-texture UV atlas.

use crate::{
    data_structures::{
        mesh::{Face, MeshContainer},
        model::Model,
    },
    render::ProgramHandle,
    shapes::{assemble_model, push_vertex, ShapeConfig},
};

// Each side: outward normal, then its four corners as half-extent signs in
// fan order (bottom-left, top-left, top-right, bottom-right), then the UV
// atlas quadrant so all six faces can share one texture.
const SIDES: [([f32; 3], [[f32; 3]; 4], [[f32; 2]; 4]); 6] = [
    // Left, -x
    (
        [-1.0, 0.0, 0.0],
        [
            [-1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, 1.0, 1.0],
            [-1.0, -1.0, 1.0],
        ],
        [[0.00, 0.33], [0.00, 0.66], [0.25, 0.66], [0.25, 0.33]],
    ),
    // Right, +x
    (
        [1.0, 0.0, 0.0],
        [
            [1.0, -1.0, 1.0],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, -1.0],
            [1.0, -1.0, -1.0],
        ],
        [[0.50, 0.33], [0.50, 0.66], [0.75, 0.66], [0.75, 0.33]],
    ),
    // Front, +z
    (
        [0.0, 0.0, 1.0],
        [
            [-1.0, -1.0, 1.0],
            [-1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            [1.0, -1.0, 1.0],
        ],
        [[0.25, 0.33], [0.25, 0.66], [0.50, 0.66], [0.50, 0.33]],
    ),
    // Back, -z
    (
        [0.0, 0.0, -1.0],
        [
            [1.0, -1.0, -1.0],
            [1.0, 1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, -1.0],
        ],
        [[0.75, 0.33], [0.75, 0.66], [1.00, 0.66], [1.00, 0.33]],
    ),
    // Top, +y
    (
        [0.0, 1.0, 0.0],
        [
            [-1.0, 1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, -1.0],
            [1.0, 1.0, 1.0],
        ],
        [[0.25, 0.66], [0.25, 1.00], [0.50, 1.00], [0.50, 0.66]],
    ),
    // Bottom, -y
    (
        [0.0, -1.0, 0.0],
        [
            [-1.0, -1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [1.0, -1.0, 1.0],
            [1.0, -1.0, -1.0],
        ],
        [[0.25, 0.00], [0.25, 0.33], [0.50, 0.33], [0.50, 0.00]],
    ),
];

/// Box geometry centered at the origin: 24 vertices, 12 faces.
pub fn mesh_container(
    width: f32,
    height: f32,
    depth: f32,
    color: [f32; 3],
    alpha: f32,
) -> MeshContainer {
    let half = [width / 2.0, height / 2.0, depth / 2.0];

    let mut vertices = Vec::with_capacity(24 * crate::data_structures::vertex::TOTAL_COMPONENT_COUNT);
    let mut faces = Vec::with_capacity(12);

    for (side, (normal, corners, uvs)) in SIDES.iter().enumerate() {
        for (corner, uv) in corners.iter().zip(uvs) {
            let position = [
                corner[0] * half[0],
                corner[1] * half[1],
                corner[2] * half[2],
            ];
            push_vertex(&mut vertices, position, color, alpha, *normal, *uv);
        }
        // Fan order per quad: [0, 1, 2] and [0, 2, 3]
        let offset = side * 4;
        faces.push(Face::new(offset, offset + 1, offset + 2));
        faces.push(Face::new(offset, offset + 2, offset + 3));
    }

    MeshContainer::new(vertices, faces)
}

/// Box model with a single indexed mesh.
pub fn model(
    width: f32,
    height: f32,
    depth: f32,
    program: ProgramHandle,
    config: ShapeConfig,
) -> Model {
    let container = mesh_container(width, height, depth, config.color, config.alpha);
    assemble_model("Box", vec![container.into_mesh()], program, config)
}
