//! Triangle faces, CPU-side mesh containers and drawable meshes.
//!
//! A [`MeshContainer`] is the output of a shape generator: a flat interleaved
//! vertex buffer plus a face list. Containers can be merged into one shared
//! buffer (re-indexing the faces) so several generated shapes become a single
//! drawable unit, guarded by the 16-bit index limit. A [`Mesh`] is the
//! drawable counterpart handed to the graphics backend, tagged with its draw
//! mode; strip and fan meshes carry no face list at all.

use cgmath::{Matrix4, Vector3};

use crate::data_structures::vertex::{self, TOTAL_COMPONENT_COUNT};

/// Indices are stored as `u16`, so a single indexed mesh is capped at this
/// many vertices.
pub const MAX_VERTEX_COUNT: usize = 32767;

/// One triangle, as three indices into a vertex buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u16,
    pub b: u16,
    pub c: u16,
}

impl Face {
    /// Builds a face from untruncated indices. Values must already fit in
    /// 16 bits; [`MeshContainer::merge_into`] guarantees this for merged data.
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            a: a as u16,
            b: b as u16,
            c: c as u16,
        }
    }

    pub fn indices(&self) -> [u16; 3] {
        [self.a, self.b, self.c]
    }
}

/// How a mesh's vertices are assembled into triangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    /// Triangle list through an index buffer.
    IndexedTriangles,
    /// Vertices already laid out as a triangle strip; no indices.
    TriangleStrip,
    /// Vertices already laid out as a triangle fan; no indices.
    TriangleFan,
}

/// Generated geometry in shape-local space: interleaved vertices and faces.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshContainer {
    pub vertex_data: Vec<f32>,
    pub faces: Vec<Face>,
}

impl MeshContainer {
    pub fn new(vertex_data: Vec<f32>, faces: Vec<Face>) -> Self {
        Self { vertex_data, faces }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len() / TOTAL_COMPONENT_COUNT
    }

    /// Appends this container's data to a target buffer pair, offsetting the
    /// copied face indices by the target's current vertex count.
    ///
    /// Returns `false` without touching the target when the combined vertex
    /// count would no longer fit in 16-bit indices; the caller then decides
    /// whether to start a new container.
    pub fn merge_into(&self, vertices: &mut Vec<f32>, faces: &mut Vec<Face>) -> bool {
        let base = vertices.len() / TOTAL_COMPONENT_COUNT;
        if base + self.vertex_count() > MAX_VERTEX_COUNT {
            return false;
        }
        vertices.extend_from_slice(&self.vertex_data);
        for face in &self.faces {
            faces.push(Face::new(
                face.a as usize + base,
                face.b as usize + base,
                face.c as usize + base,
            ));
        }
        true
    }

    /// Bakes a world placement into the vertex buffer in place. See
    /// [`vertex::bake_position_and_normal`] for the normal-handling caveat.
    pub fn bake_position_and_normal(
        &mut self,
        position: Vector3<f32>,
        model_matrix: &Matrix4<f32>,
    ) {
        vertex::bake_position_and_normal(&mut self.vertex_data, position, model_matrix);
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::from_container(self)
    }
}

/// A drawable mesh: vertex data, optional index data and a draw-mode tag.
///
/// Topology is fixed at construction. The only later mutation is
/// [`Mesh::update_vertex_range`], used at authoring time to bake world-space
/// transforms into the buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub vertex_data: Vec<f32>,
    pub faces: Option<Vec<Face>>,
    pub draw_mode: DrawMode,
    /// Indices to draw for indexed meshes, vertices to draw otherwise.
    pub element_count: usize,
}

impl Mesh {
    pub fn from_container(container: MeshContainer) -> Self {
        let element_count = container.faces.len() * 3;
        Self {
            vertex_data: container.vertex_data,
            faces: Some(container.faces),
            draw_mode: DrawMode::IndexedTriangles,
            element_count,
        }
    }

    /// A mesh drawn directly from vertex order, for strip and fan layouts
    /// that need no index buffer.
    pub fn from_vertex_order(
        vertex_data: Vec<f32>,
        element_count: usize,
        draw_mode: DrawMode,
    ) -> Self {
        Self {
            vertex_data,
            faces: None,
            draw_mode,
            element_count,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len() / TOTAL_COMPONENT_COUNT
    }

    /// Overwrites `data.len()` floats starting at component offset `start`.
    pub fn update_vertex_range(&mut self, start: usize, data: &[f32]) {
        self.vertex_data[start..start + data.len()].copy_from_slice(data);
    }

    /// Reads `count` floats starting at component offset `start`.
    pub fn read_vertex_range(&self, start: usize, count: usize) -> &[f32] {
        &self.vertex_data[start..start + count]
    }

    /// Bakes a world placement into the whole vertex buffer in place.
    pub fn bake_position_and_normal(
        &mut self,
        position: Vector3<f32>,
        model_matrix: &Matrix4<f32>,
    ) {
        vertex::bake_position_and_normal(&mut self.vertex_data, position, model_matrix);
    }
}
