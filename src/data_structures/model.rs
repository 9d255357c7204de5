//! Renderable model: resource pools, index tables and the child subtree.
//!
//! A [`Model`] is the root of a scene subtree. It owns the pools of meshes,
//! program handles and texture handles, plus the parallel index tables that
//! relate them: mesh `i` renders with `programs[mesh_idx_with_program[i]]`,
//! and texture slot `j` decorates mesh `texture_idx_with_mesh_idx[j]` (zero
//! or more slots may target the same mesh). Descendant nodes reference
//! meshes purely by index, which is what lets two independently built models
//! be merged into one owner with [`Model::absorb`].

use cgmath::{Matrix4, SquareMatrix, Vector3};
use log::{debug, warn};

use crate::{
    data_structures::{
        mesh::Mesh,
        node::{self, ChildNode},
    },
    geometry::Rotation,
    render::{DrawCall, GraphicsBackend, ProgramHandle, TextureHandle},
    uniforms::Uniforms,
};

/// A named, renderable subtree with its owned GPU resource pools.
#[derive(Clone, Debug)]
pub struct Model {
    /// Queryable handle used by collaborators to find specific subtrees.
    pub name: String,
    pub meshes: Vec<Mesh>,
    pub programs: Vec<ProgramHandle>,
    /// Parallel to `meshes`: mesh `i` renders with
    /// `programs[mesh_idx_with_program[i]]`.
    pub mesh_idx_with_program: Vec<usize>,
    pub texture_ids: Vec<TextureHandle>,
    /// Parallel to `texture_ids`: slot `j` decorates mesh
    /// `texture_idx_with_mesh_idx[j]`.
    pub texture_idx_with_mesh_idx: Vec<usize>,
    pub children: Vec<ChildNode>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meshes: Vec::new(),
            programs: Vec::new(),
            mesh_idx_with_program: Vec::new(),
            texture_ids: Vec::new(),
            texture_idx_with_mesh_idx: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, child: ChildNode) {
        self.children.push(child);
    }

    /// Removes the top-level child at `index` with the same collapse
    /// semantics as [`ChildNode::remove`].
    pub fn remove(&mut self, index: usize) -> Option<ChildNode> {
        node::remove_collapsing(&mut self.children, index)
    }

    /// Program resolved through the mesh-to-program table.
    pub fn program_for(&self, mesh_idx: usize) -> Option<ProgramHandle> {
        self.mesh_idx_with_program
            .get(mesh_idx)
            .map(|&program_idx| self.programs[program_idx])
    }

    /// Texture handles whose slot targets `mesh_idx`, in slot order.
    pub fn textures_for(&self, mesh_idx: usize) -> Vec<TextureHandle> {
        self.texture_idx_with_mesh_idx
            .iter()
            .enumerate()
            .filter(|(_, &target)| target == mesh_idx)
            .map(|(slot, _)| self.texture_ids[slot])
            .collect()
    }

    /// Depth-first render of the whole subtree.
    ///
    /// At every node the accumulated model matrix is
    /// `parent_matrix * node.local_matrix()`, passed down the recursion by
    /// value; each mesh reference resolves its program and textures through
    /// the index tables and becomes one draw call.
    pub fn render(&self, backend: &mut dyn GraphicsBackend, uniforms: &Uniforms) {
        for child in &self.children {
            self.render_node(child, Matrix4::identity(), None, backend, uniforms);
        }
    }

    /// Like [`Model::render`] but every mesh is drawn with the supplied
    /// program (depth-only shadow passes), keeping normal texture resolution.
    pub fn render_with_program(
        &self,
        program: ProgramHandle,
        backend: &mut dyn GraphicsBackend,
        uniforms: &Uniforms,
    ) {
        for child in &self.children {
            self.render_node(child, Matrix4::identity(), Some(program), backend, uniforms);
        }
    }

    fn render_node(
        &self,
        node: &ChildNode,
        parent_matrix: Matrix4<f32>,
        forced_program: Option<ProgramHandle>,
        backend: &mut dyn GraphicsBackend,
        uniforms: &Uniforms,
    ) {
        let model_matrix = parent_matrix * node.local_matrix();
        for &mesh_idx in &node.mesh_indices {
            let program = forced_program
                .unwrap_or_else(|| self.programs[self.mesh_idx_with_program[mesh_idx]]);
            let textures = self.textures_for(mesh_idx);
            backend.draw(
                DrawCall {
                    program,
                    mesh: &self.meshes[mesh_idx],
                    textures: &textures,
                    model_matrix,
                },
                uniforms,
            );
        }
        for child in &node.children {
            self.render_node(child, model_matrix, forced_program, backend, uniforms);
        }
    }

    /// Merges another model's entire owned state into this one.
    ///
    /// Appends the source pools behind the existing ones and renumbers every
    /// cross-reference: program table entries shift by the pre-merge program
    /// count, texture table entries and all subtree mesh indices shift by the
    /// pre-merge mesh count. Taking `source` by value makes the "inert shell"
    /// contract a compile-time fact: the absorbed model can never be rendered
    /// or destroyed separately again.
    pub fn absorb(&mut self, mut source: Model) {
        let mesh_count_before = self.meshes.len();
        let program_count_before = self.programs.len();

        self.programs.append(&mut source.programs);
        self.mesh_idx_with_program.extend(
            source
                .mesh_idx_with_program
                .drain(..)
                .map(|program_idx| program_idx + program_count_before),
        );

        self.meshes.append(&mut source.meshes);
        self.texture_ids.append(&mut source.texture_ids);
        self.texture_idx_with_mesh_idx.extend(
            source
                .texture_idx_with_mesh_idx
                .drain(..)
                .map(|mesh_idx| mesh_idx + mesh_count_before),
        );

        for mut child in source.children.drain(..) {
            child.shift_mesh_indices(mesh_count_before);
            self.add(child);
        }

        debug!(
            "{} absorbed {}: {} meshes, {} programs, {} texture slots",
            self.name,
            source.name,
            self.meshes.len(),
            self.programs.len(),
            self.texture_ids.len()
        );
        self.debug_validate();
    }

    /// Replaces the texture handle in one slot. Out-of-range slots are a
    /// caller mistake, logged and ignored.
    pub fn replace_texture(&mut self, slot: usize, new_texture: TextureHandle) {
        match self.texture_ids.get_mut(slot) {
            Some(texture) => *texture = new_texture,
            None => warn!(
                "model {} cannot change texture at slot {} because it has {} texture slots",
                self.name,
                slot,
                self.texture_ids.len()
            ),
        }
    }

    /// Bakes an exterior matrix into every child subtree.
    pub fn premultiply_transform(&mut self, matrix: &Matrix4<f32>) {
        for child in &mut self.children {
            child.premultiply_transform(matrix);
        }
    }

    /// Convenience for the common single-child model shape: one node holding
    /// the given transform and linked to `mesh_indices`.
    pub fn with_single_child(
        mut self,
        position: Vector3<f32>,
        rotation: Rotation,
        scale: Vector3<f32>,
        mesh_indices: &[usize],
    ) -> Self {
        self.add(ChildNode::new(position, rotation, scale).with_meshes(mesh_indices));
        self
    }

    /// Index-table integrity: violations can only come from a bug in the
    /// absorb/merge arithmetic, so they are programming errors, not runtime
    /// conditions.
    fn debug_validate(&self) {
        debug_assert_eq!(self.meshes.len(), self.mesh_idx_with_program.len());
        debug_assert_eq!(self.texture_ids.len(), self.texture_idx_with_mesh_idx.len());
        debug_assert!(self
            .mesh_idx_with_program
            .iter()
            .all(|&program_idx| program_idx < self.programs.len()));
        debug_assert!(self
            .texture_idx_with_mesh_idx
            .iter()
            .all(|&mesh_idx| mesh_idx < self.meshes.len()));
        debug_assert!(all_mesh_indices_in_range(&self.children, self.meshes.len()));
    }
}

fn all_mesh_indices_in_range(children: &[ChildNode], mesh_count: usize) -> bool {
    children.iter().all(|child| {
        child.mesh_indices.iter().all(|&idx| idx < mesh_count)
            && all_mesh_indices_in_range(&child.children, mesh_count)
    })
}
