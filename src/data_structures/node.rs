//! Transform nodes of the scene graph.
//!
//! A [`ChildNode`] carries a local TRS transform and the indices of the
//! meshes it places, and owns its children. There is no parent back-pointer:
//! the children list is the sole ownership edge, and traversals thread the
//! accumulated parent matrix down by value, which keeps the walk free of
//! shared mutable state.

use cgmath::{Matrix4, Vector3};

use crate::geometry::{self, Rotation};

/// A scene-graph node: local transform, mesh references and owned children.
#[derive(Clone, Debug)]
pub struct ChildNode {
    pub position: Vector3<f32>,
    pub rotation: Rotation,
    pub scale: Vector3<f32>,
    /// Indices into the owning model's mesh pool.
    pub mesh_indices: Vec<usize>,
    pub children: Vec<ChildNode>,
    local_matrix: Matrix4<f32>,
}

impl ChildNode {
    pub fn new(position: Vector3<f32>, rotation: Rotation, scale: Vector3<f32>) -> Self {
        let local_matrix = geometry::model_matrix(position, &rotation, scale);
        Self {
            position,
            rotation,
            scale,
            mesh_indices: Vec::new(),
            children: Vec::new(),
            local_matrix,
        }
    }

    /// Node with identity transform.
    pub fn at_origin() -> Self {
        Self::new(Vector3::new(0.0, 0.0, 0.0), Rotation::up_y(), Vector3::new(1.0, 1.0, 1.0))
    }

    pub fn with_meshes(mut self, mesh_indices: &[usize]) -> Self {
        self.mesh_indices.extend_from_slice(mesh_indices);
        self
    }

    /// Cached `Translate * Rotate * Scale` matrix for this node.
    pub fn local_matrix(&self) -> Matrix4<f32> {
        self.local_matrix
    }

    /// Replaces the TRS transform and recomputes the cached matrix.
    pub fn set_transform(
        &mut self,
        position: Vector3<f32>,
        rotation: Rotation,
        scale: Vector3<f32>,
    ) {
        self.position = position;
        self.rotation = rotation;
        self.scale = scale;
        self.local_matrix = geometry::model_matrix(position, &rotation, scale);
    }

    pub fn add(&mut self, child: ChildNode) {
        self.children.push(child);
    }

    /// Removes the child at `index`, collapsing one level: the removed
    /// child's own children are re-parented onto this node before the child
    /// is returned, so a removal never cascades down the subtree.
    pub fn remove(&mut self, index: usize) -> Option<ChildNode> {
        remove_collapsing(&mut self.children, index)
    }

    /// Shifts every mesh index in this subtree by `offset`. Used when the
    /// owning model's mesh pool grows in front of the referenced slots.
    pub fn shift_mesh_indices(&mut self, offset: usize) {
        for idx in &mut self.mesh_indices {
            *idx += offset;
        }
        for child in &mut self.children {
            child.shift_mesh_indices(offset);
        }
    }

    /// Pre-multiplies `matrix` into the cached local matrix of every node in
    /// this subtree, baking an exterior transform (e.g. an accumulated touch
    /// rotation) into the tree for good.
    pub fn premultiply_transform(&mut self, matrix: &Matrix4<f32>) {
        self.local_matrix = matrix * self.local_matrix;
        for child in &mut self.children {
            child.premultiply_transform(matrix);
        }
    }
}

/// Shared collapse-removal used by both [`ChildNode`] and the model root.
pub(crate) fn remove_collapsing(
    children: &mut Vec<ChildNode>,
    index: usize,
) -> Option<ChildNode> {
    if index >= children.len() {
        return None;
    }
    let mut removed = children.remove(index);
    children.append(&mut removed.children);
    Some(removed)
}
