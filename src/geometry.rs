//! Geometry kernel: rays, planes and the two-vector rotation type.
//!
//! All vector and matrix math is built on `cgmath`. The one non-trivial piece
//! is [`Rotation`], which describes an orientation not as a canonical
//! quaternion but as a pair of vectors: a reference direction and the target
//! direction it should be rotated onto. This trades algebraic composability
//! for an intuitive "point this way" construction API; the rotation is turned
//! into an axis-angle matrix on demand and never composed with other
//! rotations symbolically.

use cgmath::{InnerSpace, Matrix4, Rad, SquareMatrix, Vector3};

/// A half-line with an origin and a (not necessarily unit) direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vector3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self { origin, direction }
    }

    /// Point where the ray crosses the plane.
    ///
    /// Solves `t = dot(plane.point - origin, normal) / dot(direction, normal)`
    /// and returns `origin + t * direction`. When the ray is parallel to the
    /// plane the denominator is zero and the returned point has non-finite
    /// components; callers that picked the ray from screen input detect this
    /// with their own domain checks instead of an error path.
    pub fn intersection_with(&self, plane: &Plane) -> Vector3<f32> {
        let to_plane = plane.point - self.origin;
        let t = to_plane.dot(plane.normal) / self.direction.dot(plane.normal);
        self.origin + self.direction * t
    }

    /// Shortest distance from `point` to the ray's carrier line, via the
    /// cross-product area identity `|d x (p - o)| / |d|`.
    pub fn distance_to(&self, point: Vector3<f32>) -> f32 {
        let to_point = point - self.origin;
        self.direction.cross(to_point).magnitude() / self.direction.magnitude()
    }
}

/// An infinite plane through `point` with the given `normal`.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub point: Vector3<f32>,
    pub normal: Vector3<f32>,
}

impl Plane {
    pub fn new(point: Vector3<f32>, normal: Vector3<f32>) -> Self {
        Self { point, normal }
    }
}

/// The minimal rotation taking `reference` onto `direction`.
///
/// Both vectors may be non-unit. Degenerate pairs are handled in
/// [`Rotation::to_matrix`]: parallel vectors give the identity and
/// anti-parallel vectors give a 180 degree turn about an axis orthogonal to
/// `reference`.
#[derive(Clone, Copy, Debug)]
pub struct Rotation {
    pub reference: Vector3<f32>,
    pub direction: Vector3<f32>,
}

impl Rotation {
    pub fn new(reference: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self { reference, direction }
    }

    /// The engine's identity orientation: +Y pointing at +Y.
    pub fn up_y() -> Self {
        Self {
            reference: Vector3::unit_y(),
            direction: Vector3::unit_y(),
        }
    }

    /// Axis-angle matrix for this rotation.
    ///
    /// `cross = reference x direction` gives the rotation axis and
    /// `acos(cos_theta)` the angle. When the cross product vanishes the
    /// vectors are collinear: identity for the parallel case, and for the
    /// anti-parallel case a half turn about `reference x b`, where `b` is the
    /// canonical basis axis least aligned with `reference`. The tie-break axis
    /// is visually distinguishable for anti-parallel inputs, so it is fixed
    /// here rather than left to float noise.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let cross = self.reference.cross(self.direction);
        let cos_theta = self.reference.dot(self.direction)
            / (self.reference.magnitude() * self.direction.magnitude());
        if cross.magnitude2() == 0.0 {
            if cos_theta > 0.0 {
                return Matrix4::identity();
            }
            let axis = orthogonal_to(self.reference).normalize();
            return Matrix4::from_axis_angle(axis, Rad(std::f32::consts::PI));
        }
        let angle = cos_theta.clamp(-1.0, 1.0).acos();
        Matrix4::from_axis_angle(cross.normalize(), Rad(angle))
    }
}

/// Some vector orthogonal to `v`: the cross product with the canonical basis
/// axis `v` is least aligned with.
fn orthogonal_to(v: Vector3<f32>) -> Vector3<f32> {
    let abs = v.map(f32::abs);
    let basis = if abs.x <= abs.y && abs.x <= abs.z {
        Vector3::unit_x()
    } else if abs.y <= abs.z {
        Vector3::unit_y()
    } else {
        Vector3::unit_z()
    };
    v.cross(basis)
}

/// Local model matrix for a TRS transform: `Translate * Rotate * Scale`.
pub fn model_matrix(
    position: Vector3<f32>,
    rotation: &Rotation,
    scale: Vector3<f32>,
) -> Matrix4<f32> {
    Matrix4::from_translation(position)
        * rotation.to_matrix()
        * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
}
