use approx::assert_relative_eq;
use cgmath::{Matrix4, SquareMatrix, Vector3};
use sol_ngin::geometry::{model_matrix, Plane, Ray, Rotation};

fn apply(matrix: &Matrix4<f32>, v: Vector3<f32>) -> Vector3<f32> {
    (matrix * v.extend(1.0)).truncate()
}

#[test]
fn rotation_onto_itself_is_identity() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let matrix = Rotation::new(v, v).to_matrix();
    let identity = Matrix4::<f32>::identity();
    for column in 0..4 {
        for row in 0..4 {
            assert_relative_eq!(matrix[column][row], identity[column][row], epsilon = 1e-6);
        }
    }
}

#[test]
fn antiparallel_rotation_flips_the_reference() {
    let v = Vector3::new(0.3, -1.2, 2.5);
    let matrix = Rotation::new(v, -v).to_matrix();
    let rotated = apply(&matrix, v);
    assert_relative_eq!(rotated.x, -v.x, epsilon = 1e-5);
    assert_relative_eq!(rotated.y, -v.y, epsilon = 1e-5);
    assert_relative_eq!(rotated.z, -v.z, epsilon = 1e-5);
}

#[test]
fn x_axis_rotates_onto_y_axis() {
    let matrix = Rotation::new(Vector3::unit_x(), Vector3::unit_y()).to_matrix();
    let rotated = apply(&matrix, Vector3::unit_x());
    assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-6);
    assert_relative_eq!(rotated.z, 0.0, epsilon = 1e-6);
}

#[test]
fn orthogonal_vectors_rotate_by_a_quarter_turn() {
    // cos(theta) is exactly zero here; the axis-angle branch must handle it.
    let matrix = Rotation::new(Vector3::unit_x(), Vector3::unit_z()).to_matrix();
    let rotated = apply(&matrix, Vector3::unit_x());
    assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(rotated.y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(rotated.z, 1.0, epsilon = 1e-6);
}

#[test]
fn up_y_rotation_is_identity() {
    let matrix = Rotation::up_y().to_matrix();
    assert_eq!(matrix, Matrix4::identity());
}

#[test]
fn ray_hits_plane_at_expected_point() {
    let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
    let plane = Plane::new(Vector3::new(0.0, 0.0, 0.0), Vector3::unit_z());
    let point = ray.intersection_with(&plane);
    assert_relative_eq!(point.x, 0.0);
    assert_relative_eq!(point.y, 0.0);
    assert_relative_eq!(point.z, 0.0);
}

#[test]
fn ray_hits_tilted_plane() {
    let ray = Ray::new(Vector3::new(1.0, 1.0, 4.0), Vector3::new(0.0, 0.0, -2.0));
    let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), Vector3::unit_z());
    let point = ray.intersection_with(&plane);
    assert_relative_eq!(point.x, 1.0);
    assert_relative_eq!(point.y, 1.0);
    assert_relative_eq!(point.z, 1.0);
}

#[test]
fn parallel_ray_produces_non_finite_point() {
    let ray = Ray::new(Vector3::new(0.0, 0.0, 0.0), Vector3::unit_x());
    let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), Vector3::unit_z());
    let point = ray.intersection_with(&plane);
    // Deliberate non-failure: the caller detects the degenerate case.
    assert!(!point.x.is_finite() || !point.y.is_finite() || !point.z.is_finite());
}

#[test]
fn distance_uses_cross_product_area() {
    let ray = Ray::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0));
    assert_relative_eq!(ray.distance_to(Vector3::new(3.0, 4.0, 0.0)), 4.0);
    assert_relative_eq!(ray.distance_to(Vector3::new(7.0, 0.0, 0.0)), 0.0);
}

#[test]
fn model_matrix_scales_then_rotates_then_translates() {
    let rotation = Rotation::new(Vector3::unit_x(), Vector3::unit_y());
    let matrix = model_matrix(
        Vector3::new(1.0, 2.0, 3.0),
        &rotation,
        Vector3::new(2.0, 2.0, 2.0),
    );
    // (1,0,0) scales to (2,0,0), rotates to (0,2,0), then translates.
    let moved = apply(&matrix, Vector3::unit_x());
    assert_relative_eq!(moved.x, 1.0, epsilon = 1e-5);
    assert_relative_eq!(moved.y, 4.0, epsilon = 1e-5);
    assert_relative_eq!(moved.z, 3.0, epsilon = 1e-5);
}
