mod common;

use cgmath::{Matrix4, Vector3};
use common::test_utils::{init_logger, RecordingBackend};
use sol_ngin::{
    data_structures::{model::Model, node::ChildNode},
    geometry::Rotation,
    render::{ProgramHandle, TextureHandle},
    shapes::{quad, sphere, ShapeConfig},
    uniforms::Uniforms,
};

fn translated(x: f32, y: f32, z: f32) -> ChildNode {
    ChildNode::new(
        Vector3::new(x, y, z),
        Rotation::up_y(),
        Vector3::new(1.0, 1.0, 1.0),
    )
}

/// Model with one quad mesh, one program and no children.
fn bare_quad_model(program: u32) -> Model {
    let mut model = Model::new("quad pool");
    model
        .meshes
        .push(quad::mesh_container(1.0, 1.0, [1.0, 1.0, 1.0], 1.0, 0.0, 0.0).into_mesh());
    model.mesh_idx_with_program.push(0);
    model.programs.push(ProgramHandle(program));
    model
}

#[test]
fn nested_nodes_accumulate_their_parent_matrices() {
    let mut model = bare_quad_model(1);
    let mut arm = translated(1.0, 0.0, 0.0).with_meshes(&[0]);
    arm.add(translated(0.0, 2.0, 0.0).with_meshes(&[0]));
    model.add(arm);

    let mut backend = RecordingBackend::new();
    model.render(&mut backend, &Uniforms::default());

    assert_eq!(backend.draws.len(), 2);
    assert_eq!(
        backend.draws[0].model_matrix,
        Matrix4::from_translation(Vector3::new(1.0, 0.0, 0.0))
    );
    // The grandchild composes both translations, nothing more.
    assert_eq!(
        backend.draws[1].model_matrix,
        Matrix4::from_translation(Vector3::new(1.0, 2.0, 0.0))
    );
}

#[test]
fn sibling_subtrees_do_not_leak_matrices_into_each_other() {
    let mut model = bare_quad_model(1);
    model.add(translated(5.0, 0.0, 0.0).with_meshes(&[0]));
    model.add(translated(0.0, 0.0, 7.0).with_meshes(&[0]));

    let mut backend = RecordingBackend::new();
    model.render(&mut backend, &Uniforms::default());

    assert_eq!(
        backend.draws[0].model_matrix,
        Matrix4::from_translation(Vector3::new(5.0, 0.0, 0.0))
    );
    assert_eq!(
        backend.draws[1].model_matrix,
        Matrix4::from_translation(Vector3::new(0.0, 0.0, 7.0))
    );
}

#[test]
fn textures_arrive_in_slot_order() {
    let mut model = bare_quad_model(1);
    // Two slots decorate mesh 0, with an unrelated slot in between.
    model.meshes.push(
        quad::mesh_container(2.0, 2.0, [1.0, 1.0, 1.0], 1.0, 0.0, 0.0).into_mesh(),
    );
    model.mesh_idx_with_program.push(0);
    model.texture_ids = vec![TextureHandle(5), TextureHandle(8), TextureHandle(9)];
    model.texture_idx_with_mesh_idx = vec![0, 1, 0];
    model.add(ChildNode::at_origin().with_meshes(&[0]));

    let mut backend = RecordingBackend::new();
    model.render(&mut backend, &Uniforms::default());

    assert_eq!(
        backend.draws[0].textures,
        vec![TextureHandle(5), TextureHandle(9)]
    );
    assert_eq!(
        model.textures_for(1),
        vec![TextureHandle(8)]
    );
}

#[test]
fn forced_program_overrides_the_table_but_not_textures() {
    let model = sphere::model(
        4,
        8,
        1.0,
        ProgramHandle(1),
        ShapeConfig {
            texture: Some(TextureHandle(6)),
            ..ShapeConfig::default()
        },
    )
    .unwrap();

    let shadow_program = ProgramHandle(42);
    let mut backend = RecordingBackend::new();
    model.render_with_program(shadow_program, &mut backend, &Uniforms::default());

    assert_eq!(backend.draws.len(), 1);
    assert_eq!(backend.draws[0].program, shadow_program);
    assert_eq!(backend.draws[0].textures, vec![TextureHandle(6)]);
}

#[test]
fn replacing_a_texture_slot_swaps_only_that_slot() {
    init_logger();
    let mut model = bare_quad_model(1);
    model.texture_ids = vec![TextureHandle(1), TextureHandle(2)];
    model.texture_idx_with_mesh_idx = vec![0, 0];

    model.replace_texture(1, TextureHandle(7));
    assert_eq!(model.texture_ids, vec![TextureHandle(1), TextureHandle(7)]);

    // Out of range: logged and ignored, nothing changes.
    model.replace_texture(5, TextureHandle(9));
    assert_eq!(model.texture_ids, vec![TextureHandle(1), TextureHandle(7)]);
}

#[test]
fn model_without_children_renders_nothing() {
    let model = bare_quad_model(1);
    let mut backend = RecordingBackend::new();
    model.render(&mut backend, &Uniforms::default());
    assert!(backend.draws.is_empty());
}

#[test]
fn nodes_without_meshes_still_pass_their_transform_down() {
    let mut model = bare_quad_model(1);
    let mut pivot = translated(0.0, 4.0, 0.0);
    pivot.add(translated(1.0, 0.0, 0.0).with_meshes(&[0]));
    model.add(pivot);

    let mut backend = RecordingBackend::new();
    model.render(&mut backend, &Uniforms::default());

    assert_eq!(backend.draws.len(), 1);
    assert_eq!(
        backend.draws[0].model_matrix,
        Matrix4::from_translation(Vector3::new(1.0, 4.0, 0.0))
    );
}

#[test]
fn premultiplied_model_transform_shows_up_in_every_draw() {
    let mut model = bare_quad_model(1);
    model.add(translated(1.0, 0.0, 0.0).with_meshes(&[0]));
    model.add(translated(2.0, 0.0, 0.0).with_meshes(&[0]));

    let lift = Matrix4::from_translation(Vector3::new(0.0, 10.0, 0.0));
    model.premultiply_transform(&lift);

    let mut backend = RecordingBackend::new();
    model.render(&mut backend, &Uniforms::default());

    assert_eq!(
        backend.draws[0].model_matrix,
        Matrix4::from_translation(Vector3::new(1.0, 10.0, 0.0))
    );
    assert_eq!(
        backend.draws[1].model_matrix,
        Matrix4::from_translation(Vector3::new(2.0, 10.0, 0.0))
    );
}
