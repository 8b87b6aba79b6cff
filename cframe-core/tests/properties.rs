use approx::assert_abs_diff_eq;
use cframe_core::coerce::parse_number;
use cframe_core::{CFrame, Matrix4, SceneState, Vector3};
use std::f64::consts::{FRAC_PI_2, PI};

fn assert_close(a: &Matrix4, b: &Matrix4) {
    for (x, y) in a.to_array().iter().zip(b.to_array().iter()) {
        assert_abs_diff_eq!(*x, *y, epsilon = 1e-9);
    }
}

#[test]
fn zero_angles_compose_to_identity() {
    for m in [
        Matrix4::rotation_x(0.0),
        Matrix4::rotation_y(0.0),
        Matrix4::rotation_z(0.0),
        CFrame::new(3.0, -1.0, 2.0, 0.0, 0.0, 0.0).rotation(),
    ] {
        assert_close(&m, &Matrix4::identity());
    }
}

#[test]
fn multiplication_is_associative_not_commutative() {
    let a = Matrix4::rotation_x(0.7);
    let b = Matrix4::rotation_y(-0.4);
    let c = Matrix4::rotation_z(1.9);

    assert_close(&(a * b * c), &(a * (b * c)));
    assert_ne!(a * b, b * a);
}

#[test]
fn quarter_turn_about_z() {
    let p = Vector3::new(1.0, 0.0, 0.0).apply_matrix(&Matrix4::rotation_z(FRAC_PI_2));
    assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-9);
}

#[test]
fn half_turn_about_z_swaps_sign() {
    let p = Vector3::new(0.0, 2.0, 5.0).apply_matrix(&Matrix4::rotation_z(PI));
    assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y, -2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.z, 5.0, epsilon = 1e-9);
}

#[test]
fn cframe_rotates_then_translates() {
    let frame = CFrame::new(10.0, 0.0, 0.0, 0.0, 0.0, FRAC_PI_2);
    let p = frame.transform_point(&Vector3::new(1.0, 0.0, 0.0));
    assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-9);
}

#[test]
fn scene_points_and_camera() {
    let mut scene = SceneState::new();
    scene.add_point(1.0, 2.0, 3.0);
    scene.add_point(4.0, 5.0, 6.0);
    assert_eq!(scene.points()[0], Vector3::new(1.0, 2.0, 3.0));

    scene.clear_points();
    assert_eq!(scene.point_count(), 0);

    scene.set_camera_rotation(0.0, 0.0, 0.75);
    assert_eq!(scene.get_camera_property("rz"), 0.75);
    assert_eq!(scene.get_camera_property("bogus"), 0.0);
}

#[test]
fn invalid_host_strings_become_nan_points() {
    let mut scene = SceneState::new();
    scene.add_point(parse_number("1"), parse_number("two"), parse_number("3"));
    let p = scene.points()[0];
    assert_eq!(p.x, 1.0);
    assert!(p.y.is_nan());

    let moved = CFrame::from_position(1.0, 1.0, 1.0).transform_point(&p);
    assert!(!moved.is_finite());
}
