//! # Morph Tests
//!
//! Target formula, synchronous application, and stepper timing.

use super::*;
use crate::params::ClayParams;
use crate::revolve::build_clay_mesh;
use crate::shapes::ShapePreset;
use approx::assert_relative_eq;

fn default_mesh() -> ClayMesh {
    build_clay_mesh(&ClayParams::default()).unwrap()
}

fn run_to_completion(mesh: &mut ClayMesh, stepper: &mut MorphStepper) -> usize {
    let mut frames = 0;
    while stepper.advance(mesh, 0.016) == MorphStatus::InProgress {
        frames += 1;
        assert!(frames < 1000, "morph never finished");
    }
    frames + 1
}

#[test]
fn test_ease_out_quad() {
    assert_eq!(ease_out_quad(0.0), 0.0);
    assert_eq!(ease_out_quad(1.0), 1.0);
    assert_relative_eq!(ease_out_quad(0.02), 0.0396, epsilon = 1e-12);
    assert!(ease_out_quad(0.3) > 0.3);
}

#[test]
fn test_thickness_factor() {
    let config = MorphConfig::default();
    assert_eq!(config.thickness_factor(0.0), 1.0);
    assert_eq!(config.thickness_factor(0.22), 1.0);
    assert_relative_eq!(config.thickness_factor(1.0), 0.4, epsilon = 1e-12);
    assert!(config.thickness_factor(0.6) < 1.0);
}

#[test]
fn test_rim_flare_and_taper() {
    let config = MorphConfig::default();
    assert_eq!(config.rim_flare(0.5), 1.0);
    assert_relative_eq!(config.rim_flare(1.0), 1.008, epsilon = 1e-12);
    assert_eq!(config.rim_taper(0.9), 1.0);
    assert_relative_eq!(config.rim_taper(1.0), 0.72, epsilon = 1e-12);
}

#[test]
fn test_heights_scale_everywhere() {
    let mut mesh = default_mesh();
    let before = mesh.positions().to_vec();
    let shape = ShapePreset::Yajishou.target();
    apply_shape_now(&mut mesh, &shape, &MorphConfig::default());

    for (old, new) in before.iter().zip(mesh.positions()) {
        assert_relative_eq!(new.y, old.y * 0.4, epsilon = 1e-12);
    }
}

#[test]
fn test_axis_vertices_keep_radial_position() {
    let mut mesh = default_mesh();
    let n = mesh.profile_len();
    let before = mesh.positions().to_vec();
    apply_shape_now(&mut mesh, &ShapePreset::Kuikou.target(), &MorphConfig::default());

    for column in 0..mesh.columns() {
        for i in [column * n, column * n + n - 1] {
            assert_eq!(mesh.positions()[i].x, before[i].x);
            assert_eq!(mesh.positions()[i].z, before[i].z);
        }
    }
}

#[test]
fn test_wall_radii_follow_shape() {
    let mesh = default_mesh();
    let shape = ShapePreset::Meiping.target();
    let config = MorphConfig::default();
    let targets = target_positions(&mesh, &shape, &config);

    let dims = *mesh.dimensions();
    for (i, wall) in mesh.wall_types().iter().enumerate() {
        let p = mesh.positions()[i];
        let s = (p.y / dims.height).clamp(0.0, 1.0);
        let base = shape.radius_at(s) * shape.radius_scale * dims.outer_radius * config.rim_flare(s);
        let r = radial_distance(targets[i]);
        match wall {
            WallType::Outer => assert_relative_eq!(r, base, epsilon = 1e-9),
            WallType::Inner => {
                let inner = (base - dims.wall_thickness * config.thickness_factor(s)).max(0.05);
                assert_relative_eq!(r, inner, epsilon = 1e-9);
            }
            WallType::Neutral => {}
        }
    }
}

#[test]
fn test_outer_floor_scales_proportionally() {
    let mesh = default_mesh();
    let shape = ShapePreset::Yajishou.target();
    let targets = target_positions(&mesh, &shape, &MorphConfig::default());
    let n = mesh.profile_len();

    // f(0) = 0.3 and radius_scale = 1.1
    for j in n - 6..n - 1 {
        let before = radial_distance(mesh.positions()[j]);
        assert_relative_eq!(radial_distance(targets[j]), before * 0.33, epsilon = 1e-9);
        assert_eq!(targets[j].y, 0.0);
    }
}

#[test]
fn test_inner_floor_meets_inner_wall() {
    let mesh = default_mesh();
    let targets = target_positions(&mesh, &ShapePreset::Hulu.target(), &MorphConfig::default());

    // Point 5 ends the inner floor, point 6 starts the inner wall, same spot
    assert_relative_eq!(
        radial_distance(targets[5]),
        radial_distance(targets[6]),
        epsilon = 1e-9
    );
    // Floor stays flat and ordered
    for j in 1..5 {
        assert!(radial_distance(targets[j]) < radial_distance(targets[j + 1]));
        assert_relative_eq!(targets[j].y, targets[5].y, epsilon = 1e-12);
    }
}

#[test]
fn test_rim_sits_between_walls() {
    let mesh = default_mesh();
    let targets = target_positions(&mesh, &ShapePreset::Liulian.target(), &MorphConfig::default());
    let outer_top = radial_distance(targets[149]);
    for j in 127..149 {
        let r = radial_distance(targets[j]);
        assert!(r < outer_top, "rim point {j} outside the outer wall");
        assert!(r >= 0.05);
    }
}

#[test]
fn test_apply_shape_now_keeps_wall_types() {
    let mut mesh = default_mesh();
    let before = mesh.wall_types().to_vec();
    apply_shape_now(&mut mesh, &ShapePreset::Zheyan.target(), &MorphConfig::default());
    assert_eq!(before, mesh.wall_types());
}

#[test]
fn test_stepper_converges_to_sync() {
    let shape = ShapePreset::Suantou.target();
    let config = MorphConfig::default();

    let mut animated = default_mesh();
    let mut sync = animated.clone();
    apply_shape_now(&mut sync, &shape, &config);

    let mut stepper = MorphStepper::new(&animated, &shape, config);
    let frames = run_to_completion(&mut animated, &mut stepper);
    assert_eq!(frames, 50);
    assert!(stepper.is_complete());
    assert_eq!(stepper.progress(), 1.0);

    for (a, b) in animated.positions().iter().zip(sync.positions()) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
    }
}

#[test]
fn test_first_frame_is_partial() {
    let mut mesh = default_mesh();
    let start = mesh.positions().to_vec();
    let shape = ShapePreset::Guanyin.target();
    let mut stepper = MorphStepper::new(&mesh, &shape, MorphConfig::default());

    assert_eq!(stepper.advance(&mut mesh, 0.016), MorphStatus::InProgress);
    assert_relative_eq!(stepper.progress(), 0.02, epsilon = 1e-12);

    let eased = ease_out_quad(0.02);
    for ((p, s), t) in mesh.positions().iter().zip(&start).zip(stepper.target()) {
        let expected = s.lerp(*t, eased);
        assert_relative_eq!(p.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(p.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(p.z, expected.z, epsilon = 1e-12);
    }
}

#[test]
fn test_short_frames_accumulate() {
    let mut mesh = default_mesh();
    let start = mesh.positions().to_vec();
    let mut stepper = MorphStepper::new(&mesh, &ShapePreset::Bixi.target(), MorphConfig::default());

    stepper.advance(&mut mesh, 0.01);
    assert_eq!(stepper.progress(), 0.0);
    assert_eq!(start, mesh.positions());

    stepper.advance(&mut mesh, 0.01);
    assert_relative_eq!(stepper.progress(), 0.02, epsilon = 1e-12);
    assert_ne!(start, mesh.positions());
}

#[test]
fn test_long_frame_catches_up() {
    let mut mesh = default_mesh();
    let mut stepper = MorphStepper::new(&mesh, &ShapePreset::Jigang.target(), MorphConfig::default());
    assert_eq!(stepper.advance(&mut mesh, 10.0), MorphStatus::Complete);
    assert_eq!(mesh.positions(), stepper.target());
}

#[test]
fn test_tick_counts() {
    let mut mesh = default_mesh();
    let mut stepper = MorphStepper::new(&mesh, &ShapePreset::Gaozu.target(), MorphConfig::default());
    let mut ticks = 1;
    while stepper.tick(&mut mesh) == MorphStatus::InProgress {
        ticks += 1;
    }
    assert_eq!(ticks, 50);
    assert_eq!(stepper.tick(&mut mesh), MorphStatus::Complete);
}

#[test]
fn test_mismatched_mesh_abandons_morph() {
    let mesh = default_mesh();
    let mut stepper = MorphStepper::new(&mesh, &ShapePreset::Hulu.target(), MorphConfig::default());

    let params = ClayParams {
        radial_segments: 16,
        ..Default::default()
    };
    let mut other = build_clay_mesh(&params).unwrap();
    let before = other.positions().to_vec();
    assert_eq!(stepper.advance(&mut other, 0.016), MorphStatus::Complete);
    assert_eq!(before, other.positions());
}

#[test]
fn test_normals_unit_after_morph() {
    let mut mesh = default_mesh();
    apply_shape_now(&mut mesh, &ShapePreset::Meiping.target(), &MorphConfig::default());
    for n in mesh.normals() {
        let len = n.length();
        assert!(len == 0.0 || (len - 1.0).abs() < 1e-9);
    }
}
