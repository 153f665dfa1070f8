//! # Revolution Tests
//!
//! Vertex layout, wall partition, UV repair, and normal orientation.

use super::*;
use approx::assert_relative_eq;

fn default_mesh() -> ClayMesh {
    build_clay_mesh(&ClayParams::default()).unwrap()
}

fn small_params() -> ClayParams {
    ClayParams {
        floor_steps: 2,
        wall_steps: 8,
        radial_segments: 16,
        ..Default::default()
    }
}

#[test]
fn test_default_vertex_count() {
    let mesh = default_mesh();
    assert_eq!(mesh.vertex_count(), (5 + 1 + 120 + 1 + 22 + 120 + 1 + 5 + 1) * 128);
    assert_eq!(mesh.profile_len(), 276);
    assert_eq!(mesh.columns(), 128);
}

#[test]
fn test_default_triangle_count() {
    let mesh = default_mesh();
    assert_eq!(mesh.triangle_count(), 128 * 275 * 2);
}

#[test]
fn test_first_and_last_rings_on_axis() {
    let mesh = default_mesh();
    let n = mesh.profile_len();
    for column in 0..mesh.columns() {
        let first = mesh.positions()[column * n];
        let last = mesh.positions()[column * n + n - 1];
        assert!(radial_distance(first) < 1e-12);
        assert!(radial_distance(last) < 1e-12);
    }
}

#[test]
fn test_duplicated_seam_adds_column() {
    let params = ClayParams {
        seam: SeamLayout::Duplicated,
        ..small_params()
    };
    let mesh = build_clay_mesh(&params).unwrap();
    let n = mesh.profile_len();
    assert_eq!(mesh.vertex_count(), n * 17);
    assert_eq!(mesh.triangle_count(), 16 * (n - 1) * 2);

    // Seam column coincides with column 0 but ends the unwrap at u = 1
    let mid = n / 2;
    let first = mesh.positions()[mid];
    let seam = mesh.positions()[16 * n + mid];
    assert_relative_eq!(first.x, seam.x, epsilon = 1e-12);
    assert_relative_eq!(first.z, seam.z, epsilon = 1e-12);
    assert_relative_eq!(mesh.uvs()[16 * n + mid].x, 1.0);
}

#[test]
fn test_duplicated_seam_shades_smoothly() {
    let params = ClayParams {
        seam: SeamLayout::Duplicated,
        ..small_params()
    };
    let mesh = build_clay_mesh(&params).unwrap();
    let n = mesh.profile_len();
    let seam = 16 * n;

    for j in 0..n {
        assert_eq!(mesh.normals()[j], mesh.normals()[seam + j], "seam crease at {j}");
    }

    // Outer wall at angle 0 faces straight out along +x
    let j = (0..n)
        .filter(|&j| mesh.wall_types()[j] == WallType::Outer)
        .nth(3)
        .unwrap();
    let normal = mesh.normals()[j];
    assert!(normal.x > 0.99);
    assert_relative_eq!(normal.z, 0.0, epsilon = 1e-9);
}

#[test]
fn test_wrapped_indices_in_range() {
    let mesh = build_clay_mesh(&small_params()).unwrap();
    let count = mesh.vertex_count() as u32;
    assert!(mesh.triangles().iter().flatten().all(|&i| i < count));
}

#[test]
fn test_wall_partition_matches_profile_index() {
    let params = ClayParams::default();
    let mesh = build_clay_mesh(&params).unwrap();
    let profile = build_profile(&params);
    let sections = profile.sections();

    for (i, wall) in mesh.wall_types().iter().enumerate() {
        let j = mesh.profile_index(i);
        let expected = if sections.inner_wall.contains(&j) {
            WallType::Inner
        } else if sections.outer_wall.contains(&j) {
            WallType::Outer
        } else {
            WallType::Neutral
        };
        assert_eq!(*wall, expected, "vertex {i} (profile {j})");
    }
}

#[test]
fn test_wall_counts() {
    let mesh = default_mesh();
    let count = |w: WallType| mesh.wall_types().iter().filter(|t| **t == w).count();
    assert_eq!(count(WallType::Inner), 121 * 128);
    assert_eq!(count(WallType::Outer), 121 * 128);
    assert_eq!(count(WallType::Neutral), (6 + 22 + 6) * 128);
}

#[test]
fn test_classify() {
    let sections = ProfileSections {
        inner_wall: 2..=4,
        outer_wall: 7..=9,
    };
    assert_eq!(classify(0, &sections), WallType::Neutral);
    assert_eq!(classify(2, &sections), WallType::Inner);
    assert_eq!(classify(5, &sections), WallType::Neutral);
    assert_eq!(classify(9, &sections), WallType::Outer);
    assert_eq!(classify(10, &sections), WallType::Neutral);
}

#[test]
fn test_floor_uvs_are_planar() {
    let params = ClayParams::default();
    let mesh = default_mesh();
    let span = 2.5 * params.outer_radius;

    for (p, uv) in mesh.positions().iter().zip(mesh.uvs()) {
        if p.y < 0.01 {
            assert_relative_eq!(uv.x, 0.5 + p.x / span, epsilon = 1e-12);
            assert_relative_eq!(uv.y, 0.5 + p.z / span, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_inner_floor_uvs_are_planar() {
    let mesh = default_mesh();
    let n = mesh.profile_len();
    // Column 0 puts the profile on +X; inner floor point 3 sits at x = 0.342
    let p = mesh.positions()[3];
    let uv = mesh.uvs()[3];
    assert_relative_eq!(uv.x, 0.5 + p.x / 1.8, epsilon = 1e-12);
    assert_relative_eq!(uv.y, 0.5, epsilon = 1e-12);

    // Wall vertices keep the cylindrical unwrap
    let wall = 60;
    assert_relative_eq!(mesh.uvs()[wall].x, 0.0);
    assert_relative_eq!(mesh.uvs()[wall].y, wall as f64 / (n - 1) as f64, epsilon = 1e-12);
}

#[test]
fn test_outer_wall_normals_face_outward() {
    let mesh = default_mesh();
    for (i, wall) in mesh.wall_types().iter().enumerate() {
        let p = mesh.positions()[i];
        let radial = DVec3::new(p.x, 0.0, p.z).normalize();
        let n = mesh.normals()[i];
        match wall {
            WallType::Outer if p.y > 0.3 && p.y < 2.3 => assert!(n.dot(radial) > 0.9),
            WallType::Inner if p.y > 0.3 && p.y < 2.3 => assert!(n.dot(radial) < -0.9),
            _ => {}
        }
    }
}

#[test]
fn test_floor_normals_face_away_from_clay() {
    let mesh = default_mesh();
    let n = mesh.profile_len();
    // Mid-points of the inner and outer floors in column 0
    assert!(mesh.normals()[2].y > 0.9);
    assert!(mesh.normals()[n - 3].y < -0.9);
}

#[test]
fn test_bounding_box_matches_dimensions() {
    let mesh = default_mesh();
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(max.x, 0.72, epsilon = 1e-9);
    assert_relative_eq!(min.x, -0.72, epsilon = 1e-9);
    assert_eq!(min.y, 0.0);
    // Wall tops are the highest points; the rim dips between them
    assert_relative_eq!(max.y, 2.5, epsilon = 1e-12);
}

#[test]
fn test_rejects_too_few_segments() {
    let profile = build_profile(&ClayParams::default());
    let result = revolve(
        &profile,
        ClayDimensions::default(),
        &RevolveParams {
            segments: 2,
            seam: SeamLayout::Wrapped,
        },
    );
    assert!(matches!(result, Err(ClayError::TooFewSegments { .. })));
}

#[test]
fn test_rejects_short_profile() {
    let profile = Profile::new(
        vec![DVec2::new(1.0, 0.0)],
        ProfileSections {
            inner_wall: 0..=0,
            outer_wall: 0..=0,
        },
    );
    let result = revolve(&profile, ClayDimensions::default(), &RevolveParams::default());
    assert_eq!(result.unwrap_err(), ClayError::ProfileTooShort { points: 1 });
}

#[test]
fn test_degenerate_thickness_builds() {
    let params = ClayParams {
        wall_thickness: 0.9,
        ..small_params()
    };
    let mesh = build_clay_mesh(&params).unwrap();
    assert!(mesh.positions().iter().all(|p| p.is_finite()));
    assert!(mesh.normals().iter().all(|n| n.is_finite()));
}
