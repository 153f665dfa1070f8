//! # Shape Tests

use super::*;
use crate::error::ClayError;
use approx::assert_relative_eq;

#[test]
fn test_catalog_has_twelve_unique_ids() {
    let mut ids: Vec<_> = ShapePreset::ALL.iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 12);
}

#[test]
fn test_category_sizes() {
    assert_eq!(presets_in(ShapeCategory::Bottle).count(), 5);
    assert_eq!(presets_in(ShapeCategory::Cup).count(), 4);
    assert_eq!(presets_in(ShapeCategory::Plate).count(), 3);
}

#[test]
fn test_lookup_round_trips_ids() {
    for preset in ShapePreset::ALL {
        assert_eq!(ShapePreset::from_id(preset.id()).unwrap(), preset);
    }
    for category in ShapeCategory::ALL {
        assert_eq!(ShapeCategory::from_id(category.id()).unwrap(), category);
    }
}

#[test]
fn test_unknown_ids_rejected() {
    assert_eq!(
        ShapePreset::from_id("teapot").unwrap_err(),
        ClayError::UnknownShape { id: "teapot".into() }
    );
    assert!(ShapeCategory::from_id("bowl").is_err());
}

#[test]
fn test_preset_scales() {
    let kuikou = ShapePreset::Kuikou.target();
    assert_eq!(kuikou.height_scale, 0.15);
    assert_eq!(kuikou.radius_scale, 2.0);
    assert_eq!(kuikou.label(), "kuikou");

    // Bottles keep full height
    for preset in presets_in(ShapeCategory::Bottle) {
        assert_eq!(preset.height_scale(), 1.0);
    }
}

#[test]
fn test_meiping_profile() {
    let p = ShapePreset::Meiping;
    assert_relative_eq!(p.radius(0.0), 0.42, epsilon = 1e-12);
    assert_relative_eq!(p.radius(0.72), 0.52, epsilon = 1e-12);
    assert_eq!(p.radius(0.9), 0.38);
    // Continuous where the neck meets the mouth
    assert_relative_eq!(p.radius(0.86 - 1e-9), 0.38, epsilon = 1e-6);
}

#[test]
fn test_gaozu_stem() {
    let p = ShapePreset::Gaozu;
    assert_eq!(p.radius(0.2), 0.15);
    assert_relative_eq!(p.radius(1.0), 1.1, epsilon = 1e-12);
}

#[test]
fn test_all_presets_positive_on_unit_interval() {
    for preset in ShapePreset::ALL {
        for i in 0..=100 {
            let y = i as f64 / 100.0;
            let r = preset.radius(y);
            assert!(r.is_finite() && r > 0.0, "{} at {y}: {r}", preset.id());
        }
    }
}

#[test]
fn test_radius_at_clamps_input_and_output() {
    let shape = TargetShape::new("dip", |y: f64| y - 0.5, 1.0, 1.0);
    assert_eq!(shape.radius_at(0.0), 0.0);
    assert_eq!(shape.radius_at(-3.0), 0.0);
    assert_eq!(shape.radius_at(7.0), 0.5);
    assert_eq!(shape.radius_at(f64::NAN), 0.0);

    let broken = TargetShape::new("broken", |_: f64| f64::INFINITY, 1.0, 1.0);
    assert_eq!(broken.radius_at(0.5), 0.0);
}

#[test]
fn test_silhouette_is_closed_and_mirrored() {
    let shape = ShapePreset::Yajishou.target();
    let outline = shape.silhouette(20);
    assert_eq!(outline.len(), 42);

    let first = outline[0];
    let last = outline[41];
    assert_relative_eq!(first.x, 0.3 * 1.1, epsilon = 1e-12);
    assert_eq!(first.y, 0.0);
    assert_relative_eq!(last.x, -first.x);
    assert_eq!(last.y, first.y);

    let top = outline[20];
    assert_relative_eq!(top.x, 1.1 * 1.1, epsilon = 1e-12);
    assert_relative_eq!(top.y, 0.4, epsilon = 1e-12);
    assert_eq!(outline[21].x, -top.x);
}

#[test]
fn test_silhouette_minimum_steps() {
    let outline = ShapePreset::Bixi.target().silhouette(0);
    assert_eq!(outline.len(), 4);
}

#[test]
fn test_target_shape_debug_omits_profile() {
    let shape = ShapePreset::Hulu.target();
    let text = format!("{shape:?}");
    assert!(text.contains("hulu"));
}
