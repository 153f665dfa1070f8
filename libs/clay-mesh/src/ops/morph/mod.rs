//! # Profile Morphing
//!
//! Reshapes the whole clay toward a [`TargetShape`].
//!
//! ## Target Radius
//!
//! For each vertex at normalized height `s = clamp(y / H, 0, 1)`:
//!
//! ```text
//! base   = shape.radius_at(s) · radius_scale · outer_radius
//! wall   = thickness · max(0.4, taper(s))        thinner toward the rim
//! outer  → base
//! inner  → base − wall
//! rim    → base − wall/2 · rim_taper(s)
//! floor  → wall target · (r / nominal wall radius)   keeps floors flat
//! ```
//!
//! The outer floor follows the outer wall and the inner floor follows the
//! inner wall, so both floors stay joined to their walls.
//!
//! The target height is `y · height_scale`. Two entry points share the
//! formula: [`apply_shape_now`] writes it immediately and [`MorphStepper`]
//! interpolates toward it over fixed ticks.

use config::constants::{
    FLOOR_EPSILON, FLOOR_HEIGHT_THRESHOLD, MIN_MORPH_RADIUS, MIN_TAPER_FACTOR, MORPH_TICK_PROGRESS,
    MORPH_TICK_SECONDS, RIM_FLARE_AMOUNT, RIM_FLARE_START, RIM_TAPER_MIN, RIM_TAPER_START,
    TAPER_AMOUNT, TAPER_START,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::mesh::{is_on_axis, radial_distance, with_radius, ClayMesh, WallType};
use crate::shapes::TargetShape;

mod stepper;

#[cfg(test)]
mod tests;

pub use stepper::{MorphStatus, MorphStepper};

/// Tuning for target-shape morphing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Normalized height where the wall starts thinning
    pub taper_start: f64,
    /// Thickness fraction lost from `taper_start` to the top
    pub taper_amount: f64,
    /// Floor on the taper factor
    pub min_taper_factor: f64,
    /// Normalized height where the rim flares out
    pub rim_flare_start: f64,
    /// Relative radius gained at the top by the flare
    pub rim_flare_amount: f64,
    /// Normalized height where rim vertices taper in
    pub rim_taper_start: f64,
    /// Rim taper multiplier at the top
    pub rim_taper_min: f64,
    /// Smallest radius written for inner and rim vertices
    pub min_radius: f64,
    /// Neutral vertices below this height are treated as floor, as is
    /// anything at or below the inner floor
    pub floor_height: f64,
    /// Progress per animation tick
    pub tick_progress: f64,
    /// Seconds per animation tick
    pub tick_seconds: f64,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            taper_start: TAPER_START,
            taper_amount: TAPER_AMOUNT,
            min_taper_factor: MIN_TAPER_FACTOR,
            rim_flare_start: RIM_FLARE_START,
            rim_flare_amount: RIM_FLARE_AMOUNT,
            rim_taper_start: RIM_TAPER_START,
            rim_taper_min: RIM_TAPER_MIN,
            min_radius: MIN_MORPH_RADIUS,
            floor_height: FLOOR_HEIGHT_THRESHOLD,
            tick_progress: MORPH_TICK_PROGRESS,
            tick_seconds: MORPH_TICK_SECONDS,
        }
    }
}

impl MorphConfig {
    /// Wall thickness multiplier at normalized height `s`.
    pub fn thickness_factor(&self, s: f64) -> f64 {
        let factor = if s <= self.taper_start {
            1.0
        } else {
            1.0 - self.taper_amount * (s - self.taper_start) / (1.0 - self.taper_start)
        };
        factor.max(self.min_taper_factor)
    }

    /// Outward flare multiplier on the base radius at `s`.
    pub fn rim_flare(&self, s: f64) -> f64 {
        if s > self.rim_flare_start {
            1.0 + self.rim_flare_amount * (s - self.rim_flare_start) / (1.0 - self.rim_flare_start)
        } else {
            1.0
        }
    }

    /// Inward taper on the rim half-thickness at `s`.
    pub fn rim_taper(&self, s: f64) -> f64 {
        if s > self.rim_taper_start {
            self.rim_taper_min
                + (1.0 - self.rim_taper_min) * (1.0 - s) / (1.0 - self.rim_taper_start)
        } else {
            1.0
        }
    }
}

/// Ease-out quadratic: fast start, gentle landing.
///
/// # Example
///
/// ```rust
/// use clay_mesh::ease_out_quad;
///
/// assert_eq!(ease_out_quad(0.0), 0.0);
/// assert_eq!(ease_out_quad(0.5), 0.75);
/// assert_eq!(ease_out_quad(1.0), 1.0);
/// ```
#[inline]
pub fn ease_out_quad(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// Computes the morph target for every vertex of `mesh`.
///
/// On-axis vertices have no bearing, so they keep their radial position.
/// Their height is still scaled like every other vertex: the inner floor
/// center stays level with its ring at `t · height_scale` instead of
/// leaving a dimple or peak of `t · (1 − height_scale)` at the axis.
pub fn target_positions(mesh: &ClayMesh, shape: &TargetShape, config: &MorphConfig) -> Vec<DVec3> {
    let dims = *mesh.dimensions();
    let height = dims.height;
    let reference = dims.outer_radius;
    let thickness = dims.wall_thickness;
    let floor_limit = config.floor_height.max(thickness + FLOOR_EPSILON);
    let inner_reference = reference - thickness;

    mesh.positions()
        .iter()
        .zip(mesh.wall_types())
        .map(|(p, wall)| {
            let target_y = p.y * shape.height_scale;
            if is_on_axis(*p) {
                return DVec3::new(p.x, target_y, p.z);
            }

            let s = if height > 0.0 { (p.y / height).clamp(0.0, 1.0) } else { 0.0 };
            let base = shape.radius_at(s) * shape.radius_scale * reference * config.rim_flare(s);
            let wall_thickness = thickness * config.thickness_factor(s);
            let inner = (base - wall_thickness).max(config.min_radius);

            let radius = match wall {
                WallType::Outer => base,
                WallType::Inner => inner,
                WallType::Neutral if p.y <= floor_limit => {
                    let r = radial_distance(*p);
                    if p.y > thickness * 0.5 && inner_reference > 0.0 {
                        inner * (r / inner_reference)
                    } else if reference > 0.0 {
                        base * (r / reference)
                    } else {
                        base
                    }
                }
                WallType::Neutral => {
                    (base - wall_thickness * 0.5 * config.rim_taper(s)).max(config.min_radius)
                }
            };

            let mut target = with_radius(*p, radius);
            target.y = target_y;
            target
        })
        .collect()
}

/// Reshapes `mesh` to the target immediately, without animation.
///
/// Used when restoring a session. Follows [`target_positions`], including
/// the height scaling of on-axis vertices. Normals are recomputed.
///
/// # Example
///
/// ```rust
/// use clay_mesh::{apply_shape_now, build_clay_mesh, ClayParams, MorphConfig, ShapePreset};
///
/// let mut mesh = build_clay_mesh(&ClayParams::default()).unwrap();
/// let shape = ShapePreset::Yajishou.target();
/// apply_shape_now(&mut mesh, &shape, &MorphConfig::default());
/// let (_, max) = mesh.bounding_box();
/// assert!(max.y < 1.2);
/// ```
pub fn apply_shape_now(mesh: &mut ClayMesh, shape: &TargetShape, config: &MorphConfig) {
    let targets = target_positions(mesh, shape, config);
    mesh.positions_mut().copy_from_slice(&targets);
    mesh.compute_normals();
    log::debug!("applied shape {} without animation", shape.label());
}
