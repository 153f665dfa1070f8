//! # Radial Deformation
//!
//! Sculpting and trimming inside a horizontal band around the contact point.
//!
//! ## Modes
//!
//! - **Sculpt**: pulls each wall toward the contact radius, keeping the inner
//!   wall one thickness inside the outer wall
//! - **Trim**: shaves a fixed amount off every radius in the band
//!
//! Only the vertical distance to the contact point matters. The clay spins
//! under the tool, so the whole ring at a given height is shaped at once.

use config::constants::{
    require_positive, ConfigError, RadiusBand, BRUSH_FALLOFF_VARIANCE, BRUSH_RADIUS,
    BRUSH_STRENGTH, MIN_SCULPT_RADIUS, RIM_SCULPT_HEIGHT_FRACTION, TRIM_STEP,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::mesh::{is_on_axis, radial_distance, with_radius, ClayMesh, WallType};


/// What the tool does to the clay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushMode {
    /// Pull the walls toward the contact radius
    #[default]
    Sculpt,
    /// Remove material regardless of wall
    Trim,
}

/// Tuning for the band brush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Vertices farther than this vertically are untouched
    pub radius: f64,
    /// Lerp weight at the band center in sculpt mode
    pub strength: f64,
    /// Variance of the Gaussian falloff
    pub falloff_variance: f64,
    /// Radius removed at the band center in trim mode
    pub trim_step: f64,
    /// Fraction of the nominal height above which rim vertices follow the tool
    pub rim_height_fraction: f64,
    /// Smallest inner-wall target while sculpting
    pub min_inner_radius: f64,
    /// Valid radius range for every written vertex
    #[serde(skip)]
    pub band: RadiusBand,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            radius: BRUSH_RADIUS,
            strength: BRUSH_STRENGTH,
            falloff_variance: BRUSH_FALLOFF_VARIANCE,
            trim_step: TRIM_STEP,
            rim_height_fraction: RIM_SCULPT_HEIGHT_FRACTION,
            min_inner_radius: MIN_SCULPT_RADIUS,
            band: RadiusBand::default(),
        }
    }
}

impl BrushConfig {
    /// Creates a brush with the given band radius and strength.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clay_mesh::BrushConfig;
    ///
    /// let brush = BrushConfig::new(0.3, 0.5).unwrap();
    /// assert_eq!(brush.radius, 0.3);
    /// assert!(BrushConfig::new(0.0, 0.5).is_err());
    /// ```
    pub fn new(radius: f64, strength: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            radius: require_positive("radius", radius)?,
            strength: require_positive("strength", strength)?,
            ..Default::default()
        })
    }

    /// Checks every tunable a host may have set through deserialization.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clay_mesh::BrushConfig;
    ///
    /// assert!(BrushConfig::default().validate().is_ok());
    /// let flat = BrushConfig { falloff_variance: 0.0, ..Default::default() };
    /// assert!(flat.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("radius", self.radius)?;
        require_positive("strength", self.strength)?;
        require_positive("falloff_variance", self.falloff_variance)?;
        require_positive("trim_step", self.trim_step)?;
        require_positive("rim_height_fraction", self.rim_height_fraction)?;
        require_positive("min_inner_radius", self.min_inner_radius)?;
        RadiusBand::new(self.band.min, self.band.max)?;
        Ok(())
    }

    /// Gaussian weight for a vertical distance from the contact point.
    #[inline]
    pub fn falloff(&self, dist_y: f64) -> f64 {
        (-(dist_y * dist_y) / (2.0 * self.falloff_variance)).exp()
    }
}

/// Summary of one deformation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeformReport {
    /// Vertices whose radius was rewritten
    pub affected: usize,
}

/// Deforms the clay around a contact point given in the mesh local frame.
///
/// Vertices outside the band, on the axis, or (in sculpt mode) neutral
/// vertices below the rim are left untouched. Every rewritten radius is
/// clamped to `brush.band` and keeps its bearing. Normals are recomputed
/// before returning. A non-finite contact point changes nothing.
///
/// # Example
///
/// ```rust
/// use clay_mesh::{build_clay_mesh, deform, BrushConfig, BrushMode, ClayParams};
/// use glam::DVec3;
///
/// let mut mesh = build_clay_mesh(&ClayParams::default()).unwrap();
/// let report = deform(
///     &mut mesh,
///     DVec3::new(0.9, 1.25, 0.0),
///     BrushMode::Sculpt,
///     &BrushConfig::default(),
/// );
/// assert!(report.affected > 0);
/// ```
pub fn deform(
    mesh: &mut ClayMesh,
    contact: DVec3,
    mode: BrushMode,
    brush: &BrushConfig,
) -> DeformReport {
    if !contact.is_finite() {
        log::warn!("Ignoring non-finite contact point {contact}");
        return DeformReport::default();
    }

    let dims = *mesh.dimensions();
    let thickness = dims.wall_thickness;
    let rim_height = dims.height * brush.rim_height_fraction;
    let contact_radius = radial_distance(contact);
    let inner_target = (contact_radius - thickness).max(brush.min_inner_radius);
    let rim_target = contact_radius - thickness * 0.5;

    let (positions, walls) = mesh.positions_mut_with_walls();
    let mut affected = 0;

    for (p, wall) in positions.iter_mut().zip(walls) {
        if is_on_axis(*p) {
            continue;
        }

        // Negated so a NaN distance is skipped too
        let dist_y = (p.y - contact.y).abs();
        if !(dist_y < brush.radius) {
            continue;
        }

        let factor = brush.falloff(dist_y);
        let current = radial_distance(*p);

        let target = match mode {
            BrushMode::Sculpt => {
                let goal = match wall {
                    WallType::Outer => contact_radius,
                    WallType::Inner => inner_target,
                    WallType::Neutral if p.y > rim_height => rim_target,
                    WallType::Neutral => continue,
                };
                lerp(current, goal, factor * brush.strength)
            }
            BrushMode::Trim => current - brush.trim_step * factor,
        };

        *p = with_radius(*p, brush.band.clamp(target));
        affected += 1;
    }

    mesh.compute_normals();
    log::trace!(
        "{:?} at y={:.3} r={:.3}: {} vertices",
        mode,
        contact.y,
        contact_radius,
        affected
    );
    DeformReport { affected }
}

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
