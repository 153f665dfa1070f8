//! # Clay Parameters
//!
//! Dimensions and tessellation of a fresh clay blank.

use crate::error::{ClayError, ClayResult};
use config::constants::{
    DEFAULT_FLOOR_STEPS, DEFAULT_HEIGHT, DEFAULT_OUTER_RADIUS, DEFAULT_RADIAL_SEGMENTS,
    DEFAULT_WALL_STEPS, DEFAULT_WALL_THICKNESS, MIN_RADIAL_SEGMENTS,
};
use serde::{Deserialize, Serialize};

/// How the last angular column meets the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeamLayout {
    /// The last column's faces wrap to column 0. `P × N` vertices.
    ///
    /// Wall UVs in the closing strip run from `u = (N − 1)/N` back to 0, so
    /// a texture is smeared across that strip. Meant for untextured clay;
    /// use [`SeamLayout::Duplicated`] when sampling a wall texture.
    #[default]
    Wrapped,
    /// Column 0 is repeated at angle 2π so cylindrical UVs reach `u = 1`.
    /// `P × (N + 1)` vertices.
    Duplicated,
}

/// Nominal size of the clay, carried alongside the mesh.
///
/// Sculpting and morphing read these instead of re-measuring the live mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClayDimensions {
    /// Outer wall radius (the morph reference radius)
    pub outer_radius: f64,
    /// Height of the wall tops
    pub height: f64,
    /// Nominal wall and floor thickness
    pub wall_thickness: f64,
}

impl Default for ClayDimensions {
    fn default() -> Self {
        Self {
            outer_radius: DEFAULT_OUTER_RADIUS,
            height: DEFAULT_HEIGHT,
            wall_thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

/// Parameters for building a clay blank.
///
/// # Example
///
/// ```rust
/// use clay_mesh::ClayParams;
///
/// let params = ClayParams::default();
/// assert_eq!(params.profile_len(), 276);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClayParams {
    /// Outer radius
    pub outer_radius: f64,
    /// Wall height
    pub height: f64,
    /// Wall thickness
    pub wall_thickness: f64,
    /// Intervals along each floor
    pub floor_steps: u32,
    /// Intervals along each wall
    pub wall_steps: u32,
    /// Angular samples around the axis
    pub radial_segments: u32,
    /// Seam handling
    pub seam: SeamLayout,
}

impl Default for ClayParams {
    fn default() -> Self {
        Self {
            outer_radius: DEFAULT_OUTER_RADIUS,
            height: DEFAULT_HEIGHT,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            floor_steps: DEFAULT_FLOOR_STEPS,
            wall_steps: DEFAULT_WALL_STEPS,
            radial_segments: DEFAULT_RADIAL_SEGMENTS,
            seam: SeamLayout::Wrapped,
        }
    }
}

impl ClayParams {
    /// Returns the nominal dimensions.
    pub fn dimensions(&self) -> ClayDimensions {
        ClayDimensions {
            outer_radius: self.outer_radius,
            height: self.height,
            wall_thickness: self.wall_thickness,
        }
    }

    /// Number of points the profile builder will emit.
    pub fn profile_len(&self) -> usize {
        let floor = self.floor_steps as usize + 1;
        let wall = self.wall_steps as usize + 1;
        2 * floor + 2 * wall + config::constants::RIM_ARC_STEPS as usize
    }

    /// Checks the counts needed to build faces.
    ///
    /// Dimensions are not checked: a wall thicker than the radius yields odd
    /// but renderable geometry.
    pub fn validate(&self) -> ClayResult<()> {
        if self.radial_segments < MIN_RADIAL_SEGMENTS {
            return Err(ClayError::TooFewSegments {
                segments: self.radial_segments,
                min: MIN_RADIAL_SEGMENTS,
            });
        }
        if self.floor_steps == 0 {
            return Err(ClayError::EmptySection { section: "floor" });
        }
        if self.wall_steps == 0 {
            return Err(ClayError::EmptySection { section: "wall" });
        }
        Ok(())
    }
}
