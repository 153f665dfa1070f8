//! # Clay Profile
//!
//! Builds the 2D cross-section that is revolved into the clay mesh.
//!
//! ## Layout
//!
//! Points are emitted in a single pass around the cross-section, `x` being
//! the distance from the axis and `y` the height:
//!
//! ```text
//!        rim arc (dips below the wall tops)
//!       |\___/|
//!       |     |   inner wall (up)   outer wall (down)
//!       |     |
//!  -----'     |   inner floor (center → wall) at y = t
//!  -----------'   outer floor (wall → center) at y = 0
//! ```
//!
//! The first and last points sit on the axis so the revolved floors close.

use config::constants::{RIM_ARC_STEPS, RIM_RADIUS_FACTOR};
use glam::DVec2;
use std::ops::RangeInclusive;

use crate::params::ClayParams;


/// Index ranges of the two walls inside a profile.
///
/// Everything outside both ranges (floors and rim) is neutral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSections {
    /// Inner wall, bottom to top
    pub inner_wall: RangeInclusive<usize>,
    /// Outer wall, top to bottom
    pub outer_wall: RangeInclusive<usize>,
}

/// An ordered cross-section polyline plus its wall ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<DVec2>,
    sections: ProfileSections,
}

impl Profile {
    /// Creates a profile from raw points.
    ///
    /// Wall ranges past the end of `points` simply never match a vertex.
    pub fn new(points: Vec<DVec2>, sections: ProfileSections) -> Self {
        Self { points, sections }
    }

    /// Returns the points in generation order.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the wall index ranges.
    #[inline]
    pub fn sections(&self) -> &ProfileSections {
        &self.sections
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the profile has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Builds the walled clay profile.
///
/// Dimensions are used as given; a wall thicker than the radius puts the
/// inner wall on the far side of the axis without panicking.
///
/// # Example
///
/// ```rust
/// use clay_mesh::{build_profile, ClayParams};
///
/// let profile = build_profile(&ClayParams::default());
/// assert_eq!(profile.len(), 276);
/// assert_eq!(profile.points()[0].x, 0.0);
/// ```
pub fn build_profile(params: &ClayParams) -> Profile {
    let r = params.outer_radius;
    let h = params.height;
    let t = params.wall_thickness;
    let floor_steps = params.floor_steps.max(1);
    let wall_steps = params.wall_steps.max(1);
    let inner_r = r - t;

    let mut points = Vec::with_capacity(params.profile_len());

    // Inner floor
    for i in 0..=floor_steps {
        let s = f64::from(i) / f64::from(floor_steps);
        points.push(DVec2::new(inner_r * s, t));
    }

    // Inner wall
    let inner_start = points.len();
    for i in 0..=wall_steps {
        let s = f64::from(i) / f64::from(wall_steps);
        points.push(DVec2::new(inner_r, t + (h - t) * s));
    }
    let inner_end = points.len() - 1;

    points.extend(rim_arc(inner_r, r, h, t));

    // Outer wall
    let outer_start = points.len();
    for i in (0..=wall_steps).rev() {
        let s = f64::from(i) / f64::from(wall_steps);
        points.push(DVec2::new(r, t + (h - t) * s));
    }
    let outer_end = points.len() - 1;

    // Outer floor
    for i in (0..=floor_steps).rev() {
        let s = f64::from(i) / f64::from(floor_steps);
        points.push(DVec2::new(r * s, 0.0));
    }

    Profile {
        points,
        sections: ProfileSections {
            inner_wall: inner_start..=inner_end,
            outer_wall: outer_start..=outer_end,
        },
    }
}

/// Samples the rounded lip joining `(inner_r, h)` to `(outer_r, h)`.
///
/// The arc passes through both wall tops with its center on the wall
/// midline above them, so the lip sags slightly between the walls.
/// Endpoints are excluded; they already belong to the walls.
fn rim_arc(inner_r: f64, outer_r: f64, h: f64, t: f64) -> impl Iterator<Item = DVec2> {
    let radius = t * RIM_RADIUS_FACTOR;
    let half_span = (outer_r - inner_r) * 0.5;
    let center = DVec2::new(
        inner_r + half_span,
        h + (radius * radius - half_span * half_span).max(0.0).sqrt(),
    );
    let start = (h - center.y).atan2(inner_r - center.x);
    let end = (h - center.y).atan2(outer_r - center.x);
    let divisions = f64::from(RIM_ARC_STEPS + 1);

    (1..=RIM_ARC_STEPS).map(move |i| {
        let angle = start + (end - start) * f64::from(i) / divisions;
        center + DVec2::new(angle.cos(), angle.sin()) * radius
    })
}
