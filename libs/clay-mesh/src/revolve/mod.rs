//! # Revolution
//!
//! Revolves a clay profile around the vertical (Y) axis.
//!
//! ## Algorithm
//!
//! 1. Each profile point `(x, y)` is rotated to `(x·cos θ, y, x·sin θ)` at
//!    every column angle `θ = 2π·column / N`
//! 2. Each pair of adjacent profile points in adjacent columns forms a quad,
//!    split into two triangles wound so normals face out of the clay
//! 3. Vertices are classified by their profile index
//! 4. Floor vertices get planar UVs in place of the cylindrical unwrap
//! 5. Normals are computed from the final positions

use config::constants::{CAP_UV_SPAN, FLOOR_EPSILON, MIN_RADIAL_SEGMENTS};
use glam::{DVec2, DVec3};

use crate::error::{ClayError, ClayResult};
use crate::mesh::{radial_distance, ClayMesh, WallType};
use crate::params::{ClayDimensions, ClayParams, SeamLayout};
use crate::profile::{build_profile, Profile, ProfileSections};

#[cfg(test)]
mod tests;

/// Parameters for revolving a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevolveParams {
    /// Number of angular segments around the axis
    pub segments: u32,
    /// Seam handling
    pub seam: SeamLayout,
}

impl Default for RevolveParams {
    fn default() -> Self {
        Self {
            segments: config::constants::DEFAULT_RADIAL_SEGMENTS,
            seam: SeamLayout::Wrapped,
        }
    }
}

/// Builds the profile for `params` and revolves it.
///
/// # Example
///
/// ```rust
/// use clay_mesh::{build_clay_mesh, ClayParams};
///
/// let mesh = build_clay_mesh(&ClayParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 276 * 128);
/// ```
pub fn build_clay_mesh(params: &ClayParams) -> ClayResult<ClayMesh> {
    params.validate()?;
    let profile = build_profile(params);
    revolve(
        &profile,
        params.dimensions(),
        &RevolveParams {
            segments: params.radial_segments,
            seam: params.seam,
        },
    )
}

/// Revolves a profile into a classified clay mesh.
///
/// `dimensions` drives floor detection for the UV repair and is stored on
/// the mesh for later sculpting and morphing.
pub fn revolve(
    profile: &Profile,
    dimensions: ClayDimensions,
    params: &RevolveParams,
) -> ClayResult<ClayMesh> {
    if params.segments < MIN_RADIAL_SEGMENTS {
        return Err(ClayError::TooFewSegments {
            segments: params.segments,
            min: MIN_RADIAL_SEGMENTS,
        });
    }
    if profile.len() < 2 {
        return Err(ClayError::ProfileTooShort {
            points: profile.len(),
        });
    }

    let n = profile.len();
    let segments = params.segments as usize;
    let columns = match params.seam {
        SeamLayout::Wrapped => segments,
        SeamLayout::Duplicated => segments + 1,
    };
    let vertex_count = n * columns;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut wall_types = Vec::with_capacity(vertex_count);
    let v_scale = 1.0 / (n - 1) as f64;

    for column in 0..columns {
        let u = column as f64 / segments as f64;
        let theta = u * std::f64::consts::TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for (j, p) in profile.points().iter().enumerate() {
            positions.push(DVec3::new(p.x * cos_theta, p.y, p.x * sin_theta));
            uvs.push(DVec2::new(u, j as f64 * v_scale));
            wall_types.push(classify(j, profile.sections()));
        }
    }

    let triangles = triangulate(n, segments, params.seam);
    repair_cap_uvs(&positions, &mut uvs, &dimensions);

    let mesh = ClayMesh::from_parts(
        positions,
        uvs,
        wall_types,
        triangles,
        dimensions,
        n,
        params.seam,
    );
    log::debug!(
        "revolved clay: {} profile points x {} columns = {} vertices, {} triangles",
        n,
        columns,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Classifies a profile index into a wall.
#[inline]
pub fn classify(index: usize, sections: &ProfileSections) -> WallType {
    if sections.inner_wall.contains(&index) {
        WallType::Inner
    } else if sections.outer_wall.contains(&index) {
        WallType::Outer
    } else {
        WallType::Neutral
    }
}

/// Builds two triangles per quad between adjacent columns.
fn triangulate(n: usize, segments: usize, seam: SeamLayout) -> Vec<[u32; 3]> {
    let mut triangles = Vec::with_capacity(segments * (n - 1) * 2);

    for column in 0..segments {
        let base = column * n;
        let next_base = match seam {
            SeamLayout::Wrapped => ((column + 1) % segments) * n,
            SeamLayout::Duplicated => (column + 1) * n,
        };

        for j in 0..n - 1 {
            let a = (base + j) as u32;
            let b = (next_base + j) as u32;
            let c = (next_base + j + 1) as u32;
            let d = (base + j + 1) as u32;

            triangles.push([a, b, d]);
            triangles.push([b, c, d]);
        }
    }

    triangles
}

/// Replaces the cylindrical UVs of floor vertices with a planar projection.
///
/// Cylindrical unwrapping pinches toward the pole; the planar mapping keeps
/// texel density uniform across both floors.
fn repair_cap_uvs(positions: &[DVec3], uvs: &mut [DVec2], dimensions: &ClayDimensions) {
    let t = dimensions.wall_thickness;
    let inner_limit = dimensions.outer_radius - t + FLOOR_EPSILON;
    let span = CAP_UV_SPAN * dimensions.outer_radius;
    if span.abs() <= f64::EPSILON {
        return;
    }

    for (p, uv) in positions.iter().zip(uvs.iter_mut()) {
        let outer_floor = p.y < FLOOR_EPSILON;
        let inner_floor = (p.y - t).abs() < FLOOR_EPSILON && radial_distance(*p) < inner_limit;

        if outer_floor || inner_floor {
            *uv = DVec2::new(0.5 + p.x / span, 0.5 + p.z / span);
        }
    }
}
