//! # Clay Mesh Data Structure
//!
//! Revolved mesh with per-vertex normals, UVs, and wall classification.

use config::constants::AXIS_EPSILON;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::params::{ClayDimensions, SeamLayout};

/// Which surface of the clay a vertex belongs to.
///
/// Assigned once from the profile index that generated the vertex and never
/// changed by sculpting or morphing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallType {
    /// Surface facing the cavity
    Inner,
    /// Surface facing outward
    Outer,
    /// Floors and rim
    Neutral,
}

impl WallType {
    /// Shader attribute value: -1 inner, 0 neutral, +1 outer.
    #[inline]
    pub fn attribute(self) -> f32 {
        match self {
            WallType::Inner => -1.0,
            WallType::Outer => 1.0,
            WallType::Neutral => 0.0,
        }
    }
}

/// Distance of a point from the vertical axis.
#[inline]
pub fn radial_distance(p: DVec3) -> f64 {
    p.x.hypot(p.z)
}

/// Returns `p` moved to `radius` along its own bearing `atan2(z, x)`.
#[inline]
pub fn with_radius(p: DVec3, radius: f64) -> DVec3 {
    let angle = p.z.atan2(p.x);
    DVec3::new(angle.cos() * radius, p.y, angle.sin() * radius)
}

/// Returns true if the point is too close to the axis to have a bearing.
#[inline]
pub fn is_on_axis(p: DVec3) -> bool {
    radial_distance(p) < AXIS_EPSILON
}

/// A revolved clay mesh.
///
/// Vertices are laid out column-major: vertex `column * profile_len + j`
/// came from profile point `j` at angular column `column`. All geometry uses
/// f64; export to f32 happens only for GPU upload.
///
/// Only positions change after construction. Wall types, UVs, and triangles
/// are fixed for the life of the mesh.
#[derive(Debug, Clone)]
pub struct ClayMesh {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Vec<DVec2>,
    wall_types: Vec<WallType>,
    triangles: Vec<[u32; 3]>,
    dimensions: ClayDimensions,
    profile_len: usize,
    columns: usize,
    seam: SeamLayout,
}

impl ClayMesh {
    /// Assembles a mesh from revolved buffers and computes normals.
    pub(crate) fn from_parts(
        positions: Vec<DVec3>,
        uvs: Vec<DVec2>,
        wall_types: Vec<WallType>,
        triangles: Vec<[u32; 3]>,
        dimensions: ClayDimensions,
        profile_len: usize,
        seam: SeamLayout,
    ) -> Self {
        debug_assert_eq!(positions.len(), uvs.len());
        debug_assert_eq!(positions.len(), wall_types.len());
        let columns = if profile_len == 0 { 0 } else { positions.len() / profile_len };
        let mut mesh = Self {
            normals: vec![DVec3::ZERO; positions.len()],
            positions,
            uvs,
            wall_types,
            triangles,
            dimensions,
            profile_len,
            columns,
            seam,
        };
        mesh.compute_normals();
        mesh
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of profile points per angular column.
    #[inline]
    pub fn profile_len(&self) -> usize {
        self.profile_len
    }

    /// Number of angular columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// How the last column meets the first.
    #[inline]
    pub fn seam(&self) -> SeamLayout {
        self.seam
    }

    /// Nominal dimensions the mesh was built with.
    #[inline]
    pub fn dimensions(&self) -> &ClayDimensions {
        &self.dimensions
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the vertex UVs.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the per-vertex wall classification.
    #[inline]
    pub fn wall_types(&self) -> &[WallType] {
        &self.wall_types
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Profile index that generated a vertex.
    #[inline]
    pub fn profile_index(&self, vertex: usize) -> usize {
        vertex % self.profile_len.max(1)
    }

    /// Positions for mutation alongside the read-only classification.
    pub(crate) fn positions_mut_with_walls(&mut self) -> (&mut [DVec3], &[WallType]) {
        (&mut self.positions, &self.wall_types)
    }

    /// Positions for whole-buffer writes.
    pub(crate) fn positions_mut(&mut self) -> &mut [DVec3] {
        &mut self.positions
    }

    /// Recomputes area-weighted vertex normals from the current positions.
    ///
    /// Must run after every mutation before the mesh is rendered or mutated
    /// again. With a duplicated seam, the first and last columns share their
    /// summed normal so the seam shades smoothly.
    pub fn compute_normals(&mut self) {
        for normal in &mut self.normals {
            *normal = DVec3::ZERO;
        }

        for tri in &self.triangles {
            let v0 = self.positions[tri[0] as usize];
            let v1 = self.positions[tri[1] as usize];
            let v2 = self.positions[tri[2] as usize];
            let normal = (v1 - v0).cross(v2 - v0);

            self.normals[tri[0] as usize] += normal;
            self.normals[tri[1] as usize] += normal;
            self.normals[tri[2] as usize] += normal;
        }

        if self.seam == SeamLayout::Duplicated && self.columns > 1 {
            let last = (self.columns - 1) * self.profile_len;
            for j in 0..self.profile_len {
                let sum = self.normals[j] + self.normals[last + j];
                self.normals[j] = sum;
                self.normals[last + j] = sum;
            }
        }

        for normal in &mut self.normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.positions.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.positions[1..]
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Exports positions as a flat f32 array for GPU.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Exports normals as a flat f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports UVs as a flat f32 array for GPU.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Exports the wall classification as a float attribute.
    pub fn wall_types_f32(&self) -> Vec<f32> {
        self.wall_types.iter().map(|w| w.attribute()).collect()
    }

    /// Exports triangle indices as a flat u32 array for GPU.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
