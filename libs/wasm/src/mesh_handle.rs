//! # Mesh Handle
//!
//! Snapshot of a clay mesh's GPU buffers that can be handed to JavaScript.

use clay_mesh::ClayMesh;
use wasm_bindgen::prelude::*;

/// GPU-ready copy of a clay mesh.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = session.mesh();
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setAttribute('uv', new THREE.BufferAttribute(mesh.uvs(), 2));
/// geometry.setAttribute('wallType', new THREE.BufferAttribute(mesh.wall_types(), 1));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Texture coordinates as [u, v, u, v, ...]
    uvs: Vec<f32>,
    /// -1 inner, 0 neutral, +1 outer
    wall_types: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    indices: Vec<u32>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the positions as a Float32Array.
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the normals as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the UVs as a Float32Array.
    pub fn uvs(&self) -> Vec<f32> {
        self.uvs.clone()
    }

    /// Returns the wall attribute as a Float32Array.
    pub fn wall_types(&self) -> Vec<f32> {
        self.wall_types.clone()
    }

    /// Returns the indices as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Copies every buffer out of a clay mesh.
    pub fn from_mesh(mesh: &ClayMesh) -> Self {
        Self {
            positions: mesh.positions_f32(),
            normals: mesh.normals_f32(),
            uvs: mesh.uvs_f32(),
            wall_types: mesh.wall_types_f32(),
            indices: mesh.indices_u32(),
            vertex_count: u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX),
            triangle_count: u32::try_from(mesh.triangle_count()).unwrap_or(u32::MAX),
        }
    }
}
