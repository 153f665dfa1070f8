//! WASM-facing entry points for the clay engine.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which return
//! Rust errors instead of `JsValue`s and so run without a JS host.
//!
//! ```
//! let handle = clay_wasm::ClaySessionHandle::from_json_internal("{}").unwrap();
//! assert_eq!(handle.mesh().vertex_count(), 276 * 128);
//! ```

use clay_mesh::{
    presets_in, BrushConfig, BrushMode, ClayError, ClayParams, ClaySession, MorphStatus,
    ShapeCategory, ShapePreset,
};
use config::constants::SILHOUETTE_STEPS;
use glam::{DMat4, DVec3};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs the panic hook and, with `debug_logs`, the console logger.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "clay_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logger();
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

/// Errors surfaced to the host before they become `JsValue`s.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Clay(#[from] ClayError),

    #[error("Transform must have 16 elements: {0}")]
    TransformLength(usize),
}

fn to_js(err: HostError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_params(params_json: &str) -> Result<ClayParams, HostError> {
    if params_json.trim().is_empty() {
        return Ok(ClayParams::default());
    }
    Ok(serde_json::from_str(params_json)?)
}

/// A clay session owned by JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const clay = new ClaySessionHandle("{}");
/// // clay.sculpt(hit.x, hit.y, hit.z, false);
/// // geometry.attributes.position.array.set(clay.positions());
/// ```
#[wasm_bindgen]
#[derive(Debug)]
pub struct ClaySessionHandle {
    session: ClaySession,
}

#[wasm_bindgen]
impl ClaySessionHandle {
    /// Builds a blank from a JSON `ClayParams`; missing fields use defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(params_json: &str) -> Result<ClaySessionHandle, JsValue> {
        Self::from_json_internal(params_json).map_err(to_js)
    }

    /// Replaces the blank, dropping any running morph.
    pub fn rebuild(&mut self, params_json: &str) -> Result<(), JsValue> {
        self.rebuild_internal(params_json).map_err(to_js)
    }

    /// Sets the world transform from 16 column-major values.
    pub fn set_transform(&mut self, matrix: &[f64]) -> Result<(), JsValue> {
        self.set_transform_internal(matrix).map_err(to_js)
    }

    /// Replaces the brush from a JSON `BrushConfig`.
    ///
    /// Missing fields use defaults. An invalid brush is rejected and the
    /// current one kept.
    pub fn set_brush(&mut self, brush_json: &str) -> Result<(), JsValue> {
        self.set_brush_internal(brush_json).map_err(to_js)
    }

    /// Sculpts or trims at a world-space contact point.
    ///
    /// Returns the number of vertices moved; zero while morphing.
    pub fn sculpt(&mut self, x: f64, y: f64, z: f64, trimming: bool) -> u32 {
        let mode = if trimming {
            BrushMode::Trim
        } else {
            BrushMode::Sculpt
        };
        let report = self.session.sculpt_world(DVec3::new(x, y, z), mode);
        u32::try_from(report.affected).unwrap_or(u32::MAX)
    }

    /// Selects a catalog shape as the morph target.
    pub fn select_shape(&mut self, id: &str) -> Result<(), JsValue> {
        self.select_shape_internal(id).map_err(to_js)
    }

    pub fn clear_shape(&mut self) {
        self.session.clear_target();
    }

    /// Starts morphing toward the selected shape. False if none is selected.
    pub fn begin_morph(&mut self) -> bool {
        self.session.begin_morph()
    }

    /// Advances the morph by one frame.
    ///
    /// Returns true only on the frame the morph completes.
    pub fn advance_morph(&mut self, delta_ms: f64) -> bool {
        self.session.advance_morph(delta_ms / 1000.0) == Some(MorphStatus::Complete)
    }

    pub fn cancel_morph(&mut self) {
        self.session.cancel_morph();
    }

    pub fn is_morphing(&self) -> bool {
        self.session.is_morphing()
    }

    /// Applies the selected shape without animation.
    pub fn apply_shape_now(&mut self) -> bool {
        self.session.apply_target_now()
    }

    /// Full buffer snapshot, for creating the geometry.
    pub fn mesh(&self) -> MeshHandle {
        MeshHandle::from_mesh(self.session.mesh())
    }

    /// Current positions, for per-frame updates.
    pub fn positions(&self) -> Vec<f32> {
        self.session.mesh().positions_f32()
    }

    /// Current normals, for per-frame updates.
    pub fn normals(&self) -> Vec<f32> {
        self.session.mesh().normals_f32()
    }
}

impl ClaySessionHandle {
    /// Host-only constructor returning Rust errors.
    pub fn from_json_internal(params_json: &str) -> Result<Self, HostError> {
        let params = parse_params(params_json)?;
        Ok(Self {
            session: ClaySession::new(params)?,
        })
    }

    pub fn rebuild_internal(&mut self, params_json: &str) -> Result<(), HostError> {
        let params = parse_params(params_json)?;
        self.session.rebuild(params)?;
        Ok(())
    }

    pub fn set_transform_internal(&mut self, matrix: &[f64]) -> Result<(), HostError> {
        let cols: &[f64; 16] = matrix
            .try_into()
            .map_err(|_| HostError::TransformLength(matrix.len()))?;
        self.session.set_transform(DMat4::from_cols_array(cols));
        Ok(())
    }

    pub fn set_brush_internal(&mut self, brush_json: &str) -> Result<(), HostError> {
        let brush: BrushConfig = serde_json::from_str(brush_json)?;
        brush.validate().map_err(ClayError::from)?;
        self.session.brush = brush;
        Ok(())
    }

    pub fn select_shape_internal(&mut self, id: &str) -> Result<(), HostError> {
        let preset = ShapePreset::from_id(id)?;
        self.session.set_target(preset.target());
        Ok(())
    }

    pub fn session(&self) -> &ClaySession {
        &self.session
    }
}

#[derive(Debug, Serialize)]
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    height_scale: f64,
    radius_scale: f64,
}

#[derive(Debug, Serialize)]
struct CatalogCategory {
    id: &'static str,
    shapes: Vec<CatalogEntry>,
}

/// Returns the shape catalog as JSON, grouped by category.
#[wasm_bindgen]
pub fn shape_catalog() -> Result<String, JsValue> {
    shape_catalog_internal().map_err(to_js)
}

/// Host-only helper behind [`shape_catalog`].
pub fn shape_catalog_internal() -> Result<String, HostError> {
    let categories: Vec<CatalogCategory> = ShapeCategory::ALL
        .into_iter()
        .map(|category| CatalogCategory {
            id: category.id(),
            shapes: presets_in(category)
                .map(|p| CatalogEntry {
                    id: p.id(),
                    name: p.name(),
                    height_scale: p.height_scale(),
                    radius_scale: p.radius_scale(),
                })
                .collect(),
        })
        .collect();
    Ok(serde_json::to_string(&categories)?)
}

/// Returns a closed preview outline for a shape as `[x, y, x, y, ...]`.
#[wasm_bindgen]
pub fn shape_silhouette(id: &str) -> Result<Vec<f32>, JsValue> {
    shape_silhouette_internal(id).map_err(to_js)
}

/// Host-only helper behind [`shape_silhouette`].
pub fn shape_silhouette_internal(id: &str) -> Result<Vec<f32>, HostError> {
    let shape = ShapePreset::from_id(id)?.target();
    Ok(shape
        .silhouette(SILHOUETTE_STEPS)
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32])
        .collect())
}
