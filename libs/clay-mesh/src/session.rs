//! # Clay Session
//!
//! Owns the live clay mesh and arbitrates between sculpting and morphing.
//!
//! Sculpt input is dropped while a morph owns the mesh. Rebuilding the clay
//! drops any running morph; cancelling one leaves the intermediate pose.

use glam::{DMat4, DVec3};

use crate::error::ClayResult;
use crate::mesh::ClayMesh;
use crate::ops::{
    apply_shape_now, deform, BrushConfig, BrushMode, DeformReport, MorphConfig, MorphStatus,
    MorphStepper,
};
use crate::params::ClayParams;
use crate::revolve::build_clay_mesh;
use crate::shapes::TargetShape;

/// A clay blank on the wheel.
#[derive(Debug)]
pub struct ClaySession {
    params: ClayParams,
    mesh: ClayMesh,
    world_from_local: DMat4,
    local_from_world: DMat4,
    target: Option<TargetShape>,
    morph: Option<MorphStepper>,
    /// Brush used for sculpt and trim input
    pub brush: BrushConfig,
    /// Tuning for shape morphs
    pub morph_config: MorphConfig,
}

impl ClaySession {
    /// Builds a fresh blank.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clay_mesh::{ClayParams, ClaySession};
    ///
    /// let session = ClaySession::new(ClayParams::default()).unwrap();
    /// assert!(!session.is_morphing());
    /// ```
    pub fn new(params: ClayParams) -> ClayResult<Self> {
        let mesh = build_clay_mesh(&params)?;
        Ok(Self {
            params,
            mesh,
            world_from_local: DMat4::IDENTITY,
            local_from_world: DMat4::IDENTITY,
            target: None,
            morph: None,
            brush: BrushConfig::default(),
            morph_config: MorphConfig::default(),
        })
    }

    /// Replaces the blank with a new one built from `params`.
    ///
    /// On error the current mesh is kept. Any running morph is dropped; the
    /// selected target shape is kept.
    pub fn rebuild(&mut self, params: ClayParams) -> ClayResult<()> {
        let mesh = build_clay_mesh(&params)?;
        if self.morph.take().is_some() {
            log::debug!("morph dropped by rebuild");
        }
        self.params = params;
        self.mesh = mesh;
        Ok(())
    }

    pub fn params(&self) -> &ClayParams {
        &self.params
    }

    pub fn mesh(&self) -> &ClayMesh {
        &self.mesh
    }

    /// Sets the mesh's world transform, used to localize contact points.
    ///
    /// A singular matrix is ignored.
    pub fn set_transform(&mut self, world_from_local: DMat4) {
        let det = world_from_local.determinant();
        if !det.is_finite() || det.abs() <= f64::EPSILON {
            log::warn!("ignoring singular clay transform");
            return;
        }
        self.world_from_local = world_from_local;
        self.local_from_world = world_from_local.inverse();
    }

    pub fn transform(&self) -> DMat4 {
        self.world_from_local
    }

    pub fn set_target(&mut self, shape: TargetShape) {
        log::debug!("target shape: {}", shape.label());
        self.target = Some(shape);
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    pub fn target(&self) -> Option<&TargetShape> {
        self.target.as_ref()
    }

    /// Sculpts at a world-space contact point.
    pub fn sculpt_world(&mut self, contact: DVec3, mode: BrushMode) -> DeformReport {
        let local = self.local_from_world.transform_point3(contact);
        self.sculpt_local(local, mode)
    }

    /// Sculpts at a contact point in the mesh local frame.
    ///
    /// Ignored while a morph is running.
    pub fn sculpt_local(&mut self, contact: DVec3, mode: BrushMode) -> DeformReport {
        if self.morph.is_some() {
            log::trace!("sculpt ignored during morph");
            return DeformReport::default();
        }
        deform(&mut self.mesh, contact, mode, &self.brush)
    }

    /// Starts morphing toward the selected target from the current pose.
    ///
    /// Returns `false` without doing anything if no target is selected.
    /// A running morph is restarted from the current pose.
    pub fn begin_morph(&mut self) -> bool {
        let Some(shape) = &self.target else {
            return false;
        };
        self.morph = Some(MorphStepper::new(&self.mesh, shape, self.morph_config));
        true
    }

    /// Advances the running morph.
    ///
    /// Returns `None` when no morph is running. `Some(Complete)` is returned
    /// exactly once per morph; the stepper is dropped afterwards.
    pub fn advance_morph(&mut self, delta_seconds: f64) -> Option<MorphStatus> {
        let stepper = self.morph.as_mut()?;
        let status = stepper.advance(&mut self.mesh, delta_seconds);
        if status == MorphStatus::Complete {
            self.morph = None;
        }
        Some(status)
    }

    /// Stops the running morph, leaving the mesh in its current pose.
    pub fn cancel_morph(&mut self) {
        if let Some(stepper) = self.morph.take() {
            log::debug!("morph cancelled at {:.2}", stepper.progress());
        }
    }

    pub fn is_morphing(&self) -> bool {
        self.morph.is_some()
    }

    /// Linear progress of the running morph.
    pub fn morph_progress(&self) -> Option<f64> {
        self.morph.as_ref().map(MorphStepper::progress)
    }

    /// Applies the selected target immediately, cancelling any running morph.
    ///
    /// Returns `false` if no target is selected.
    pub fn apply_target_now(&mut self) -> bool {
        let Some(shape) = &self.target else {
            return false;
        };
        self.morph = None;
        apply_shape_now(&mut self.mesh, shape, &self.morph_config);
        true
    }
}
