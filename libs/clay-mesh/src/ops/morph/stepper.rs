//! Time-stepped morph animation.

use glam::DVec3;

use super::{ease_out_quad, target_positions, MorphConfig};
use crate::mesh::ClayMesh;
use crate::shapes::TargetShape;

/// Outcome of advancing a morph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphStatus {
    /// More ticks remain
    InProgress,
    /// The target pose has been written
    Complete,
}

/// Interpolates a mesh from its pose at creation toward a target shape.
///
/// Progress advances in fixed ticks of [`MorphConfig::tick_progress`], one
/// per [`MorphConfig::tick_seconds`] of elapsed time, and is eased with
/// [`ease_out_quad`]. The last tick writes the target exactly, so a finished
/// morph matches [`apply_shape_now`](super::apply_shape_now).
///
/// # Example
///
/// ```rust
/// use clay_mesh::{build_clay_mesh, ClayParams, MorphConfig, MorphStatus, MorphStepper, ShapePreset};
///
/// let mut mesh = build_clay_mesh(&ClayParams::default()).unwrap();
/// let shape = ShapePreset::Meiping.target();
/// let mut stepper = MorphStepper::new(&mesh, &shape, MorphConfig::default());
/// while stepper.advance(&mut mesh, 0.1) == MorphStatus::InProgress {}
/// assert!(stepper.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct MorphStepper {
    start: Vec<DVec3>,
    target: Vec<DVec3>,
    config: MorphConfig,
    ticks_done: u32,
    total_ticks: u32,
    pending_seconds: f64,
}

impl MorphStepper {
    /// Captures the current pose of `mesh` and its target under `shape`.
    pub fn new(mesh: &ClayMesh, shape: &TargetShape, config: MorphConfig) -> Self {
        let total_ticks = if config.tick_progress > 0.0 {
            (1.0 / config.tick_progress - 1e-9).ceil().max(1.0) as u32
        } else {
            1
        };
        log::debug!("morph toward {} over {} ticks", shape.label(), total_ticks);
        Self {
            start: mesh.positions().to_vec(),
            target: target_positions(mesh, shape, &config),
            config,
            ticks_done: 0,
            total_ticks,
            pending_seconds: 0.0,
        }
    }

    /// Linear progress in `[0, 1]`, before easing.
    pub fn progress(&self) -> f64 {
        (f64::from(self.ticks_done) * self.config.tick_progress).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.ticks_done >= self.total_ticks
    }

    /// Target positions this morph converges to.
    pub fn target(&self) -> &[DVec3] {
        &self.target
    }

    /// Advances by `delta_seconds` of wall-clock time.
    ///
    /// Elapsed time is accumulated; every whole tick it covers advances the
    /// morph. The mesh is rewritten at most once per call.
    pub fn advance(&mut self, mesh: &mut ClayMesh, delta_seconds: f64) -> MorphStatus {
        if self.is_complete() {
            return MorphStatus::Complete;
        }
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.pending_seconds += delta_seconds;
        }

        let mut advanced = 0;
        if self.config.tick_seconds > 0.0 {
            while self.pending_seconds >= self.config.tick_seconds && !self.is_complete() {
                self.pending_seconds -= self.config.tick_seconds;
                self.ticks_done += 1;
                advanced += 1;
            }
        } else {
            advanced = self.total_ticks - self.ticks_done;
            self.ticks_done = self.total_ticks;
        }

        if advanced == 0 {
            return MorphStatus::InProgress;
        }
        self.write_pose(mesh)
    }

    /// Advances exactly one tick, ignoring elapsed time.
    pub fn tick(&mut self, mesh: &mut ClayMesh) -> MorphStatus {
        if self.is_complete() {
            return MorphStatus::Complete;
        }
        self.ticks_done += 1;
        self.write_pose(mesh)
    }

    fn write_pose(&mut self, mesh: &mut ClayMesh) -> MorphStatus {
        if mesh.vertex_count() != self.start.len() {
            log::warn!(
                "morph abandoned: mesh has {} vertices, expected {}",
                mesh.vertex_count(),
                self.start.len()
            );
            self.ticks_done = self.total_ticks;
            return MorphStatus::Complete;
        }

        let status = if self.is_complete() {
            mesh.positions_mut().copy_from_slice(&self.target);
            MorphStatus::Complete
        } else {
            let eased = ease_out_quad(self.progress());
            for ((p, start), target) in mesh
                .positions_mut()
                .iter_mut()
                .zip(&self.start)
                .zip(&self.target)
            {
                *p = start.lerp(*target, eased);
            }
            MorphStatus::InProgress
        };

        mesh.compute_normals();
        if status == MorphStatus::Complete {
            log::debug!("morph complete after {} ticks", self.ticks_done);
        }
        status
    }
}
