//! # Clay Mesh
//!
//! Procedural wheel-thrown clay: a hollow solid of revolution that is
//! sculpted by a band brush and morphed toward catalog vessel shapes.
//!
//! ## Architecture
//!
//! ```text
//! ClayParams → profile → revolve (classify, UV repair) → ClayMesh
//!                                                          │
//!                        deform (sculpt / trim) ◄──────────┤
//!                        morph (stepper / apply now) ◄─────┘
//! ```
//!
//! [`ClaySession`] owns a mesh and arbitrates between the two mutations.
//! Geometry is f64 throughout; f32 buffers are produced only for upload.
//!
//! ## Usage
//!
//! ```rust
//! use clay_mesh::{BrushMode, ClayParams, ClaySession, MorphStatus, ShapePreset};
//! use glam::DVec3;
//!
//! let mut session = ClaySession::new(ClayParams::default()).unwrap();
//! session.sculpt_local(DVec3::new(0.9, 1.2, 0.0), BrushMode::Sculpt);
//!
//! session.set_target(ShapePreset::Yuhuchun.target());
//! session.begin_morph();
//! while session.advance_morph(0.016) == Some(MorphStatus::InProgress) {}
//! assert!(!session.is_morphing());
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod params;
pub mod profile;
pub mod revolve;
pub mod session;
pub mod shapes;

pub use error::{ClayError, ClayResult};
pub use mesh::{ClayMesh, WallType};
pub use ops::{
    apply_shape_now, deform, ease_out_quad, target_positions, BrushConfig, BrushMode,
    DeformReport, MorphConfig, MorphStatus, MorphStepper,
};
pub use params::{ClayDimensions, ClayParams, SeamLayout};
pub use profile::{build_profile, Profile, ProfileSections};
pub use revolve::{build_clay_mesh, revolve, RevolveParams};
pub use session::ClaySession;
pub use shapes::{presets_in, RadiusProfile, ShapeCategory, ShapePreset, TargetShape};
