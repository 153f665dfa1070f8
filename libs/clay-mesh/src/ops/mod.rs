//! # Mesh Operations
//!
//! Real-time mutations of a clay mesh. Every operation leaves on-axis
//! vertices in place and recomputes normals before returning.

pub mod deform;
pub mod morph;

pub use deform::{deform, BrushConfig, BrushMode, DeformReport};
pub use morph::{
    apply_shape_now, ease_out_quad, target_positions, MorphConfig, MorphStatus, MorphStepper,
};
