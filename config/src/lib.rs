//! # Config Crate
//!
//! Centralized configuration constants for the clay engine.
//! Every tuned number used by profile construction, sculpting, and morphing
//! is defined here so the shape of the pottery can be adjusted in one place.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{AXIS_EPSILON, MAX_SCULPT_RADIUS, MIN_SCULPT_RADIUS};
//!
//! // Skip vertices that sit on the revolution axis
//! let radius: f64 = 0.004;
//! assert!(radius < AXIS_EPSILON);
//!
//! // Keep sculpted radii inside the valid band
//! let requested = 6.0f64;
//! assert_eq!(requested.clamp(MIN_SCULPT_RADIUS, MAX_SCULPT_RADIUS), MAX_SCULPT_RADIUS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
