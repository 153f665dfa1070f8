//! # Clay Errors
//!
//! Error types for structural failures while building or configuring a clay
//! session. Numeric degeneracy (on-axis vertices, out-of-range radii) is
//! corrected silently and never reported here.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building a clay mesh or selecting a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClayError {
    /// Too few angular samples to enclose a volume
    #[error("Radial segments must be >= {min}: {segments}")]
    TooFewSegments { segments: u32, min: u32 },

    /// A floor or wall section with no intervals
    #[error("{section} steps must be >= 1")]
    EmptySection { section: &'static str },

    /// Profile cannot be revolved into faces
    #[error("Profile must have at least 2 points: {points}")]
    ProfileTooShort { points: usize },

    /// Shape id not present in the catalog
    #[error("Unknown shape: {id}")]
    UnknownShape { id: String },

    /// Invalid tuning values
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ClayError {
    /// Creates an unknown shape error.
    pub fn unknown_shape(id: impl Into<String>) -> Self {
        Self::UnknownShape { id: id.into() }
    }
}

/// Result type alias for clay operations.
pub type ClayResult<T> = Result<T, ClayError>;
