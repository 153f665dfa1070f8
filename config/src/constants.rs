//! # Configuration Constants
//!
//! Centralized constants for the clay engine. Profile construction, brush
//! behaviour, and morph tapering are all tuned here.
//!
//! ## Categories
//!
//! - **Precision**: Axis and floor detection tolerances
//! - **Clay**: Default blank dimensions and tessellation
//! - **Rim**: Rounded lip construction
//! - **Brush**: Sculpt and trim behaviour
//! - **Morph**: Target-shape tapering and animation timing
//! - **Preview**: Shape thumbnails

use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Radial distance below which a vertex is treated as lying on the axis.
///
/// On-axis vertices have no meaningful angle, so every radial operation
/// leaves them where they are.
///
/// # Example
///
/// ```rust
/// use config::constants::AXIS_EPSILON;
///
/// let radius = (0.001f64 * 0.001 + 0.002 * 0.002).sqrt();
/// assert!(radius < AXIS_EPSILON);
/// ```
pub const AXIS_EPSILON: f64 = 0.01;

/// Height tolerance used to detect vertices on the flat floors.
///
/// # Example
///
/// ```rust
/// use config::constants::FLOOR_EPSILON;
///
/// assert!(0.004 < FLOOR_EPSILON);
/// ```
pub const FLOOR_EPSILON: f64 = 0.01;

// =============================================================================
// CLAY CONSTANTS
// =============================================================================

/// Default outer radius of a fresh clay blank.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_OUTER_RADIUS, DEFAULT_WALL_THICKNESS};
///
/// assert!(DEFAULT_OUTER_RADIUS > DEFAULT_WALL_THICKNESS);
/// ```
pub const DEFAULT_OUTER_RADIUS: f64 = 0.72;

/// Default height of a fresh clay blank.
pub const DEFAULT_HEIGHT: f64 = 2.5;

/// Default wall thickness of a fresh clay blank.
pub const DEFAULT_WALL_THICKNESS: f64 = 0.15;

/// Number of intervals along each floor (center to wall).
pub const DEFAULT_FLOOR_STEPS: u32 = 5;

/// Number of intervals along each wall (bottom to top).
pub const DEFAULT_WALL_STEPS: u32 = 120;

/// Number of angular samples around the axis.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_RADIAL_SEGMENTS, MIN_RADIAL_SEGMENTS};
///
/// assert!(DEFAULT_RADIAL_SEGMENTS >= MIN_RADIAL_SEGMENTS);
/// ```
pub const DEFAULT_RADIAL_SEGMENTS: u32 = 128;

/// Fewest angular samples that still enclose a volume.
pub const MIN_RADIAL_SEGMENTS: u32 = 3;

/// Planar projection span for cap UVs, as a multiple of the outer radius.
///
/// # Example
///
/// ```rust
/// use config::constants::CAP_UV_SPAN;
///
/// // A point on the outer rim maps inside [0, 1].
/// let u = 0.5 + 1.0 / CAP_UV_SPAN;
/// assert!(u < 1.0);
/// ```
pub const CAP_UV_SPAN: f64 = 2.5;

// =============================================================================
// RIM CONSTANTS
// =============================================================================

/// Rim arc radius as a fraction of the wall thickness.
///
/// Larger than half the thickness so the arc spans both wall tops. Its
/// center sits above them, so the lip dips shallowly between the walls.
///
/// # Example
///
/// ```rust
/// use config::constants::RIM_RADIUS_FACTOR;
///
/// assert!(RIM_RADIUS_FACTOR > 0.5);
/// ```
pub const RIM_RADIUS_FACTOR: f64 = 0.78;

/// Number of samples along the rim arc.
pub const RIM_ARC_STEPS: u32 = 22;

// =============================================================================
// BRUSH CONSTANTS
// =============================================================================

/// Half-height of the band affected by one sculpt or trim call.
pub const BRUSH_RADIUS: f64 = 0.6;

/// Lerp weight applied per sculpt call at the band center.
pub const BRUSH_STRENGTH: f64 = 0.15;

/// Variance of the Gaussian band falloff.
///
/// # Example
///
/// ```rust
/// use config::constants::{BRUSH_FALLOFF_VARIANCE, BRUSH_RADIUS};
///
/// let edge = (-(BRUSH_RADIUS * BRUSH_RADIUS) / (2.0 * BRUSH_FALLOFF_VARIANCE)).exp();
/// assert!(edge < 0.05);
/// ```
pub const BRUSH_FALLOFF_VARIANCE: f64 = 0.05;

/// Radius removed per trim call at the band center.
pub const TRIM_STEP: f64 = 0.02;

/// Lower bound on any sculpted radius.
pub const MIN_SCULPT_RADIUS: f64 = 0.1;

/// Upper bound on any sculpted radius.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_SCULPT_RADIUS, MIN_SCULPT_RADIUS};
///
/// let clamped = 7.5f64.clamp(MIN_SCULPT_RADIUS, MAX_SCULPT_RADIUS);
/// assert_eq!(clamped, MAX_SCULPT_RADIUS);
/// ```
pub const MAX_SCULPT_RADIUS: f64 = 4.0;

/// Fraction of the nominal height above which neutral (rim) vertices follow
/// the brush.
pub const RIM_SCULPT_HEIGHT_FRACTION: f64 = 0.9;

// =============================================================================
// MORPH CONSTANTS
// =============================================================================

/// Normalized height below which walls keep their full thickness.
pub const TAPER_START: f64 = 0.22;

/// Thickness lost between `TAPER_START` and the top, as a fraction.
pub const TAPER_AMOUNT: f64 = 0.6;

/// Thinnest the tapered wall may get, as a fraction of the nominal thickness.
///
/// # Example
///
/// ```rust
/// use config::constants::{MIN_TAPER_FACTOR, TAPER_AMOUNT};
///
/// // Without the floor the wall would thin to 1 - TAPER_AMOUNT at the top.
/// assert!((MIN_TAPER_FACTOR - (1.0 - TAPER_AMOUNT)).abs() < 1e-12);
/// ```
pub const MIN_TAPER_FACTOR: f64 = 0.4;

/// Normalized height above which the rim flares outward.
pub const RIM_FLARE_START: f64 = 0.92;

/// Relative radius gained at the very top by the rim flare.
pub const RIM_FLARE_AMOUNT: f64 = 0.008;

/// Normalized height above which neutral rim vertices taper inward.
pub const RIM_TAPER_START: f64 = 0.93;

/// Rim taper multiplier reached at the very top.
pub const RIM_TAPER_MIN: f64 = 0.72;

/// Smallest radius a morph may write for inner or rim vertices.
pub const MIN_MORPH_RADIUS: f64 = 0.05;

/// Height below which neutral vertices are treated as floor.
pub const FLOOR_HEIGHT_THRESHOLD: f64 = 0.1;

/// Progress added per animation tick.
///
/// # Example
///
/// ```rust
/// use config::constants::MORPH_TICK_PROGRESS;
///
/// let ticks = (1.0 / MORPH_TICK_PROGRESS).round() as u32;
/// assert_eq!(ticks, 50);
/// ```
pub const MORPH_TICK_PROGRESS: f64 = 0.02;

/// Wall-clock length of one animation tick, in seconds.
pub const MORPH_TICK_SECONDS: f64 = 0.016;

// =============================================================================
// PREVIEW CONSTANTS
// =============================================================================

/// Height samples per side of a shape silhouette preview.
pub const SILHOUETTE_STEPS: usize = 20;

// =============================================================================
// VALIDATED CONFIGURATION
// =============================================================================

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A tolerance or distance that must be positive was not.
    #[error("{name} must be positive: {value}")]
    NonPositive {
        /// Name of the offending field
        name: &'static str,
        /// Supplied value
        value: f64,
    },

    /// A clamp band whose lower bound exceeds its upper bound.
    #[error("radius band is empty: [{min}, {max}]")]
    EmptyRadiusBand {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

/// Validated radius band used to clamp every sculpted radius.
///
/// # Examples
/// ```
/// use config::constants::RadiusBand;
/// let band = RadiusBand::new(0.2, 2.0).expect("valid band");
/// assert_eq!(band.clamp(5.0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusBand {
    /// Smallest allowed radius.
    pub min: f64,
    /// Largest allowed radius.
    pub max: f64,
}

impl RadiusBand {
    /// Builds a band, rejecting empty or non-positive ranges.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !(min > 0.0) {
            return Err(ConfigError::NonPositive { name: "min", value: min });
        }
        if min > max {
            return Err(ConfigError::EmptyRadiusBand { min, max });
        }
        Ok(Self { min, max })
    }

    /// Clamps a radius into the band.
    #[inline]
    pub fn clamp(&self, radius: f64) -> f64 {
        radius.clamp(self.min, self.max)
    }
}

impl Default for RadiusBand {
    fn default() -> Self {
        Self {
            min: MIN_SCULPT_RADIUS,
            max: MAX_SCULPT_RADIUS,
        }
    }
}

/// Ensures a named value is strictly positive.
///
/// # Examples
/// ```
/// use config::constants::require_positive;
/// assert!(require_positive("radius", 0.5).is_ok());
/// assert!(require_positive("radius", 0.0).is_err());
/// ```
pub fn require_positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
