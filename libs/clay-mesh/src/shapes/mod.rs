//! # Target Shapes
//!
//! A target shape is a radius profile over normalized height plus a pair
//! of scales. The morph engine samples it per vertex; the UI samples it for
//! the silhouette preview.

use std::fmt;
use std::sync::Arc;

use glam::DVec2;

mod catalog;

#[cfg(test)]
mod tests;

pub use catalog::{presets_in, ShapeCategory, ShapePreset};

/// Relative radius as a function of normalized height.
///
/// `normalized_height` runs from `0.0` at the base to `1.0` at the top.
/// A result of `1.0` means the nominal outer radius.
pub trait RadiusProfile {
    fn radius_at(&self, normalized_height: f64) -> f64;
}

impl<F> RadiusProfile for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn radius_at(&self, normalized_height: f64) -> f64 {
        self(normalized_height)
    }
}

/// A morph target: radius profile with height and radius scales.
#[derive(Clone)]
pub struct TargetShape {
    label: String,
    profile: Arc<dyn RadiusProfile + Send + Sync>,
    /// Multiplier on every vertex height
    pub height_scale: f64,
    /// Multiplier on the sampled radius
    pub radius_scale: f64,
}

impl TargetShape {
    /// Creates a shape from any radius profile.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clay_mesh::TargetShape;
    ///
    /// let cone = TargetShape::new("cone", |y: f64| 0.2 + 0.8 * y, 0.5, 1.0);
    /// assert_eq!(cone.radius_at(1.0), 1.0);
    /// ```
    pub fn new(
        label: impl Into<String>,
        profile: impl RadiusProfile + Send + Sync + 'static,
        height_scale: f64,
        radius_scale: f64,
    ) -> Self {
        Self {
            label: label.into(),
            profile: Arc::new(profile),
            height_scale,
            radius_scale,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Samples the profile, clamping the input to `[0, 1]` and the result
    /// to non-negative. Non-finite samples read as zero.
    pub fn radius_at(&self, normalized_height: f64) -> f64 {
        let s = if normalized_height.is_nan() {
            0.0
        } else {
            normalized_height.clamp(0.0, 1.0)
        };
        let r = self.profile.radius_at(s);
        if r.is_finite() {
            r.max(0.0)
        } else {
            0.0
        }
    }

    /// Closed 2D outline of the shape for previews.
    ///
    /// The right side runs bottom to top at `(radius·radius_scale,
    /// y·height_scale)` over `steps + 1` samples; the left side mirrors it
    /// back down.
    pub fn silhouette(&self, steps: usize) -> Vec<DVec2> {
        let steps = steps.max(1);
        let right: Vec<DVec2> = (0..=steps)
            .map(|i| {
                let y = i as f64 / steps as f64;
                DVec2::new(
                    self.radius_at(y) * self.radius_scale,
                    y * self.height_scale,
                )
            })
            .collect();

        let left = right.iter().rev().map(|p| DVec2::new(-p.x, p.y));
        right.iter().copied().chain(left).collect()
    }
}

impl fmt::Debug for TargetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetShape")
            .field("label", &self.label)
            .field("height_scale", &self.height_scale)
            .field("radius_scale", &self.radius_scale)
            .finish_non_exhaustive()
    }
}
