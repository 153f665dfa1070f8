//! Built-in vessel forms grouped by category.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{RadiusProfile, TargetShape};
use crate::error::{ClayError, ClayResult};

/// Broad family of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeCategory {
    Bottle,
    Cup,
    Plate,
}

impl ShapeCategory {
    pub const ALL: [ShapeCategory; 3] = [Self::Bottle, Self::Cup, Self::Plate];

    pub fn id(self) -> &'static str {
        match self {
            Self::Bottle => "bottle",
            Self::Cup => "cup",
            Self::Plate => "plate",
        }
    }

    pub fn from_id(id: &str) -> ClayResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| ClayError::unknown_shape(id))
    }
}

/// A named vessel form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapePreset {
    Meiping,
    Yuhuchun,
    Hulu,
    Suantou,
    Guanyin,
    Yajishou,
    Jigang,
    Gaozu,
    Liulian,
    Zheyan,
    Kuikou,
    Bixi,
}

impl ShapePreset {
    pub const ALL: [ShapePreset; 12] = [
        Self::Meiping,
        Self::Yuhuchun,
        Self::Hulu,
        Self::Suantou,
        Self::Guanyin,
        Self::Yajishou,
        Self::Jigang,
        Self::Gaozu,
        Self::Liulian,
        Self::Zheyan,
        Self::Kuikou,
        Self::Bixi,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Meiping => "meiping",
            Self::Yuhuchun => "yuhuchun",
            Self::Hulu => "hulu",
            Self::Suantou => "suantou",
            Self::Guanyin => "guanyin",
            Self::Yajishou => "yajishou",
            Self::Jigang => "jigang",
            Self::Gaozu => "gaozu",
            Self::Liulian => "liulian",
            Self::Zheyan => "zheyan",
            Self::Kuikou => "kuikou",
            Self::Bixi => "bixi",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Meiping => "Plum Vase",
            Self::Yuhuchun => "Pear-Shaped Vase",
            Self::Hulu => "Gourd Vase",
            Self::Suantou => "Garlic-Head Vase",
            Self::Guanyin => "Guanyin Vase",
            Self::Yajishou => "Pressed-Hand Cup",
            Self::Jigang => "Chicken Cup",
            Self::Gaozu => "Stem Cup",
            Self::Liulian => "Lotus Cup",
            Self::Zheyan => "Folded-Rim Plate",
            Self::Kuikou => "Foliate Plate",
            Self::Bixi => "Brush Washer",
        }
    }

    pub fn category(self) -> ShapeCategory {
        match self {
            Self::Meiping | Self::Yuhuchun | Self::Hulu | Self::Suantou | Self::Guanyin => {
                ShapeCategory::Bottle
            }
            Self::Yajishou | Self::Jigang | Self::Gaozu | Self::Liulian => ShapeCategory::Cup,
            Self::Zheyan | Self::Kuikou | Self::Bixi => ShapeCategory::Plate,
        }
    }

    pub fn height_scale(self) -> f64 {
        match self {
            Self::Meiping | Self::Yuhuchun | Self::Hulu | Self::Suantou | Self::Guanyin => 1.0,
            Self::Yajishou | Self::Liulian => 0.4,
            Self::Jigang => 0.3,
            Self::Gaozu => 0.5,
            Self::Zheyan => 0.25,
            Self::Kuikou => 0.15,
            Self::Bixi => 0.2,
        }
    }

    pub fn radius_scale(self) -> f64 {
        match self {
            Self::Meiping | Self::Hulu | Self::Guanyin | Self::Gaozu | Self::Liulian => 1.0,
            Self::Yuhuchun | Self::Suantou => 0.9,
            Self::Yajishou => 1.1,
            Self::Jigang => 1.2,
            Self::Zheyan => 1.8,
            Self::Kuikou => 2.0,
            Self::Bixi => 1.5,
        }
    }

    /// Relative radius at normalized height `y`.
    pub fn radius(self, y: f64) -> f64 {
        match self {
            Self::Meiping => {
                if y >= 0.86 {
                    0.38
                } else if y >= 0.72 {
                    0.38 + 0.14 * (1.0 - (y - 0.72) / 0.14)
                } else {
                    let shoulder = if y > 0.58 {
                        -((y - 0.58) / 0.28).powf(1.6) * 0.38
                    } else {
                        0.0
                    };
                    0.42 + (y * PI).sin() * 0.48 + shoulder
                }
            }
            Self::Yuhuchun => 0.4 + y.powf(1.5) * 0.8 - (2.0 * PI * y).sin() * 0.15,
            Self::Hulu => {
                let bulb = if y < 0.45 {
                    (y / 0.45 * PI).sin() * 0.5
                } else {
                    ((y - 0.45) / 0.55 * PI).sin() * 0.4
                };
                0.3 + bulb
            }
            Self::Suantou => {
                if y > 0.85 {
                    0.3 + ((y - 0.85) * 20.0).sin() * 0.1
                } else {
                    0.4 + (y * PI).sin() * 0.5
                }
            }
            Self::Guanyin => 0.5 + (0.8 * PI * y).sin() * 0.5 + 0.2 * y,
            Self::Yajishou => 0.3 + 0.8 * y,
            Self::Jigang => 0.4 + y.sqrt() * 0.8,
            Self::Gaozu => {
                if y < 0.4 {
                    0.15
                } else {
                    0.2 + (y - 0.4) * 1.5
                }
            }
            Self::Liulian => 0.3 + 0.6 * y,
            Self::Zheyan => {
                if y > 0.8 {
                    1.0 + (y - 0.8) * 2.0
                } else {
                    0.5 + 0.5 * y
                }
            }
            Self::Kuikou => 0.3 + y.powf(0.3) * 1.5,
            Self::Bixi => 0.8 + (y * PI).sin() * 0.2,
        }
    }

    /// Looks a preset up by id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clay_mesh::{ShapeCategory, ShapePreset};
    ///
    /// let preset = ShapePreset::from_id("hulu").unwrap();
    /// assert_eq!(preset.category(), ShapeCategory::Bottle);
    /// assert!(ShapePreset::from_id("teapot").is_err());
    /// ```
    pub fn from_id(id: &str) -> ClayResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| ClayError::unknown_shape(id))
    }

    /// Morph target for this preset.
    pub fn target(self) -> TargetShape {
        TargetShape::new(self.id(), self, self.height_scale(), self.radius_scale())
    }
}

impl RadiusProfile for ShapePreset {
    #[inline]
    fn radius_at(&self, normalized_height: f64) -> f64 {
        self.radius(normalized_height)
    }
}

/// Presets of one category, in catalog order.
pub fn presets_in(category: ShapeCategory) -> impl Iterator<Item = ShapePreset> {
    ShapePreset::ALL
        .into_iter()
        .filter(move |p| p.category() == category)
}
