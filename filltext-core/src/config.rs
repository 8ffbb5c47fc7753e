//! Generator, validation and layout configuration.
//!
//! Every section deserializes with defaults, so a config file only needs the
//! keys it changes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::assemble::DEFAULT_MIN_FRAGMENT_CHARS;
use crate::direction::DEFAULT_RTL_THRESHOLD;
use crate::Shape;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// Assembler and direction settings.
    pub generator: GeneratorConfig,
    /// List validation settings.
    pub validation: ValidationConfig,
    /// Style hints sent to the canvas.
    pub layout: LayoutConfig,
    /// Accepted length range per shape.
    pub lengths: LengthLimits,
}

impl FillConfig {
    /// Parse a JSON config.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Assembler settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Sentence fragments shorter than this are dropped.
    pub min_fragment_chars: usize,
    /// Arabic letter fraction at which text is treated as right to left.
    pub rtl_threshold: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_fragment_chars: DEFAULT_MIN_FRAGMENT_CHARS,
            rtl_threshold: DEFAULT_RTL_THRESHOLD,
        }
    }
}

/// Bounded regeneration settings for lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Failed validations before giving up.
    pub max_attempts: u32,
    /// Delay before a regeneration, in milliseconds.
    pub retry_delay_ms: u64,
    /// Allowed item-count error as a fraction of the target.
    pub tolerance_ratio: f64,
    /// Allowed item-count error regardless of the target.
    pub min_tolerance: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay_ms: 500,
            tolerance_ratio: 0.1,
            min_tolerance: 1,
        }
    }
}

impl ValidationConfig {
    /// Delay before a regeneration.
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Allowed difference between produced and requested item counts.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn tolerance(&self, target: usize) -> usize {
        let scaled = (target as f64 * self.tolerance_ratio).floor() as usize;
        scaled.max(self.min_tolerance)
    }
}

/// Style hint values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Fixed text box width in pixels.
    pub max_width: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    /// Paragraph indent for lists.
    pub list_indent: f32,
    /// Paragraph spacing for lists.
    pub list_spacing: f32,
    /// Estimated line count above which a commit warns.
    pub long_content_lines: usize,
    /// Average glyph width used for line estimates.
    pub px_per_char: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: 650.0,
            line_height: 1.5,
            list_indent: 20.0,
            list_spacing: 10.0,
            long_content_lines: 10,
            px_per_char: 8.0,
        }
    }
}

/// Inclusive range and default for one shape's length control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    /// Smallest value.
    pub min: usize,
    /// Largest value.
    pub max: usize,
    /// Value selected when switching to the shape.
    pub default: usize,
}

impl LengthRange {
    /// Clamp `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: usize) -> usize {
        value.clamp(self.min, self.max.max(self.min))
    }
}

/// Length control ranges.
///
/// Each range may be given partially; missing bounds keep the shape's
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LengthOverrides")]
pub struct LengthLimits {
    /// Heading words.
    pub heading: LengthRange,
    /// Paragraph sentences.
    pub paragraph: LengthRange,
    /// List items.
    pub list: LengthRange,
}

impl Default for LengthLimits {
    fn default() -> Self {
        Self {
            heading: LengthRange {
                min: 1,
                max: 10,
                default: 5,
            },
            paragraph: LengthRange {
                min: 1,
                max: 30,
                default: 1,
            },
            list: LengthRange {
                min: 3,
                max: 10,
                default: 5,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RangeOverride {
    min: Option<usize>,
    max: Option<usize>,
    default: Option<usize>,
}

impl RangeOverride {
    fn apply(self, base: LengthRange) -> LengthRange {
        LengthRange {
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
            default: self.default.unwrap_or(base.default),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LengthOverrides {
    heading: RangeOverride,
    paragraph: RangeOverride,
    list: RangeOverride,
}

impl From<LengthOverrides> for LengthLimits {
    fn from(overrides: LengthOverrides) -> Self {
        let base = Self::default();
        Self {
            heading: overrides.heading.apply(base.heading),
            paragraph: overrides.paragraph.apply(base.paragraph),
            list: overrides.list.apply(base.list),
        }
    }
}

impl LengthLimits {
    /// Range for a shape.
    #[must_use]
    pub const fn for_shape(&self, shape: Shape) -> LengthRange {
        match shape {
            Shape::Heading => self.heading,
            Shape::Paragraph => self.paragraph,
            Shape::List => self.list,
        }
    }
}
