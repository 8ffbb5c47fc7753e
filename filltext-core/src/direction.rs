//! Text direction detection.
//!
//! Direction defaults from the UI language; for non-Arabic UI languages the
//! generated text is inspected so mixed or Arabic content still lays out
//! right-to-left.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FillError, Language};

/// Fraction of Arabic letters at which text counts as Arabic.
pub const DEFAULT_RTL_THRESHOLD: f64 = 0.3;

/// Arabic, Arabic Supplement, Extended-A and Presentation Forms A/B.
const ARABIC_RANGES: [(u32, u32); 5] = [
    (0x0600, 0x06FF),
    (0x0750, 0x077F),
    (0x08A0, 0x08FF),
    (0xFB50, 0xFDFF),
    (0xFE70, 0xFEFF),
];

/// Layout direction of a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// Default direction for a UI language.
    #[must_use]
    pub const fn for_language(language: Language) -> Self {
        match language {
            Language::Arabic => Direction::Rtl,
            Language::English => Direction::Ltr,
        }
    }

    /// Horizontal alignment matching this direction.
    #[must_use]
    pub const fn alignment(self) -> TextAlign {
        match self {
            Direction::Ltr => TextAlign::Left,
            Direction::Rtl => TextAlign::Right,
        }
    }

    /// Whether this is right to left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        })
    }
}

impl FromStr for Direction {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(Direction::Ltr),
            "rtl" => Ok(Direction::Rtl),
            _ => Err(FillError::UnknownDirection(s.to_string())),
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Flush right.
    Right,
}

/// Whether a character falls in one of the Arabic Unicode blocks.
#[must_use]
pub fn is_arabic_char(c: char) -> bool {
    let code = u32::from(c);
    ARABIC_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

/// Whether any character of `text` is Arabic.
#[must_use]
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}

/// Whether Arabic letters make up at least `threshold` of the text.
///
/// Whitespace and ASCII punctuation are ignored. Empty input is never Arabic.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn is_predominantly_arabic(text: &str, threshold: f64) -> bool {
    let (arabic, total) = text
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_ascii_punctuation())
        .fold((0usize, 0usize), |(arabic, total), c| {
            (arabic + usize::from(is_arabic_char(c)), total + 1)
        });
    if total == 0 {
        return false;
    }
    arabic as f64 / total as f64 >= threshold
}

/// Classify text by content alone.
#[must_use]
pub fn detect_direction(text: &str) -> Direction {
    detect_direction_with(text, DEFAULT_RTL_THRESHOLD)
}

/// Classify text by content with a custom threshold.
#[must_use]
pub fn detect_direction_with(text: &str, threshold: f64) -> Direction {
    if is_predominantly_arabic(text, threshold) {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}

/// Direction for generated `text` shown in a `language` UI.
///
/// An Arabic UI is always right to left; any other UI language falls back to
/// inspecting the text.
#[must_use]
pub fn resolve_direction(language: Language, text: &str, threshold: f64) -> Direction {
    match Direction::for_language(language) {
        Direction::Rtl => Direction::Rtl,
        Direction::Ltr => detect_direction_with(text, threshold),
    }
}
