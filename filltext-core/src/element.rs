//! Canvas nodes and the style hints attached to committed text.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::LayoutConfig;
use crate::{Direction, GeneratedContent, Shape, TextAlign};

/// Unique identifier for a canvas node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Create a new unique node ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extra paragraph formatting for numbered lists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListFormatting {
    /// Paragraph indent in pixels.
    pub paragraph_indent: f32,
    /// Space between items in pixels.
    pub paragraph_spacing: f32,
    /// Number markers sit on the right.
    pub rtl: bool,
}

/// Layout hints sent with text to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleHints {
    /// Fixed box width; height grows with the text.
    pub max_width: f32,
    /// Line height multiplier.
    pub line_height: f32,
    /// Writing direction.
    pub direction: Direction,
    /// Horizontal alignment.
    pub text_align: TextAlign,
    /// Shape the text was generated as.
    pub shape: Shape,
    /// Present only for lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_formatting: Option<ListFormatting>,
}

impl StyleHints {
    /// Hints for a piece of generated content.
    #[must_use]
    pub fn for_content(content: &GeneratedContent, layout: &LayoutConfig) -> Self {
        let list_formatting = (content.shape == Shape::List).then(|| ListFormatting {
            paragraph_indent: layout.list_indent,
            paragraph_spacing: layout.list_spacing,
            rtl: content.direction.is_rtl(),
        });
        Self {
            max_width: layout.max_width,
            line_height: layout.line_height,
            direction: content.direction,
            text_align: content.alignment(),
            shape: content.shape,
            list_formatting,
        }
    }
}

/// A text node on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Text content.
    pub content: String,
    /// Layout hints last applied.
    pub style: StyleHints,
    /// Whether this node is selected.
    pub selected: bool,
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(content: impl Into<String>, style: StyleHints) -> Self {
        Self {
            id: NodeId::new(),
            content: content.into(),
            style,
            selected: false,
        }
    }
}
