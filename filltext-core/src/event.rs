//! Control events coming in from the panel and notices going back out.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Category, Direction, Language, Shape};

/// A user action on the generator panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ControlEvent {
    /// Regenerate with the current settings.
    Generate,
    /// Switch shape; the length resets to the shape default.
    SetShape(Shape),
    /// Switch category; the length resets to the shape default.
    SetCategory(Category),
    /// Switch language; the direction resets to the language default and
    /// the length to the shape default.
    SetLanguage(Language),
    /// Move the length control. Out-of-range values are clamped.
    SetLength(usize),
    /// Force or clear a direction override.
    SetDirection(Option<Direction>),
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Informational.
    Info,
    /// Something was accepted that is not quite what was asked for.
    Warning,
    /// An operation failed.
    Error,
}

/// A non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The list validator gave up and kept the last list.
    ListBestEffort {
        /// Items requested.
        expected: usize,
        /// Items in the kept list.
        found: usize,
    },
    /// Committed text is likely taller than the canvas frame.
    LongContent {
        /// Estimated rendered lines.
        estimated_lines: usize,
    },
    /// The canvas refused a create or update.
    CommitFailed {
        /// Error reported by the canvas.
        reason: String,
    },
    /// Text was committed.
    Committed {
        /// Nodes created or updated.
        nodes: usize,
    },
}

impl Notice {
    /// Severity.
    #[must_use]
    pub const fn level(&self) -> NoticeLevel {
        match self {
            Notice::ListBestEffort { .. } | Notice::LongContent { .. } => NoticeLevel::Warning,
            Notice::CommitFailed { .. } => NoticeLevel::Error,
            Notice::Committed { .. } => NoticeLevel::Info,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ListBestEffort { expected, found } => write!(
                f,
                "Unable to generate exact item count after multiple attempts. \
                 Using best match ({found} of {expected} items)."
            ),
            Notice::LongContent { estimated_lines } => write!(
                f,
                "Generated text is long (about {estimated_lines} lines) and may overflow."
            ),
            Notice::CommitFailed { reason } => write!(f, "Error adding text to canvas: {reason}"),
            Notice::Committed { nodes } => write!(f, "Text added to {nodes} node(s)."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_levels() {
        let notice = Notice::ListBestEffort {
            expected: 5,
            found: 3,
        };
        assert_eq!(notice.level(), NoticeLevel::Warning);
        assert!(notice.to_string().contains("3 of 5"));
        assert_eq!(
            Notice::CommitFailed {
                reason: "boom".into()
            }
            .level(),
            NoticeLevel::Error
        );
    }

    #[test]
    fn test_control_event_json() {
        let event: ControlEvent =
            serde_json::from_str(r#"{"type": "set_shape", "value": "list"}"#).expect("parse");
        assert_eq!(event, ControlEvent::SetShape(Shape::List));
        let event: ControlEvent = serde_json::from_str(r#"{"type": "generate"}"#).expect("parse");
        assert_eq!(event, ControlEvent::Generate);
    }
}
