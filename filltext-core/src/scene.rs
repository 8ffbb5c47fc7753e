//! The canvas host boundary and an in-memory scene implementing it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{CommitError, FillError, FillResult, Node, NodeId, StyleHints};

/// Node and attribute API of the design tool hosting the generator.
///
/// The generator only needs to know whether a call succeeded.
pub trait CanvasHost {
    /// Create a text node.
    ///
    /// # Errors
    ///
    /// Returns a [`CommitError`] if the host refuses to create the node.
    fn commit_text(&mut self, text: &str, style: &StyleHints) -> Result<NodeId, CommitError>;

    /// Replace the text and style of an existing text node.
    ///
    /// # Errors
    ///
    /// Returns a [`CommitError`] if the node is missing or the host refuses
    /// the update.
    fn update_text(&mut self, id: NodeId, text: &str, style: &StyleHints)
        -> Result<(), CommitError>;

    /// Currently selected text nodes.
    fn selected_text_nodes(&self) -> Vec<NodeId>;
}

/// A scene containing canvas nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// All nodes in the scene, indexed by ID.
    nodes: HashMap<NodeId, Node>,
    /// Insertion order.
    order: Vec<NodeId>,
    /// Currently selected node IDs.
    selected: Vec<NodeId>,
}

impl Scene {
    /// Create a new empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.order.push(id);
        self.nodes.insert(id, node);
        id
    }

    /// Get a node by ID.
    #[must_use]
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Select a node.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not found.
    pub fn select(&mut self, id: NodeId) -> Result<(), CommitError> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(CommitError::NodeNotFound(id))?;
        node.selected = true;
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
        Ok(())
    }

    /// Currently selected nodes.
    pub fn selected_nodes(&self) -> impl Iterator<Item = &Node> {
        self.selected.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Number of nodes in the scene.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Serialize the scene to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> FillResult<String> {
        serde_json::to_string_pretty(self).map_err(FillError::Serialization)
    }

    /// Deserialize a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> FillResult<Self> {
        serde_json::from_str(json).map_err(FillError::Serialization)
    }
}

impl CanvasHost for Scene {
    fn commit_text(&mut self, text: &str, style: &StyleHints) -> Result<NodeId, CommitError> {
        let id = self.add_node(Node::text(text, *style));
        tracing::info!(node = %id, chars = text.chars().count(), "Text node created");
        Ok(id)
    }

    fn update_text(
        &mut self,
        id: NodeId,
        text: &str,
        style: &StyleHints,
    ) -> Result<(), CommitError> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(CommitError::NodeNotFound(id))?;
        node.content = text.to_string();
        node.style = *style;
        tracing::info!(node = %id, "Text node updated");
        Ok(())
    }

    fn selected_text_nodes(&self) -> Vec<NodeId> {
        self.selected_nodes().map(|node| node.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Shape, TextAlign};

    fn hints() -> StyleHints {
        StyleHints {
            max_width: 650.0,
            line_height: 1.5,
            direction: Direction::Ltr,
            text_align: TextAlign::Left,
            shape: Shape::Paragraph,
            list_formatting: None,
        }
    }

    #[test]
    fn test_commit_appends_node() {
        let mut scene = Scene::new();
        assert_eq!(scene.node_count(), 0);

        let id = scene.commit_text("Hello", &hints()).expect("commit");
        assert_eq!(scene.node_count(), 1);
        let node = scene.get_node(id).expect("node");
        assert_eq!(node.content, "Hello");
        assert!(!node.selected);
    }

    #[test]
    fn test_update_text_node() {
        let mut scene = Scene::new();
        let id = scene.commit_text("Old", &hints()).expect("commit");
        let mut rtl = hints();
        rtl.direction = Direction::Rtl;
        rtl.text_align = TextAlign::Right;
        scene.update_text(id, "New", &rtl).expect("update");

        let node = scene.get_node(id).expect("node");
        assert_eq!(node.content, "New");
        assert_eq!(node.style.text_align, TextAlign::Right);
    }

    #[test]
    fn test_update_missing_node() {
        let mut scene = Scene::new();
        let missing = NodeId::new();
        assert_eq!(
            scene.update_text(missing, "x", &hints()),
            Err(CommitError::NodeNotFound(missing))
        );
    }

    #[test]
    fn test_selection() {
        let mut scene = Scene::new();
        let first = scene.commit_text("A", &hints()).expect("commit");
        let second = scene.commit_text("B", &hints()).expect("commit");
        assert!(scene.selected_text_nodes().is_empty());

        scene.select(second).expect("select");
        scene.select(second).expect("select twice");
        assert_eq!(scene.selected_text_nodes(), vec![second]);
        assert!(scene.get_node(second).expect("node").selected);
        assert!(!scene.get_node(first).expect("node").selected);
        assert!(matches!(
            scene.select(NodeId::new()),
            Err(CommitError::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let mut scene = Scene::new();
        let first = scene.commit_text("First", &hints()).expect("commit");
        let second = scene.commit_text("Second", &hints()).expect("commit");
        let json = scene.to_json().expect("serialize");
        let restored = Scene::from_json(&json).expect("deserialize");
        let ids: Vec<NodeId> = restored.nodes().map(|node| node.id).collect();
        assert_eq!(ids, vec![first, second]);
    }
}
