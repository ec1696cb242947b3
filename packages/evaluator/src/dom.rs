//! Rendered node tree held in an arena.
//!
//! The mount owns every node produced by one render pass and hands out
//! opaque `NodeId` handles instead of references. Selection is a flag on the
//! element record, so no live presentation layer is needed to test the
//! select/edit/serialize path. The whole arena is discarded and rebuilt on
//! every recompilation; nodes orphaned by edits are reclaimed then too.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque handle to a node inside a [`Mount`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

/// A node in the rendered output tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderedNode {
    /// HTML-like element (div, h1, etc.)
    Element {
        tag: String,
        styles: HashMap<String, String>,
        children: Vec<NodeId>,
        #[serde(default)]
        selected: bool,
    },

    /// Text leaf: raw content, no children, no style
    Text { content: String },
}

impl RenderedNode {
    pub fn element(tag: impl Into<String>) -> Self {
        RenderedNode::Element {
            tag: tag.into(),
            styles: HashMap::new(),
            children: Vec::new(),
            selected: false,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        RenderedNode::Text {
            content: content.into(),
        }
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let RenderedNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn is_element(&self) -> bool {
        matches!(self, RenderedNode::Element { .. })
    }
}

/// Mount point: arena owning the currently rendered tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mount {
    nodes: Vec<RenderedNode>,
    roots: Vec<NodeId>,
}

impl Mount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the entire tree (used before every re-render)
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn alloc(&mut self, node: RenderedNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&RenderedNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut RenderedNode> {
        self.nodes.get_mut(id.0)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn push_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }

    /// First top-level rendered node, if any
    pub fn first_root(&self) -> Option<NodeId> {
        self.roots.first().copied()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).map(RenderedNode::is_element).unwrap_or(false)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.get(id)? {
            RenderedNode::Element { tag, .. } => Some(tag),
            RenderedNode::Text { .. } => None,
        }
    }

    pub fn styles(&self, id: NodeId) -> Option<&HashMap<String, String>> {
        match self.get(id)? {
            RenderedNode::Element { styles, .. } => Some(styles),
            RenderedNode::Text { .. } => None,
        }
    }

    /// Set one style property on an element. Returns false for text leaves
    /// and dangling handles.
    pub fn set_style(&mut self, id: NodeId, key: impl Into<String>, value: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(RenderedNode::Element { styles, .. }) => {
                styles.insert(key.into(), value.into());
                true
            }
            _ => false,
        }
    }

    /// Concatenated text of the node's subtree, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.get(id) {
            Some(RenderedNode::Text { content }) => out.push_str(content),
            Some(RenderedNode::Element { children, .. }) => {
                for &child in children {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    /// Replace an element's children with a single text leaf. The previous
    /// children stay in the arena unreferenced until the next rebuild.
    pub fn set_text_content(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        if !self.is_element(id) {
            return false;
        }
        let leaf = self.alloc(RenderedNode::text(text));
        match self.get_mut(id) {
            Some(RenderedNode::Element { children, .. }) => {
                children.clear();
                children.push(leaf);
                true
            }
            _ => false,
        }
    }

    /// Remove the selection marker from every node in the tree
    pub fn clear_selection(&mut self) {
        for node in &mut self.nodes {
            if let RenderedNode::Element { selected, .. } = node {
                *selected = false;
            }
        }
    }

    /// Mark one element as selected. Returns false for text leaves.
    pub fn set_selected(&mut self, id: NodeId) -> bool {
        match self.get_mut(id) {
            Some(RenderedNode::Element { selected, .. }) => {
                *selected = true;
                true
            }
            _ => false,
        }
    }

    /// The currently marked node, if any
    pub fn selected(&self) -> Option<NodeId> {
        self.node_ids().find(|id| {
            matches!(
                self.get(*id),
                Some(RenderedNode::Element { selected: true, .. })
            )
        })
    }

    /// Children of an element node
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.get(id) {
            Some(RenderedNode::Element { children, .. }) => children,
            _ => &[],
        }
    }
}
