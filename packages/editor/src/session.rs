//! # Editor Session
//!
//! Orchestrates the editing loop: owns the current source text, rebuilds the
//! rendered tree on every source change, tracks the single selected node and
//! its editable snapshot, writes edits through to the live tree, and emits
//! serialized source on save.
//!
//! ```text
//! compile_and_render ──▶ Mount rebuilt, state = Empty
//! select(id)         ──▶ state = Selected, snapshot mirrors the node
//! edit(..)           ──▶ node and snapshot updated together
//! save()             ──▶ serialized source handed to the on_save callback
//! ```
//!
//! Compilation failures are reported and leave the preview cleared; they
//! never corrupt the session.

use crate::errors::EditorError;
use crate::selection::SelectionController;
use crate::serializer::serialize;
use sketchpad_evaluator::{compile, Mount, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Font weight values exposed to the editing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }

    fn from_style(value: &str) -> Self {
        match value {
            "bold" => FontWeight::Bold,
            _ => FontWeight::Normal,
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mirror of the selected node's editable fields. Exists iff a node is
/// selected, and stays consistent with the live node in both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableSnapshot {
    pub text: String,
    pub color: String,
    pub font_size: u32,
    pub font_weight: FontWeight,
}

/// One property edit applied to the selected node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Edit {
    /// Replace the node's text content
    Text(String),

    /// Hex color string (e.g. "#ff0000")
    Color(String),

    /// Positive integer, pixels. Written to the node with a px suffix,
    /// stored unitless in the snapshot.
    FontSize(u32),

    FontWeight(FontWeight),
}

/// Live editing session over one component source snippet
#[derive(Default)]
pub struct EditorSession {
    source: String,
    mount: Mount,
    controller: SelectionController,
    selection: Option<NodeId>,
    snapshot: Option<EditableSnapshot>,
    on_save: Option<Box<dyn FnMut(&str)>>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback that receives serialized source on save
    pub fn on_save(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_save = Some(Box::new(callback));
    }

    /// Register the callback fired when selection changes
    pub fn on_select(&mut self, callback: impl FnMut(NodeId) + 'static) {
        self.controller.on_select(callback);
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    pub fn snapshot(&self) -> Option<&EditableSnapshot> {
        self.snapshot.as_ref()
    }

    /// Recompile and re-render from new source text.
    ///
    /// Re-entrant from any state: the previous tree and selection are always
    /// discarded first. On failure the mount stays empty, the error is
    /// reported, and the session remains usable.
    pub fn compile_and_render(&mut self, source: &str) -> Result<NodeId, EditorError> {
        self.mount.clear();
        self.selection = None;
        self.snapshot = None;
        self.source = source.to_string();

        let render_fn = compile(source).map_err(|err| {
            error!(%err, "compilation failed");
            EditorError::Compile(err)
        })?;

        let root = render_fn.render(&mut self.mount).map_err(|err| {
            error!(%err, "render failed");
            EditorError::Compile(err)
        })?;

        debug!(nodes = self.mount.len(), "preview rebuilt");
        Ok(root)
    }

    /// Select a rendered node, loading its live values into the snapshot.
    /// Activations that resolve to a text leaf change nothing.
    pub fn select(&mut self, id: NodeId) -> Option<&EditableSnapshot> {
        let selected = self.controller.activate(&mut self.mount, id)?;

        let styles = self.mount.styles(selected)?;
        let snapshot = EditableSnapshot {
            text: self.mount.text_content(selected),
            color: styles
                .get("color")
                .cloned()
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            font_size: styles
                .get("fontSize")
                .and_then(|v| v.trim_end_matches("px").parse().ok())
                .unwrap_or(DEFAULT_FONT_SIZE),
            font_weight: styles
                .get("fontWeight")
                .map(|v| FontWeight::from_style(v))
                .unwrap_or_default(),
        };

        self.selection = Some(selected);
        self.snapshot = Some(snapshot);
        self.snapshot.as_ref()
    }

    /// Apply one property edit to the selected node and its snapshot
    pub fn edit(&mut self, edit: Edit) -> Result<(), EditorError> {
        let id = self.selection.ok_or(EditorError::NoSelection)?;
        let snapshot = self.snapshot.as_mut().ok_or(EditorError::NoSelection)?;

        match edit {
            Edit::Text(value) => {
                self.mount.set_text_content(id, value.as_str());
                snapshot.text = value;
            }
            Edit::Color(value) => {
                if !is_hex_color(&value) {
                    return Err(EditorError::InvalidValue(format!(
                        "'{}' is not a hex color",
                        value
                    )));
                }
                self.mount.set_style(id, "color", value.as_str());
                snapshot.color = value;
            }
            Edit::FontSize(size) => {
                if size == 0 {
                    return Err(EditorError::InvalidValue(
                        "font size must be a positive integer".to_string(),
                    ));
                }
                self.mount.set_style(id, "fontSize", format!("{}px", size));
                snapshot.font_size = size;
            }
            Edit::FontWeight(weight) => {
                self.mount.set_style(id, "fontWeight", weight.as_str());
                snapshot.font_weight = weight;
            }
        }

        debug!(?id, "edit applied");
        Ok(())
    }

    /// Serialize the rendered tree and hand it to the save callback.
    ///
    /// Requires exactly one top-level node: an empty mount is
    /// `NoRenderedTree`, several roots are rejected rather than silently
    /// truncated. No state transition.
    pub fn save(&mut self) -> Result<String, EditorError> {
        let root = match self.mount.roots() {
            [] => return Err(EditorError::NoRenderedTree),
            [root] => *root,
            roots => return Err(EditorError::MultipleRoots(roots.len())),
        };

        let jsx = serialize(&self.mount, root);
        if let Some(callback) = &mut self.on_save {
            callback(&jsx);
        }
        Ok(jsx)
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
