//! Serializer converts a rendered tree back to JSX-like source text.
//!
//! Post-order walk: children first, then the wrapping tags. Intentionally
//! lossy: only tag identity, text, child order, and the style mapping
//! survive. Text leaves are emitted verbatim, unescaped. Total over any
//! tree the renderer can produce; a dangling handle serializes to nothing.

use crate::style::format_style;
use sketchpad_evaluator::{Mount, NodeId, RenderedNode};

/// Serialize one node (and its subtree) to source text
pub fn serialize(mount: &Mount, id: NodeId) -> String {
    match mount.get(id) {
        None => String::new(),

        Some(RenderedNode::Text { content }) => content.clone(),

        Some(RenderedNode::Element {
            tag,
            styles,
            children,
            ..
        }) => {
            let inner: String = children.iter().map(|&child| serialize(mount, child)).collect();

            let style_attr = if styles.is_empty() {
                String::new()
            } else {
                format!(" style={{{{ {} }}}}", format_style(styles))
            };

            format!("<{}{}>{}</{}>", tag, style_attr, inner, tag)
        }
    }
}
