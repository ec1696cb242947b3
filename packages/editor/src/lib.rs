//! # Sketchpad Editor
//!
//! Live visual editing core over the compiler and evaluator.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: source → RenderFunction → Mount  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session lifecycle                   │
//! │  - Rebuild preview on every source change   │
//! │  - Single-node selection with highlight     │
//! │  - Snapshot-mirrored property edits         │
//! │  - Serialize tree back to source on save    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **The mount is rebuilt, never patched**: each source change discards
//!    the whole tree, so no reconciliation state exists to corrupt.
//! 2. **Snapshot mirrors the node**: the editable snapshot is loaded from
//!    live values on select and written through on every edit.
//! 3. **Failures stay at their boundary**: compile errors clear the preview
//!    and are reported; they never terminate the session.

mod errors;
mod selection;
mod serializer;
mod session;
mod style;

pub use errors::EditorError;
pub use selection::SelectionController;
pub use serializer::serialize;
pub use session::{
    Edit, EditableSnapshot, EditorSession, FontWeight, DEFAULT_COLOR, DEFAULT_FONT_SIZE,
};
pub use style::{format_style, parse_style, to_camel_case, to_kebab_case};

// Re-export the evaluator surface callers need alongside the session
pub use sketchpad_evaluator::{CompileError, Mount, NodeId, RenderedNode};
