//! # Sketchpad Evaluator
//!
//! Compiles component source into a render function and evaluates it into a
//! rendered node tree.
//!
//! ```text
//! source text ──parse──▶ AST ──compile──▶ RenderFunction
//!                                              │ render(&mut Mount)
//!                                              ▼
//!                                    arena of RenderedNodes
//! ```
//!
//! ## Determinism
//!
//! Compilation and rendering are pure: the same source always produces the
//! same tree, and neither step retains state between calls. The render
//! artifact holds only the lowered AST of the default-exported component.
//!
//! ## Trust boundary
//!
//! User source is never executed as host code. The compiled body is a
//! tagged AST walked by a small interpreter whose only capability is the
//! mount handle passed in explicitly; every failure inside that walk is
//! caught and reported as a `CompileError`.

pub mod compiler;
pub mod dom;
pub mod interpreter;

pub use compiler::{compile, CompileError, CompileResult, RenderFunction};
pub use dom::{Mount, NodeId, RenderedNode};
pub use interpreter::{EvalError, EvalResult, Interpreter};
