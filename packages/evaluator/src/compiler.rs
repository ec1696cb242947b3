//! Compiler adapter: source text in, invocable render function out.
//!
//! `compile` performs the whole lowering in one deterministic step: parse,
//! resolve the default export, and wrap the exported component's body. Each
//! call is independent; nothing is retained between compilations. Invoking
//! the artifact is the trust boundary: any evaluation failure surfaces as
//! a `CompileError` and never escapes further.

use crate::dom::{Mount, NodeId};
use crate::interpreter::{EvalError, Interpreter};
use sketchpad_parser::ast::ComponentFn;
use sketchpad_parser::{parse, ParseError};
use thiserror::Error;
use tracing::debug;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] ParseError),

    #[error("No default export found in source")]
    MissingDefaultExport,

    #[error("Default export '{name}' does not match any component")]
    UnknownComponent { name: String },

    #[error("Render failed: {0}")]
    Eval(#[from] EvalError),
}

/// Compiled, invocable artifact. Pure with respect to its inputs: rendering
/// twice into fresh mounts produces identical trees.
#[derive(Debug, Clone)]
pub struct RenderFunction {
    component: ComponentFn,
}

impl RenderFunction {
    pub fn name(&self) -> &str {
        &self.component.name
    }

    /// Invoke the compiled component once, building its tree into `mount`
    /// and registering the produced root. The mount handle is the single
    /// capability the compiled source is granted.
    ///
    /// On failure the mount is cleared so no partially built nodes leak
    /// into the caller's view.
    pub fn render(&self, mount: &mut Mount) -> CompileResult<NodeId> {
        match Interpreter::new(mount).evaluate(&self.component.body) {
            Ok(root) => {
                mount.push_root(root);
                debug!(component = %self.component.name, nodes = mount.len(), "rendered");
                Ok(root)
            }
            Err(err) => {
                mount.clear();
                Err(err.into())
            }
        }
    }
}

/// Compile source text into a render function
pub fn compile(source: &str) -> CompileResult<RenderFunction> {
    let module = parse(source)?;

    let name = module
        .default_export
        .clone()
        .ok_or(CompileError::MissingDefaultExport)?;

    let component = module
        .component(&name)
        .cloned()
        .ok_or(CompileError::UnknownComponent { name })?;

    debug!(component = %component.name, "compiled");
    Ok(RenderFunction { component })
}
