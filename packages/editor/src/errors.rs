//! Error types for the editor

use sketchpad_evaluator::CompileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("No element is selected")]
    NoSelection,

    #[error("Nothing has been rendered")]
    NoRenderedTree,

    #[error("Component rendered {0} top-level nodes; save requires exactly one root")]
    MultipleRoots(usize),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
