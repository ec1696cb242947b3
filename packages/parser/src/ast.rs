use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Span information for source location tracking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Root module node: one source snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub interfaces: Vec<InterfaceDecl>,
    pub components: Vec<ComponentFn>,
    pub default_export: Option<String>,
}

/// Interface declaration. Type-only, so the body is discarded during
/// lowering; only the name survives for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: String,
    pub span: Span,
}

/// A component definition (function or arrow form, lowered identically)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentFn {
    pub name: String,
    pub body: JsxNode,
    pub span: Span,
}

/// JSX node (render tree)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsxNode {
    /// HTML element (div, h1, etc.)
    Element {
        tag: String,
        attributes: HashMap<String, Expr>,
        children: Vec<JsxNode>,
        span: Span,
    },

    /// Raw text run
    Text { content: String, span: Span },

    /// Embedded expression child ({ expr })
    Expression { expr: Expr, span: Span },
}

/// Expression (used in attributes and embedded children)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    /// String literal
    Str { value: String, span: Span },

    /// Number literal
    Num { value: f64, span: Span },

    /// Boolean literal
    Bool { value: bool, span: Span },

    /// Variable reference
    Ident { name: String, span: Span },

    /// Member access (obj.prop)
    Member {
        object: Box<Expr>,
        property: String,
        span: Span,
    },

    /// Object literal ({ key: value, ... })
    Object {
        entries: Vec<(String, Expr)>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Str { span, .. }
            | Expr::Num { span, .. }
            | Expr::Bool { span, .. }
            | Expr::Ident { span, .. }
            | Expr::Member { span, .. }
            | Expr::Object { span, .. } => *span,
        }
    }
}

impl JsxNode {
    pub fn span(&self) -> Span {
        match self {
            JsxNode::Element { span, .. }
            | JsxNode::Text { span, .. }
            | JsxNode::Expression { span, .. } => *span,
        }
    }
}

impl Module {
    pub fn new() -> Self {
        Self {
            interfaces: Vec::new(),
            components: Vec::new(),
            default_export: None,
        }
    }

    /// Look up a component by name
    pub fn component(&self, name: &str) -> Option<&ComponentFn> {
        self.components.iter().find(|c| c.name == name)
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::new()
    }
}
