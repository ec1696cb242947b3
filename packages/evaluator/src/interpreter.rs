//! AST interpreter: evaluates a component's JSX body into a mount.
//!
//! This replaces dynamic evaluation of compiled source. Compiled code never
//! runs as host code; its tagged AST is walked directly, and the only
//! capability it receives is the mount handle passed in by the caller.
//! Components are invoked with no inputs, so every free identifier is an
//! evaluation error rather than a lookup into ambient scope.

use crate::dom::{Mount, NodeId, RenderedNode};
use sketchpad_parser::ast::{Expr, JsxNode, Span};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Unbound identifier '{name}' at {span:?}")]
    UnboundIdentifier { name: String, span: Span },

    #[error("Unsupported expression at {span:?}: {message}")]
    UnsupportedExpression { message: String, span: Span },

    #[error("Invalid style value for '{property}' at {span:?}: {message}")]
    InvalidStyleValue {
        property: String,
        message: String,
        span: Span,
    },
}

/// Style properties whose numeric values carry no length unit
fn is_unitless_property(name: &str) -> bool {
    matches!(
        name,
        "fontWeight"
            | "lineHeight"
            | "opacity"
            | "zIndex"
            | "flex"
            | "flexGrow"
            | "flexShrink"
            | "order"
            | "zoom"
    )
}

/// Render a numeric literal the way the source wrote it (no trailing `.0`)
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Walks a JSX body and allocates the rendered tree into a mount
pub struct Interpreter<'a> {
    mount: &'a mut Mount,
}

impl<'a> Interpreter<'a> {
    pub fn new(mount: &'a mut Mount) -> Self {
        Self { mount }
    }

    /// Evaluate one node, returning its handle
    pub fn evaluate(&mut self, node: &JsxNode) -> EvalResult<NodeId> {
        match node {
            JsxNode::Element {
                tag,
                attributes,
                children,
                ..
            } => {
                // Only the style attribute reaches the rendered model; the
                // tree intentionally keeps tag, styles, and children.
                let styles = match attributes.get("style") {
                    Some(expr) => self.evaluate_styles(expr)?,
                    None => HashMap::new(),
                };

                let mut child_ids = Vec::with_capacity(children.len());
                for child in children {
                    child_ids.push(self.evaluate(child)?);
                }

                debug!(tag = %tag, children = child_ids.len(), "rendered element");
                Ok(self.mount.alloc(RenderedNode::Element {
                    tag: tag.clone(),
                    styles,
                    children: child_ids,
                    selected: false,
                }))
            }

            JsxNode::Text { content, .. } => Ok(self.mount.alloc(RenderedNode::text(content))),

            JsxNode::Expression { expr, .. } => {
                let value = self.expression_value(expr)?;
                Ok(self.mount.alloc(RenderedNode::text(value)))
            }
        }
    }

    /// Evaluate a `style={{ ... }}` object into the property mapping.
    /// Numeric values are suffixed with `px` unless the property is
    /// unitless, matching how the original renderer stringified them.
    fn evaluate_styles(&self, expr: &Expr) -> EvalResult<HashMap<String, String>> {
        let entries = match expr {
            Expr::Object { entries, .. } => entries,
            other => {
                return Err(EvalError::UnsupportedExpression {
                    message: "style attribute expects an object literal".to_string(),
                    span: other.span(),
                });
            }
        };

        let mut styles = HashMap::with_capacity(entries.len());
        for (property, value) in entries {
            styles.insert(property.clone(), self.style_value(property, value)?);
        }
        Ok(styles)
    }

    fn style_value(&self, property: &str, expr: &Expr) -> EvalResult<String> {
        match expr {
            Expr::Str { value, .. } => Ok(value.clone()),
            Expr::Num { value, .. } => {
                let rendered = format_number(*value);
                if is_unitless_property(property) {
                    Ok(rendered)
                } else {
                    Ok(format!("{}px", rendered))
                }
            }
            Expr::Ident { name, span } => Err(EvalError::UnboundIdentifier {
                name: name.clone(),
                span: *span,
            }),
            other => Err(EvalError::InvalidStyleValue {
                property: property.to_string(),
                message: "expected a string or number literal".to_string(),
                span: other.span(),
            }),
        }
    }

    /// Evaluate an embedded expression child down to text
    fn expression_value(&self, expr: &Expr) -> EvalResult<String> {
        match expr {
            Expr::Str { value, .. } => Ok(value.clone()),
            Expr::Num { value, .. } => Ok(format_number(*value)),
            Expr::Bool { value, .. } => Ok(value.to_string()),
            Expr::Ident { name, span } => Err(EvalError::UnboundIdentifier {
                name: name.clone(),
                span: *span,
            }),
            Expr::Member { span, .. } => Err(EvalError::UnboundIdentifier {
                name: "member access".to_string(),
                span: *span,
            }),
            Expr::Object { span, .. } => Err(EvalError::UnsupportedExpression {
                message: "object literal is not renderable text".to_string(),
                span: *span,
            }),
        }
    }
}
