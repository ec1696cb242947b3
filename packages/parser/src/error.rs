//! Error types for the mini-syntax parser

use crate::ast::Span;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected token at {pos}: expected {expected}, found {found}")]
    UnexpectedToken {
        pos: usize,
        expected: String,
        found: String,
    },

    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Invalid syntax at {pos}: {message}")]
    InvalidSyntax { pos: usize, message: String },
}

impl ParseError {
    pub fn unexpected_token(
        pos: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::UnexpectedToken {
            pos,
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn unexpected_eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }

    pub fn invalid_syntax(pos: usize, message: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            pos,
            message: message.into(),
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnexpectedToken { pos, .. } => Some(Span::new(*pos, *pos + 1)),
            ParseError::UnexpectedEof { .. } => None,
            ParseError::InvalidSyntax { pos, .. } => Some(Span::new(*pos, *pos + 1)),
        }
    }
}

/// Pretty-print an error with source context using ariadne
#[cfg(feature = "pretty-errors")]
pub fn format_error(source: &str, filename: &str, error: &ParseError) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let span = error.span().unwrap_or(Span {
        start: source.len().saturating_sub(1),
        end: source.len(),
    });

    let mut output = Vec::new();
    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, span.start..span.end))
                .with_color(Color::Red)
                .with_message(match error {
                    ParseError::UnexpectedToken { expected, .. } => {
                        format!("expected {}", expected)
                    }
                    ParseError::UnexpectedEof { expected } => format!("expected {}", expected),
                    ParseError::InvalidSyntax { message, .. } => message.clone(),
                }),
        )
        .finish();

    report
        .write((filename, Source::from(source)), &mut output)
        .ok();

    String::from_utf8(output).unwrap_or_else(|_| error.to_string())
}
