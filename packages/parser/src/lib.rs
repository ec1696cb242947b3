pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ParseError, ParseResult};
pub use lexer::{tokenize, Token};
pub use parser::{parse, Parser};

#[cfg(feature = "pretty-errors")]
pub use error::format_error;
