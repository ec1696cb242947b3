//! Lexer for the component mini-syntax using logos
//!
//! Logos provides extremely fast lexing via compile-time DFA generation.
//! JSX text content is not tokenized here: the parser reconstructs raw text
//! runs from token spans, so any character sequence must lex to *something*.
//! Characters with no dedicated token fall through to `Token::Unknown`.

use logos::Logos;

/// Token types for the mini-syntax
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace
pub enum Token<'src> {
    // Keywords
    #[token("function")]
    Function,
    #[token("return")]
    Return,
    #[token("export")]
    Export,
    #[token("default")]
    Default,
    #[token("const")]
    Const,
    #[token("interface")]
    Interface,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // Identifiers
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice())]
    Ident(&'src str),

    // Literals
    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        &s[1..s.len()-1]  // Strip quotes
    })]
    String(&'src str),

    #[regex(r"'([^'\\]|\\.)*'", |lex| {
        let s = lex.slice();
        &s[1..s.len()-1]  // Strip quotes
    })]
    SingleQuoteString(&'src str),

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice())]
    Number(&'src str),

    // Operators and punctuation
    #[token("=>")]
    FatArrow,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("/")]
    Slash,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,

    // Comments
    #[regex(r"//[^\n]*", |lex| lex.slice())]
    LineComment(&'src str),

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/", |lex| lex.slice())]
    BlockComment(&'src str),

    // Catch-all so arbitrary JSX text always lexes (lowest priority)
    #[regex(r"[^ \t\r\n]", |lex| lex.slice(), priority = 0)]
    Unknown(&'src str),
}

/// Lex source into tokens with byte spans.
///
/// Comments are dropped. A `//` inside a JSX text run also lexes as a line
/// comment; the parser recovers that text from the raw source, so dropping
/// the token here loses nothing. Characters logos cannot match are folded
/// into `Token::Unknown` so the output is total over any input string.
pub fn tokenize(source: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    Token::lexer(source)
        .spanned()
        .filter_map(|(result, span)| match result {
            Ok(Token::LineComment(_)) | Ok(Token::BlockComment(_)) => None,
            Ok(token) => Some((token, span)),
            Err(_) => Some((Token::Unknown(&source[span.clone()]), span)),
        })
        .collect()
}
