use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{tokenize, Token};
use std::collections::HashMap;
use std::ops::Range;

/// Recursive-descent parser for the component mini-syntax.
///
/// The grammar is a small TSX subset: function or arrow component
/// definitions, `interface` declarations, a default export, and a JSX body
/// with expression attributes and embedded expression children. Type
/// annotations are parsed and discarded so the lowered module carries no
/// syntax sugar.
///
/// JSX text runs are reconstructed from the raw source between the run's
/// first token and the terminating `<` or `{` rather than being token types
/// of their own, which keeps the lexer context-free. Leading whitespace
/// falls outside the first token span and trailing whitespace is trimmed,
/// matching JSX semantics.
pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<(Token<'src>, Range<usize>)>,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let tokens = tokenize(source);
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    /// Parse a complete module
    pub fn parse_module(&mut self) -> ParseResult<Module> {
        let mut module = Module::new();

        while !self.is_at_end() {
            match self.peek_token() {
                Some(Token::Interface) => {
                    module.interfaces.push(self.parse_interface()?);
                }
                Some(Token::Function) => {
                    module.components.push(self.parse_function_component()?);
                }
                Some(Token::Const) => {
                    module.components.push(self.parse_arrow_component()?);
                }
                Some(Token::Export) => {
                    self.parse_export(&mut module)?;
                }
                _ => {
                    return Err(ParseError::invalid_syntax(
                        self.current_pos(),
                        format!("Unexpected token: {:?}", self.peek_token()),
                    ));
                }
            }
        }

        Ok(module)
    }

    /// Parse `export default Name;` or `export default function Name() {...}`
    fn parse_export(&mut self, module: &mut Module) -> ParseResult<()> {
        let pos = self.current_pos();
        self.expect(Token::Export, "'export'")?;
        self.expect(Token::Default, "'default'")?;

        if module.default_export.is_some() {
            return Err(ParseError::invalid_syntax(pos, "Duplicate default export"));
        }

        match self.peek_token() {
            Some(Token::Function) => {
                let component = self.parse_function_component()?;
                module.default_export = Some(component.name.clone());
                module.components.push(component);
                self.match_token(Token::Semi);
            }
            Some(Token::Ident(_)) => {
                let name = self.expect_ident()?;
                self.match_token(Token::Semi);
                module.default_export = Some(name);
            }
            _ => {
                return Err(ParseError::unexpected_token(
                    self.current_pos(),
                    "component name or 'function'",
                    self.describe_peek(),
                ));
            }
        }

        Ok(())
    }

    /// Parse an interface declaration. Type-only, so the body is skipped
    /// with brace matching and only the name is kept.
    fn parse_interface(&mut self) -> ParseResult<InterfaceDecl> {
        let start = self.current_pos();
        self.expect(Token::Interface, "'interface'")?;
        let name = self.expect_ident()?;
        self.expect(Token::LBrace, "'{'")?;

        let mut depth = 1usize;
        while depth > 0 {
            match self.advance() {
                Some((Token::LBrace, _)) => depth += 1,
                Some((Token::RBrace, _)) => depth -= 1,
                Some(_) => {}
                None => return Err(ParseError::unexpected_eof("'}' closing interface body")),
            }
        }

        let end = self.current_pos();
        Ok(InterfaceDecl {
            name,
            span: Span::new(start, end),
        })
    }

    /// Parse `function Name(params): Ret { return ( <jsx/> ); }`
    fn parse_function_component(&mut self) -> ParseResult<ComponentFn> {
        let start = self.current_pos();
        self.expect(Token::Function, "'function'")?;
        let name = self.expect_ident()?;

        self.expect(Token::LParen, "'('")?;
        self.parse_params()?;
        self.expect(Token::RParen, "')'")?;

        // Optional return type annotation, discarded
        if self.match_token(Token::Colon) {
            self.parse_type_annotation()?;
        }

        self.expect(Token::LBrace, "'{'")?;
        let body = self.parse_return_body()?;
        self.expect(Token::RBrace, "'}'")?;

        let end = self.current_pos();
        Ok(ComponentFn {
            name,
            body,
            span: Span::new(start, end),
        })
    }

    /// Parse `const Name = (params) => <jsx/>;` (paren, brace, or bare body)
    fn parse_arrow_component(&mut self) -> ParseResult<ComponentFn> {
        let start = self.current_pos();
        self.expect(Token::Const, "'const'")?;
        let name = self.expect_ident()?;
        self.expect(Token::Eq, "'='")?;

        self.expect(Token::LParen, "'('")?;
        self.parse_params()?;
        self.expect(Token::RParen, "')'")?;

        if self.match_token(Token::Colon) {
            self.parse_type_annotation()?;
        }

        self.expect(Token::FatArrow, "'=>'")?;

        let body = if self.match_token(Token::LBrace) {
            let body = self.parse_return_body()?;
            self.expect(Token::RBrace, "'}'")?;
            body
        } else {
            let wrapped = self.match_token(Token::LParen);
            let body = self.parse_jsx_element()?;
            if wrapped {
                self.expect(Token::RParen, "')'")?;
            }
            body
        };

        self.match_token(Token::Semi);

        let end = self.current_pos();
        Ok(ComponentFn {
            name,
            body,
            span: Span::new(start, end),
        })
    }

    /// Parse `return ( <jsx/> );` inside a function body
    fn parse_return_body(&mut self) -> ParseResult<JsxNode> {
        self.expect(Token::Return, "'return'")?;

        let wrapped = self.match_token(Token::LParen);
        let body = self.parse_jsx_element()?;
        if wrapped {
            self.expect(Token::RParen, "')'")?;
        }
        self.match_token(Token::Semi);

        Ok(body)
    }

    /// Parse a parameter list (annotations discarded)
    fn parse_params(&mut self) -> ParseResult<()> {
        while !self.check(&Token::RParen) && !self.is_at_end() {
            self.expect_ident()?;
            if self.match_token(Token::Colon) {
                self.parse_type_annotation()?;
            }
            if !self.check(&Token::RParen) {
                self.expect(Token::Comma, "','")?;
            }
        }
        Ok(())
    }

    /// Parse a dotted type path like `JSX.Element`
    fn parse_type_annotation(&mut self) -> ParseResult<()> {
        self.expect_ident()?;
        while self.match_token(Token::Dot) {
            self.expect_ident()?;
        }
        Ok(())
    }

    /// Parse a JSX element including its closing tag
    pub fn parse_jsx_element(&mut self) -> ParseResult<JsxNode> {
        let start = self.current_pos();
        self.expect(Token::Lt, "'<'")?;
        let tag = self.expect_ident()?;

        let mut attributes = HashMap::new();
        while matches!(self.peek_token(), Some(Token::Ident(_))) {
            let attr_name = self.expect_ident()?;
            self.expect(Token::Eq, "'='")?;
            let value = self.parse_attribute_value()?;
            attributes.insert(attr_name, value);
        }

        // Self-closing form
        if self.match_token(Token::Slash) {
            self.expect(Token::Gt, "'>'")?;
            let end = self.current_pos();
            return Ok(JsxNode::Element {
                tag,
                attributes,
                children: Vec::new(),
                span: Span::new(start, end),
            });
        }

        self.expect(Token::Gt, "'>'")?;
        let children = self.parse_jsx_children()?;

        self.expect(Token::Lt, "'<'")?;
        self.expect(Token::Slash, "'/'")?;
        let closing = self.expect_ident()?;
        if closing != tag {
            return Err(ParseError::invalid_syntax(
                self.current_pos(),
                format!("Mismatched closing tag: expected </{}>, found </{}>", tag, closing),
            ));
        }
        self.expect(Token::Gt, "'>'")?;

        let end = self.current_pos();
        Ok(JsxNode::Element {
            tag,
            attributes,
            children,
            span: Span::new(start, end),
        })
    }

    /// Parse an attribute value: `"string"` or `{ expr }`
    fn parse_attribute_value(&mut self) -> ParseResult<Expr> {
        match self.peek_token() {
            Some(Token::String(_)) | Some(Token::SingleQuoteString(_)) => self.parse_expr(),
            Some(Token::LBrace) => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(Token::RBrace, "'}'")?;
                Ok(expr)
            }
            _ => Err(ParseError::unexpected_token(
                self.current_pos(),
                "attribute value",
                self.describe_peek(),
            )),
        }
    }

    /// Parse element children until the closing tag
    fn parse_jsx_children(&mut self) -> ParseResult<Vec<JsxNode>> {
        let mut children = Vec::new();

        loop {
            match self.peek_token() {
                None => return Err(ParseError::unexpected_eof("closing tag")),
                Some(Token::Lt) => {
                    if matches!(self.peek_token_at(1), Some(Token::Slash)) {
                        break;
                    }
                    children.push(self.parse_jsx_element()?);
                }
                Some(Token::LBrace) => {
                    let start = self.current_pos();
                    self.advance();
                    let expr = self.parse_expr()?;
                    self.expect(Token::RBrace, "'}'")?;
                    let end = self.current_pos();
                    children.push(JsxNode::Expression {
                        expr,
                        span: Span::new(start, end),
                    });
                }
                Some(_) => children.push(self.parse_jsx_text()),
            }
        }

        Ok(children)
    }

    /// Consume a raw text run up to the next `<` or `{`. The content is the
    /// raw source slice from the first token to the terminator (trailing
    /// whitespace trimmed), not the join of token slices. Anything the lexer
    /// dropped inside the run, like the `//` tail of a URL it read as a line
    /// comment, still appears verbatim in the text. A lexed line comment
    /// hides the rest of its line from the token stream, so a closing tag
    /// there surfaces as an unclosed-element error, never as truncated text.
    fn parse_jsx_text(&mut self) -> JsxNode {
        let start = self.tokens[self.pos].1.start;
        self.advance();

        loop {
            match self.peek_token() {
                None | Some(Token::Lt) | Some(Token::LBrace) => break,
                Some(_) => {
                    self.advance();
                }
            }
        }

        let end = match self.peek() {
            Some((_, range)) => range.start,
            None => self.source.len(),
        };
        let content = self.source[start..end].trim_end();

        JsxNode::Text {
            content: content.to_string(),
            span: Span::new(start, start + content.len()),
        }
    }

    /// Parse an expression (literals, identifiers, members, object literals)
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        let start = self.current_pos();

        match self.peek_token() {
            Some(Token::String(s)) | Some(Token::SingleQuoteString(s)) => {
                let value = s.to_string();
                self.advance();
                Ok(Expr::Str {
                    value,
                    span: Span::new(start, self.current_pos()),
                })
            }
            Some(Token::Number(n)) => {
                let value = self.parse_number(n, start)?;
                self.advance();
                Ok(Expr::Num {
                    value,
                    span: Span::new(start, self.current_pos()),
                })
            }
            Some(Token::Minus) => {
                self.advance();
                match self.peek_token() {
                    Some(Token::Number(n)) => {
                        let value = -self.parse_number(n, start)?;
                        self.advance();
                        Ok(Expr::Num {
                            value,
                            span: Span::new(start, self.current_pos()),
                        })
                    }
                    _ => Err(ParseError::unexpected_token(
                        self.current_pos(),
                        "number",
                        self.describe_peek(),
                    )),
                }
            }
            Some(Token::True) => {
                self.advance();
                Ok(Expr::Bool {
                    value: true,
                    span: Span::new(start, self.current_pos()),
                })
            }
            Some(Token::False) => {
                self.advance();
                Ok(Expr::Bool {
                    value: false,
                    span: Span::new(start, self.current_pos()),
                })
            }
            Some(Token::Ident(_)) => {
                let name = self.expect_ident()?;
                let mut expr = Expr::Ident {
                    name,
                    span: Span::new(start, self.current_pos()),
                };
                while self.match_token(Token::Dot) {
                    let property = self.expect_ident()?;
                    expr = Expr::Member {
                        object: Box::new(expr),
                        property,
                        span: Span::new(start, self.current_pos()),
                    };
                }
                Ok(expr)
            }
            Some(Token::LBrace) => self.parse_object_literal(),
            _ => Err(ParseError::unexpected_token(
                self.current_pos(),
                "expression",
                self.describe_peek(),
            )),
        }
    }

    /// Parse `{ key: value, ... }` with optional trailing comma
    fn parse_object_literal(&mut self) -> ParseResult<Expr> {
        let start = self.current_pos();
        self.expect(Token::LBrace, "'{'")?;

        let mut entries = Vec::new();
        while !self.check(&Token::RBrace) && !self.is_at_end() {
            let key = match self.peek_token() {
                Some(Token::Ident(name)) => {
                    let key = name.to_string();
                    self.advance();
                    key
                }
                Some(Token::String(s)) | Some(Token::SingleQuoteString(s)) => {
                    let key = s.to_string();
                    self.advance();
                    key
                }
                _ => {
                    return Err(ParseError::unexpected_token(
                        self.current_pos(),
                        "object key",
                        self.describe_peek(),
                    ));
                }
            };

            self.expect(Token::Colon, "':'")?;
            let value = self.parse_expr()?;
            entries.push((key, value));

            if !self.check(&Token::RBrace) {
                self.expect(Token::Comma, "','")?;
            }
        }

        self.expect(Token::RBrace, "'}'")?;
        Ok(Expr::Object {
            entries,
            span: Span::new(start, self.current_pos()),
        })
    }

    fn parse_number(&self, text: &str, pos: usize) -> ParseResult<f64> {
        text.parse::<f64>()
            .map_err(|_| ParseError::invalid_syntax(pos, format!("Invalid number: {}", text)))
    }

    // Token stream helpers

    fn peek(&self) -> Option<&(Token<'src>, Range<usize>)> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn peek_token_at(&self, offset: usize) -> Option<&Token<'src>> {
        self.tokens.get(self.pos + offset).map(|(t, _)| t)
    }

    fn advance(&mut self) -> Option<(Token<'src>, Range<usize>)> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn check(&self, token: &Token) -> bool {
        self.peek_token() == Some(token)
    }

    fn match_token(&mut self, token: Token) -> bool {
        if self.check(&token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token, expected: &str) -> ParseResult<()> {
        if self.match_token(token) {
            Ok(())
        } else if self.is_at_end() {
            Err(ParseError::unexpected_eof(expected))
        } else {
            Err(ParseError::unexpected_token(
                self.current_pos(),
                expected,
                self.describe_peek(),
            ))
        }
    }

    fn expect_ident(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some((Token::Ident(name), _)) => {
                let name = name.to_string();
                self.advance();
                Ok(name)
            }
            Some((token, range)) => Err(ParseError::unexpected_token(
                range.start,
                "identifier",
                format!("{:?}", token),
            )),
            None => Err(ParseError::unexpected_eof("identifier")),
        }
    }

    fn current_pos(&self) -> usize {
        self.peek()
            .map(|(_, range)| range.start)
            .unwrap_or(self.source.len())
    }

    fn describe_peek(&self) -> String {
        match self.peek_token() {
            Some(token) => format!("{:?}", token),
            None => "end of input".to_string(),
        }
    }
}

/// Parse source text into a module
pub fn parse(source: &str) -> ParseResult<Module> {
    Parser::new(source).parse_module()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = r#"
        function MyComponent() {
          return (
            <div style={{ padding: 20 }}>
              <h1>Hello World</h1>
              <p>This is editable text.</p>
            </div>
          );
        }
        export default MyComponent;
    "#;

    #[test]
    fn test_parse_demo_component() {
        let module = parse(DEMO).unwrap();

        assert_eq!(module.components.len(), 1);
        assert_eq!(module.default_export.as_deref(), Some("MyComponent"));

        let body = &module.components[0].body;
        match body {
            JsxNode::Element { tag, attributes, children, .. } => {
                assert_eq!(tag, "div");
                assert!(attributes.contains_key("style"));
                assert_eq!(children.len(), 2);
            }
            other => panic!("expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_text_children() {
        let module = parse(DEMO).unwrap();
        let body = &module.components[0].body;

        let JsxNode::Element { children, .. } = body else {
            panic!("expected element");
        };
        let JsxNode::Element { children: h1_children, .. } = &children[0] else {
            panic!("expected h1");
        };
        assert_eq!(
            h1_children[0],
            JsxNode::Text {
                content: "Hello World".to_string(),
                span: h1_children[0].span(),
            }
        );
    }

    #[test]
    fn test_parse_style_object() {
        let module = parse(DEMO).unwrap();
        let JsxNode::Element { attributes, .. } = &module.components[0].body else {
            panic!("expected element");
        };

        match attributes.get("style").unwrap() {
            Expr::Object { entries, .. } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].0, "padding");
                assert!(matches!(entries[0].1, Expr::Num { value, .. } if value == 20.0));
            }
            other => panic!("expected object literal, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_arrow_component() {
        let source = r##"
            const Banner = () => (
                <h1 style={{ color: "#ff0000" }}>Sale</h1>
            );
            export default Banner;
        "##;
        let module = parse(source).unwrap();
        assert_eq!(module.default_export.as_deref(), Some("Banner"));
        assert_eq!(module.components[0].name, "Banner");
    }

    #[test]
    fn test_parse_export_default_function() {
        let source = r#"
            export default function App() {
                return <div>hi</div>;
            }
        "#;
        let module = parse(source).unwrap();
        assert_eq!(module.default_export.as_deref(), Some("App"));
    }

    #[test]
    fn test_parse_interface_skipped() {
        let source = r#"
            interface Props {
                title: string;
                nested: { depth: number };
            }
            function App() {
                return <div>ok</div>;
            }
            export default App;
        "#;
        let module = parse(source).unwrap();
        assert_eq!(module.interfaces.len(), 1);
        assert_eq!(module.interfaces[0].name, "Props");
        assert_eq!(module.components.len(), 1);
    }

    #[test]
    fn test_parse_type_annotations_discarded() {
        let source = r#"
            function App(props: Props): JSX.Element {
                return <div>ok</div>;
            }
            export default App;
        "#;
        let module = parse(source).unwrap();
        assert_eq!(module.components[0].name, "App");
    }

    #[test]
    fn test_self_closing_element() {
        let source = r#"
            function App() {
                return <div><br /><hr /></div>;
            }
            export default App;
        "#;
        let module = parse(source).unwrap();
        let JsxNode::Element { children, .. } = &module.components[0].body else {
            panic!("expected element");
        };
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_expression_child() {
        let source = r#"
            function App() {
                return <div>{ "interpolated" }</div>;
            }
            export default App;
        "#;
        let module = parse(source).unwrap();
        let JsxNode::Element { children, .. } = &module.components[0].body else {
            panic!("expected element");
        };
        assert!(matches!(
            &children[0],
            JsxNode::Expression {
                expr: Expr::Str { value, .. },
                ..
            } if value == "interpolated"
        ));
    }

    #[test]
    fn test_text_with_double_slash_survives() {
        // A `//` mid-run lexes as a line comment; the raw-slice
        // reconstruction must still carry the text through whole.
        let source = r#"
            function App() {
                return (
                    <p>
                        see https://example.com for docs
                    </p>
                );
            }
            export default App;
        "#;
        let module = parse(source).unwrap();
        let JsxNode::Element { children, .. } = &module.components[0].body else {
            panic!("expected element");
        };
        assert!(matches!(
            &children[0],
            JsxNode::Text { content, .. } if content == "see https://example.com for docs"
        ));
    }

    #[test]
    fn test_comments_outside_markup_ignored() {
        let source = r#"
            // leading comment
            function App() {
                /* block */ return <div>ok</div>;
            }
            export default App;
        "#;
        let module = parse(source).unwrap();
        assert_eq!(module.components[0].name, "App");
    }

    #[test]
    fn test_mismatched_closing_tag() {
        let source = r#"
            function App() {
                return <div>text</span>;
            }
            export default App;
        "#;
        let err = parse(source).unwrap_err();
        assert!(matches!(err, ParseError::InvalidSyntax { .. }));
    }

    #[test]
    fn test_invalid_source_fails() {
        let err = parse("not valid syntax {{{").unwrap_err();
        assert!(matches!(err, ParseError::InvalidSyntax { .. }));
    }

    #[test]
    fn test_missing_export_parses() {
        // A module without a default export is syntactically fine; the
        // compiler rejects it later.
        let module = parse("function App() { return <div>x</div>; }").unwrap();
        assert!(module.default_export.is_none());
    }
}
