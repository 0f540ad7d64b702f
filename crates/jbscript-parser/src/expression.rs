//! Recursive-descent parser with explicit operator precedence
//!
//! Precedence, low to high: assignment, object literal, additive,
//! multiplicative, unary prefix, call/member postfix, primary. The cursor is
//! a plain index into an immutable token vector, so one parser instance can
//! be rebuilt per call without shared mutable state.

use crate::{ParseMode, SystemVarRegistry, Token, TokenKind};
use jbscript_ast::{
    AssignOp, AssignmentExpr, BinaryExpr, BinaryOp, CallExpr, Expr, GlobalIdentifier, Identifier,
    Literal, MemberExpr, ObjectLiteral, Program, Property, Spanned, UnaryExpr, UnaryOp,
};
use jbscript_diagnostics::{
    Diagnostic, ErrorCode, JB0100, JB0101, JB0102, JB0103, JB0104, JB0105, JB0106, JB0107, JB0108,
    JB0109, JB0110, Result, ScriptError, Span,
};

pub struct Parser<'r> {
    tokens: Vec<Token>,
    cursor: usize,
    mode: ParseMode,
    registry: &'r SystemVarRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl<'r> Parser<'r> {
    pub fn new(tokens: Vec<Token>, mode: ParseMode, registry: &'r SystemVarRegistry) -> Self {
        Self {
            tokens,
            cursor: 0,
            mode,
            registry,
            diagnostics: Vec::new(),
        }
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Resolve the live region and parse it into a program
    pub fn program(&mut self) -> Result<Program> {
        if !self.resolve_live_region()? {
            return Ok(Program::empty());
        }

        let mut body = Vec::new();
        loop {
            self.skip_semicolons();
            if self.at_eof() {
                break;
            }
            match self.expression() {
                Ok(expr) => body.push(expr),
                Err(err) => match self.mode {
                    ParseMode::Fast => return Err(err),
                    ParseMode::Analysis => {
                        self.diagnostics.push(err.to_diagnostic());
                        self.synchronize();
                        continue;
                    }
                },
            }
            if !self.at_eof() && self.peek().kind != TokenKind::Semicolon {
                let found = self.peek().clone();
                let err = self.err(
                    JB0100,
                    format!(
                        "Expected ';' between expressions, found {}",
                        found.kind.label()
                    ),
                    found.span,
                );
                match self.mode {
                    ParseMode::Fast => return Err(err),
                    ParseMode::Analysis => {
                        self.diagnostics.push(err.to_diagnostic());
                        self.synchronize();
                    }
                }
            }
        }
        Ok(Program::new(body))
    }

    // === Live region resolution ===

    /// Trim the token list down to the region between the scope tags
    ///
    /// Returns false when there is nothing to parse (no open tag, or a
    /// missing close tag in analysis mode).
    fn resolve_live_region(&mut self) -> Result<bool> {
        let open = self
            .tokens
            .iter()
            .position(|t| t.kind == TokenKind::OpenTransTag);
        let close = self
            .tokens
            .iter()
            .position(|t| t.kind == TokenKind::CloseTransTag);

        let Some(open_idx) = open else {
            self.warn(
                JB0103,
                "No '<trans>' tag found; the document content is returned as a string",
                self.document_span(),
            );
            return Ok(false);
        };

        let Some(close_idx) = close else {
            let at = Span::point(self.end_of_document());
            let err = self.err(JB0102, "Missing closing '</trans>' tag", at);
            return match self.mode {
                ParseMode::Fast => Err(err),
                ParseMode::Analysis => {
                    self.diagnostics.push(err.to_diagnostic());
                    Ok(false)
                }
            };
        };

        if open_idx > 0 {
            let span = self.tokens[0].span.merge(self.tokens[open_idx - 1].span);
            self.warn(JB0104, "Content before '<trans>' is ignored", span);
        }
        if close_idx + 1 < self.tokens.len() && close_idx > open_idx {
            let span = self.tokens[close_idx + 1]
                .span
                .merge(self.tokens[self.tokens.len() - 1].span);
            self.warn(JB0105, "Content after '</trans>' is ignored", span);
        }

        let eof_at = Span::point(self.tokens[close_idx].span.start);
        let mut region: Vec<Token> = if open_idx + 1 <= close_idx {
            self.tokens[open_idx + 1..close_idx].to_vec()
        } else {
            Vec::new()
        };
        region.push(Token::new("", TokenKind::Eof, eof_at));
        self.tokens = region;
        self.cursor = 0;
        Ok(true)
    }

    fn document_span(&self) -> Span {
        self.tokens
            .iter()
            .map(|t| t.span)
            .reduce(Span::merge)
            .unwrap_or_default()
    }

    fn end_of_document(&self) -> jbscript_diagnostics::Position {
        self.tokens
            .last()
            .map(|t| t.span.end)
            .unwrap_or_default()
    }

    // === Cursor ===

    fn peek(&self) -> &Token {
        self.tokens
            .get(self.cursor)
            .unwrap_or_else(|| self.tokens.last().expect("region ends with synthetic EOF"))
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    fn at_eof(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn skip_semicolons(&mut self) {
        while self.peek().kind == TokenKind::Semicolon {
            self.advance();
        }
    }

    /// Skip to the next statement boundary after an error
    fn synchronize(&mut self) {
        while !self.at_eof() && self.peek().kind != TokenKind::Semicolon {
            self.advance();
        }
    }

    fn err(&self, code: ErrorCode, message: impl Into<String>, span: Span) -> ScriptError {
        ScriptError::parse_at(code, message, span)
    }

    fn warn(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        self.diagnostics.push(Diagnostic::warning(code, message, span));
    }

    fn expect(&mut self, kind: TokenKind, code: ErrorCode, context: &str) -> Result<Token> {
        let token = self.peek().clone();
        if token.kind == kind {
            Ok(self.advance())
        } else {
            Err(self.err(
                code,
                format!(
                    "Expected {} {context}, found {}",
                    kind.label(),
                    token.kind.label()
                ),
                token.span,
            ))
        }
    }

    // === Grammar ===

    fn expression(&mut self) -> Result<Spanned<Expr>> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Spanned<Expr>> {
        let left = self.object_literal()?;
        if self.peek().kind != TokenKind::Assignment {
            return Ok(left);
        }
        let op_token = self.advance();
        let op = match AssignOp::from_symbol(&op_token.text) {
            Some(op) => op,
            None => unreachable!("lexer only emits '=', '+=' and '-=' assignment tokens"),
        };
        // Right-associative: `a = b = c` assigns `b = c` first.
        let value = self.assignment()?;
        if !left.inner.is_assignable() {
            return Err(self.err(
                JB0106,
                format!("Invalid assignment target for '{}'", op.symbol()),
                left.span,
            ));
        }
        let span = left.span.merge(value.span);
        Ok(Spanned::new(
            Expr::Assignment(AssignmentExpr {
                assignee: Box::new(left),
                op,
                value: Box::new(value),
            }),
            span,
        ))
    }

    fn object_literal(&mut self) -> Result<Spanned<Expr>> {
        if self.peek().kind != TokenKind::OpenBrace {
            return self.additive();
        }
        let open = self.advance();
        let mut properties = Vec::new();

        if self.peek().kind == TokenKind::CloseBrace {
            let close = self.advance();
            return Ok(Spanned::new(
                Expr::ObjectLiteral(ObjectLiteral { properties }),
                open.span.merge(close.span),
            ));
        }

        let close = loop {
            let key_token = self.expect(TokenKind::Identifier, JB0108, "as object literal key")?;
            let key_span = key_token.span;

            match self.peek().kind {
                // Shorthand entry: `{k}` or `{k,}`
                TokenKind::Comma | TokenKind::CloseBrace => {
                    properties.push(Spanned::new(
                        Property {
                            key: key_token.text,
                            value: None,
                        },
                        key_span,
                    ));
                }
                _ => {
                    self.expect(TokenKind::Colon, JB0108, "after object literal key")?;
                    let value = self.expression()?;
                    let span = key_span.merge(value.span);
                    properties.push(Spanned::new(
                        Property {
                            key: key_token.text,
                            value: Some(Box::new(value)),
                        },
                        span,
                    ));
                }
            }

            match self.peek().kind {
                TokenKind::Comma => {
                    self.advance();
                    if self.peek().kind == TokenKind::CloseBrace {
                        break self.advance();
                    }
                }
                TokenKind::CloseBrace => break self.advance(),
                _ => {
                    let found = self.peek().clone();
                    return Err(self.err(
                        JB0108,
                        format!(
                            "Expected ',' or '}}' in object literal, found {}",
                            found.kind.label()
                        ),
                        found.span,
                    ));
                }
            }
        };

        Ok(Spanned::new(
            Expr::ObjectLiteral(ObjectLiteral { properties }),
            open.span.merge(close.span),
        ))
    }

    fn additive(&mut self) -> Result<Spanned<Expr>> {
        let mut left = self.multiplicative()?;
        loop {
            let token = self.peek();
            let op = match token.kind {
                TokenKind::MathOperator if token.text == "+" => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.multiplicative()?;
            let span = left.span.merge(right.span);
            left = Spanned::new(
                Expr::Binary(BinaryExpr {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                }),
                span,
            );
        }
        Ok(left)
    }

    fn multiplicative(&mut self) -> Result<Spanned<Expr>> {
        let mut left = self.unary()?;
        loop {
            let token = self.peek();
            let op = match token.kind {
                TokenKind::MathOperator => match BinaryOp::from_symbol(&token.text) {
                    Some(op) if op.is_multiplicative() => op,
                    _ => break,
                },
                _ => break,
            };
            self.advance();
            let right = self.unary()?;
            let span = left.span.merge(right.span);
            left = Spanned::new(
                Expr::Binary(BinaryExpr {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                }),
                span,
            );
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Spanned<Expr>> {
        let token = self.peek().clone();
        let op = match token.kind {
            TokenKind::Not => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Negate),
            TokenKind::Increment => Some(UnaryOp::Increment),
            TokenKind::Decrement => Some(UnaryOp::Decrement),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.unary()?;
            let span = token.span.merge(operand.span);
            return Ok(Spanned::new(
                Expr::Unary(UnaryExpr {
                    op,
                    operand: Box::new(operand),
                }),
                span,
            ));
        }
        self.call_member()
    }

    fn call_member(&mut self) -> Result<Spanned<Expr>> {
        let mut expr = self.member()?;
        // Call suffixes nest left: `a.b()()` calls the result of `a.b()`.
        while self.peek().kind == TokenKind::OpenParen {
            expr = self.call(expr)?;
        }
        Ok(expr)
    }

    fn call(&mut self, callee: Spanned<Expr>) -> Result<Spanned<Expr>> {
        self.advance();
        let mut args = Vec::new();
        if self.peek().kind != TokenKind::CloseParen {
            loop {
                args.push(self.expression()?);
                if self.peek().kind == TokenKind::Comma {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        let close = self.expect(TokenKind::CloseParen, JB0100, "to close the argument list")?;
        let span = callee.span.merge(close.span);
        Ok(Spanned::new(
            Expr::Call(CallExpr {
                callee: Box::new(callee),
                args,
            }),
            span,
        ))
    }

    fn member(&mut self) -> Result<Spanned<Expr>> {
        let mut object = self.primary()?;
        loop {
            match self.peek().kind {
                TokenKind::Dot => {
                    self.advance();
                    let prop = self.peek().clone();
                    if prop.kind != TokenKind::Identifier {
                        return Err(self.err(
                            JB0107,
                            format!(
                                "Member access right side must be an identifier, found {}",
                                prop.kind.label()
                            ),
                            prop.span,
                        ));
                    }
                    self.advance();
                    let span = object.span.merge(prop.span);
                    let property =
                        Spanned::new(Expr::Identifier(Identifier::new(prop.text)), prop.span);
                    object = Spanned::new(
                        Expr::Member(MemberExpr {
                            object: Box::new(object),
                            property: Box::new(property),
                            computed: false,
                        }),
                        span,
                    );
                }
                TokenKind::OpenBracket => {
                    self.advance();
                    let property = self.expression()?;
                    let close =
                        self.expect(TokenKind::CloseBracket, JB0100, "to close the index")?;
                    let span = object.span.merge(close.span);
                    object = Spanned::new(
                        Expr::Member(MemberExpr {
                            object: Box::new(object),
                            property: Box::new(property),
                            computed: true,
                        }),
                        span,
                    );
                }
                _ => break,
            }
        }
        Ok(object)
    }

    fn primary(&mut self) -> Result<Spanned<Expr>> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Identifier => {
                self.advance();
                Ok(Spanned::new(
                    Expr::Identifier(Identifier::new(token.text)),
                    token.span,
                ))
            }
            TokenKind::GlobalIdentifier => {
                self.advance();
                Ok(self.global_reference(token))
            }
            TokenKind::Integer => {
                self.advance();
                // A digit run too long for i64 still has a double value.
                let literal = match token.text.parse::<i64>() {
                    Ok(value) => Literal::Integer(value),
                    Err(_) => Literal::Float(token.text.parse::<f64>().unwrap_or(0.0)),
                };
                Ok(Spanned::new(Expr::Literal(literal), token.span))
            }
            TokenKind::Float => {
                self.advance();
                let value = token.text.parse::<f64>().unwrap_or(0.0);
                Ok(Spanned::new(
                    Expr::Literal(Literal::Float(value)),
                    token.span,
                ))
            }
            TokenKind::True => {
                self.advance();
                Ok(Spanned::new(
                    Expr::Literal(Literal::Bool(true)),
                    token.span,
                ))
            }
            TokenKind::False => {
                self.advance();
                Ok(Spanned::new(
                    Expr::Literal(Literal::Bool(false)),
                    token.span,
                ))
            }
            TokenKind::Str => {
                self.advance();
                Ok(Spanned::new(
                    Expr::Literal(Literal::String(token.text)),
                    token.span,
                ))
            }
            TokenKind::OpenParen => {
                self.advance();
                let inner = self.expression()?;
                let close =
                    self.expect(TokenKind::CloseParen, JB0100, "to close the expression")?;
                Ok(Spanned::new(inner.inner, token.span.merge(close.span)))
            }
            TokenKind::Eof => Err(self.err(JB0101, "Unexpected end of input", token.span)),
            _ => {
                // Report and skip; the cursor always moves so parsing
                // terminates.
                self.advance();
                Err(self.err(
                    JB0100,
                    format!("Unexpected token: '{}'", token.text),
                    token.span,
                ))
            }
        }
    }

    /// Classify a `$`-reference against the system-variable registry
    fn global_reference(&mut self, token: Token) -> Spanned<Expr> {
        let name = token.text[1..].to_string();
        let global = if name.is_empty() {
            self.warn(
                JB0109,
                "Global variable '$' has no name; it cannot be referenced reliably",
                token.span,
            );
            GlobalIdentifier::global(name)
        } else if self.registry.contains(&name) {
            GlobalIdentifier::system(name)
        } else if SystemVarRegistry::in_reserved_namespace(&name) {
            self.warn(
                JB0110,
                format!(
                    "'${name}' is not a recognized system variable; the '{}' namespace is reserved",
                    crate::SYSTEM_NAMESPACE_PREFIX
                ),
                token.span,
            );
            GlobalIdentifier::global(name)
        } else {
            GlobalIdentifier::global(name)
        };
        Spanned::new(Expr::GlobalIdentifier(global), token.span)
    }
}
