//! Scanner for `<trans>`-scoped scripts
//!
//! Turns raw document text into position-tracked tokens. The scanner is
//! error-tolerant: unknown input becomes `Unknown` tokens plus diagnostics
//! instead of aborting, so the parser can keep producing spans for
//! everything it saw. Only a duplicate scope tag without a diagnostics sink
//! is a hard failure.

use crate::{Token, TokenKind};
use jbscript_diagnostics::{
    Diagnostic, JB0001, JB0002, JB0003, JB0004, JB0005, JB0006, Position, Result, ScriptError,
    Span,
};

/// Characters that poison an integer run into one `Unknown` token
const INT_UNDEFINED: &[char] = &['`', '~', '@', '#', '$', '%', '_', ':', '?', '('];

/// Characters that poison a fractional run; the integer set plus `.`
const FLOAT_UNDEFINED: &[char] = &['`', '~', '@', '#', '$', '%', '_', ':', '?', '(', '.'];

/// Characters allowed after the `$` sigil, beyond `[A-Za-z0-9_]`
const GLOBAL_EXTRA: &[char] = &['`', '~', '@', '#', '$', '%', '_', ':', '.', '?'];

/// Tokenize a document without a diagnostics sink
///
/// Recoverable conditions are logged and lexing continues, except a
/// duplicate scope tag, which fails immediately.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source, None).run()
}

/// Tokenize a document, recording every diagnostic into `diagnostics`
///
/// With a sink nothing is fatal; duplicate scope tags become error
/// diagnostics and lexing continues.
pub fn tokenize_with_diagnostics(source: &str, diagnostics: &mut Vec<Diagnostic>) -> Vec<Token> {
    match Lexer::new(source, Some(diagnostics)).run() {
        Ok(tokens) => tokens,
        Err(_) => unreachable!("all lexical conditions are recoverable with a sink"),
    }
}

struct Lexer<'s> {
    chars: Vec<char>,
    index: usize,
    pos: Position,
    seen_open: bool,
    seen_close: bool,
    tokens: Vec<Token>,
    sink: Option<&'s mut Vec<Diagnostic>>,
}

impl<'s> Lexer<'s> {
    fn new(source: &str, sink: Option<&'s mut Vec<Diagnostic>>) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            pos: Position::default(),
            seen_open: false,
            seen_close: false,
            tokens: Vec::new(),
            sink,
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        while let Some(ch) = self.peek() {
            match ch {
                '<' if self.starts_with("<trans>") => self.open_tag()?,
                '<' if self.starts_with("</trans>") => self.close_tag()?,
                '/' if self.peek_at(1) == Some('/') => self.line_comment(),
                '/' if self.peek_at(1) == Some('*') => self.block_comment(),
                ' ' | '\t' | '\r' | '\n' => {
                    self.bump();
                }
                '\'' | '"' => self.string(ch),
                '$' => self.global_identifier(),
                c if c.is_ascii_digit() => self.number(),
                '.' if matches!(self.peek_at(1), Some(d) if d.is_ascii_digit()) => self.number(),
                c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
                _ => self.operator_or_unknown(),
            }
        }
        Ok(self.tokens)
    }

    // === Cursor ===

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    fn starts_with(&self, literal: &str) -> bool {
        literal
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek_at(i) == Some(c))
    }

    /// Consume one character, returning it with the position it occupied
    fn bump(&mut self) -> Option<(char, Position)> {
        let ch = *self.chars.get(self.index)?;
        let at = self.pos;
        self.index += 1;
        if ch == '\n' {
            self.pos.newline();
        } else {
            self.pos.advance();
        }
        Some((ch, at))
    }

    /// Consume exactly `n` characters known to be present
    fn take(&mut self, n: usize) -> (String, Span) {
        debug_assert!(n >= 1);
        let mut text = String::with_capacity(n);
        let (first, begin) = self.bump().expect("take past end of input");
        text.push(first);
        let mut end = begin;
        for _ in 1..n {
            let (c, at) = self.bump().expect("take past end of input");
            text.push(c);
            end = at;
        }
        (text, Span::new(begin, end))
    }

    // === Emission ===

    fn push_token(&mut self, text: impl Into<String>, kind: TokenKind, span: Span) {
        self.tokens.push(Token::new(text, kind, span));
    }

    fn emit_op(&mut self, len: usize, kind: TokenKind) {
        let (text, span) = self.take(len);
        self.push_token(text, kind, span);
    }

    fn report(&mut self, diag: Diagnostic) {
        match self.sink.as_deref_mut() {
            Some(sink) => sink.push(diag),
            None => log::debug!("{diag}"),
        }
    }

    // === Scope tags ===

    fn open_tag(&mut self) -> Result<()> {
        let (text, span) = self.take("<trans>".len());
        if self.seen_open {
            let diag = Diagnostic::error(JB0004, "Duplicate '<trans>' tag", span);
            if self.sink.is_some() {
                self.report(diag);
            } else {
                return Err(ScriptError::lex_at(JB0004, "Duplicate '<trans>' tag", span));
            }
        } else {
            self.seen_open = true;
            self.push_token(text, TokenKind::OpenTransTag, span);
        }
        Ok(())
    }

    fn close_tag(&mut self) -> Result<()> {
        let (text, span) = self.take("</trans>".len());
        if self.seen_close {
            let diag = Diagnostic::error(JB0005, "Duplicate '</trans>' tag", span);
            if self.sink.is_some() {
                self.report(diag);
            } else {
                return Err(ScriptError::lex_at(JB0005, "Duplicate '</trans>' tag", span));
            }
        } else {
            self.seen_close = true;
            self.push_token(text, TokenKind::CloseTransTag, span);
        }
        Ok(())
    }

    // === Comments ===

    fn line_comment(&mut self) {
        self.bump();
        self.bump();
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn block_comment(&mut self) {
        let (_, begin) = self.bump().expect("checked '/'");
        self.bump();
        if self.peek() == Some('/') {
            // The '/*/' footgun: the closer reuses the opener's star, so the
            // comment swallows the entire rest of the document.
            let (_, end) = self.bump().expect("checked '/'");
            let diag = Diagnostic::warning(
                JB0006,
                "Self-closing comment '/*/' disables all code after it",
                Span::new(begin, end),
            );
            if self.sink.is_some() {
                self.report(diag);
            } else {
                log::warn!("{diag}");
            }
            while self.bump().is_some() {}
            return;
        }
        loop {
            match self.bump() {
                // An unterminated comment swallows the rest of the input
                None => return,
                Some(('*', _)) if self.peek() == Some('/') => {
                    self.bump();
                    return;
                }
                Some(_) => {}
            }
        }
    }

    // === Literals ===

    fn string(&mut self, quote: char) {
        let (_, begin) = self.bump().expect("checked quote");
        let mut text = String::new();
        let mut last = begin;
        loop {
            match self.peek() {
                None => {
                    let span = Span::new(begin, last);
                    self.report(Diagnostic::error(
                        JB0003,
                        "Unterminated string literal",
                        span,
                    ));
                    self.push_token(text, TokenKind::Str, span);
                    return;
                }
                Some(c) if c == quote => {
                    let (_, at) = self.bump().expect("checked quote");
                    last = at;
                    break;
                }
                Some('\\') => {
                    let (_, at) = self.bump().expect("checked backslash");
                    last = at;
                    match self.peek() {
                        Some(_) => {
                            let (escaped, at) = self.bump().expect("checked escape");
                            last = at;
                            match escaped {
                                'b' => text.push('\u{0008}'),
                                'f' => text.push('\u{000C}'),
                                'n' => text.push('\n'),
                                'r' => text.push('\r'),
                                't' => text.push('\t'),
                                'v' => text.push('\u{000B}'),
                                '\\' => text.push('\\'),
                                '\'' => text.push('\''),
                                '"' => text.push('"'),
                                // Unrecognized escapes keep the backslash
                                other => {
                                    text.push('\\');
                                    text.push(other);
                                }
                            }
                        }
                        None => text.push('\\'),
                    }
                }
                // A raw CR folds to one space in single-quoted strings
                Some('\r') => {
                    let (_, at) = self.bump().expect("checked CR");
                    last = at;
                    text.push(if quote == '\'' { ' ' } else { '\r' });
                }
                Some(_) => {
                    let (c, at) = self.bump().expect("checked char");
                    last = at;
                    text.push(c);
                }
            }
        }
        self.push_token(text, TokenKind::Str, Span::new(begin, last));
    }

    /// Consume a digit run; returns false if any non-digit slipped in
    fn digit_run(&mut self, text: &mut String, end: &mut Position, poison: &[char]) -> bool {
        let mut clean = true;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                let (c, at) = self.bump().expect("checked digit");
                text.push(c);
                *end = at;
            } else if c.is_ascii_alphabetic() || poison.contains(&c) {
                let (c, at) = self.bump().expect("checked poison char");
                text.push(c);
                *end = at;
                clean = false;
            } else {
                break;
            }
        }
        clean
    }

    fn number(&mut self) {
        let begin = self.pos;
        let mut text = String::new();
        let mut end = self.pos;

        // Leading-dot float such as `.5`
        if self.peek() == Some('.') {
            let (c, at) = self.bump().expect("checked dot");
            text.push(c);
            end = at;
            let clean = self.digit_run(&mut text, &mut end, FLOAT_UNDEFINED);
            self.finish_float(text, Span::new(begin, end), clean);
            return;
        }

        let clean = self.digit_run(&mut text, &mut end, INT_UNDEFINED);
        if !clean {
            let span = Span::new(begin, end);
            self.report(Diagnostic::error(
                JB0001,
                format!("Unknown token: '{text}'"),
                span,
            ));
            self.push_token(text, TokenKind::Unknown, span);
            return;
        }

        if self.peek() == Some('.') {
            let (c, at) = self.bump().expect("checked dot");
            text.push(c);
            end = at;
            let clean = self.digit_run(&mut text, &mut end, FLOAT_UNDEFINED);
            self.finish_float(text, Span::new(begin, end), clean);
            return;
        }

        self.push_token(text, TokenKind::Integer, Span::new(begin, end));
    }

    fn finish_float(&mut self, text: String, span: Span, clean: bool) {
        if clean {
            self.push_token(text, TokenKind::Float, span);
        } else {
            self.report(Diagnostic::error(
                JB0002,
                format!("Undefined token: '{text}'"),
                span,
            ));
            self.push_token(text, TokenKind::Unknown, span);
        }
    }

    // === Identifiers ===

    fn global_identifier(&mut self) {
        let (sigil, begin) = self.bump().expect("checked '$'");
        let mut text = String::from(sigil);
        let mut end = begin;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || GLOBAL_EXTRA.contains(&c) {
                let (c, at) = self.bump().expect("checked global char");
                text.push(c);
                end = at;
            } else {
                break;
            }
        }
        // A bare `$` stays a token of its own; the parser decides what to
        // make of it.
        self.push_token(text, TokenKind::GlobalIdentifier, Span::new(begin, end));
    }

    fn identifier(&mut self) {
        let (first, begin) = self.bump().expect("checked alpha");
        let mut text = String::from(first);
        let mut end = begin;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                let (c, at) = self.bump().expect("checked ident char");
                text.push(c);
                end = at;
            } else {
                break;
            }
        }
        let kind = match text.as_str() {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => TokenKind::Identifier,
        };
        self.push_token(text, kind, Span::new(begin, end));
    }

    // === Operators and the fall-through ===

    fn operator_or_unknown(&mut self) {
        let ch = self.peek().expect("caller checked");
        match ch {
            '+' => match self.peek_at(1) {
                Some('+') => self.emit_op(2, TokenKind::Increment),
                Some('=') => self.emit_op(2, TokenKind::Assignment),
                _ => self.emit_op(1, TokenKind::MathOperator),
            },
            '-' => match self.peek_at(1) {
                Some('-') => self.emit_op(2, TokenKind::Decrement),
                Some('=') => self.emit_op(2, TokenKind::Assignment),
                _ => self.emit_op(1, TokenKind::Minus),
            },
            '=' => match self.peek_at(1) {
                Some('=') => self.emit_op(2, TokenKind::Comparison),
                _ => self.emit_op(1, TokenKind::Assignment),
            },
            '<' => match self.peek_at(1) {
                Some('=') => self.emit_op(2, TokenKind::Comparison),
                _ => self.emit_op(1, TokenKind::Comparison),
            },
            '>' => match self.peek_at(1) {
                Some('=') => self.emit_op(2, TokenKind::Comparison),
                _ => self.emit_op(1, TokenKind::Comparison),
            },
            '!' => match self.peek_at(1) {
                Some('=') => self.emit_op(2, TokenKind::Comparison),
                _ => self.emit_op(1, TokenKind::Not),
            },
            '&' => match self.peek_at(1) {
                Some('&') => self.emit_op(2, TokenKind::Logical),
                _ => self.emit_op(1, TokenKind::Logical),
            },
            '|' => match self.peek_at(1) {
                Some('|') => self.emit_op(2, TokenKind::Logical),
                _ => self.emit_op(1, TokenKind::Logical),
            },
            '*' | '/' | '%' => self.emit_op(1, TokenKind::MathOperator),
            '(' => self.emit_op(1, TokenKind::OpenParen),
            ')' => self.emit_op(1, TokenKind::CloseParen),
            '{' => self.emit_op(1, TokenKind::OpenBrace),
            '}' => self.emit_op(1, TokenKind::CloseBrace),
            '[' => self.emit_op(1, TokenKind::OpenBracket),
            ']' => self.emit_op(1, TokenKind::CloseBracket),
            ',' => self.emit_op(1, TokenKind::Comma),
            ';' => self.emit_op(1, TokenKind::Semicolon),
            ':' => self.emit_op(1, TokenKind::Colon),
            '.' => self.emit_op(1, TokenKind::Dot),
            _ => {
                if self.seen_open {
                    let (text, span) = self.take(1);
                    self.report(Diagnostic::error(
                        JB0001,
                        format!("Unknown token: '{text}'"),
                        span,
                    ));
                    self.push_token(text, TokenKind::Unknown, span);
                } else {
                    // Before the scope-open tag unrecognized input is
                    // silently discarded.
                    self.bump();
                }
            }
        }
    }
}
