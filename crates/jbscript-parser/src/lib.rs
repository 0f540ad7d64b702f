//! jbscript tokenizer and parser
//!
//! This crate provides the scanner and the recursive-descent parser for
//! `<trans>`-scoped scripts: live-region resolution, a position-carrying
//! AST, and explicit operator precedence.

mod expression;
mod lexer;
mod program;
mod registry;
mod token;

pub use lexer::{tokenize, tokenize_with_diagnostics};
pub use program::{parse, parse_with_mode};
pub use registry::{SYSTEM_NAMESPACE_PREFIX, SystemVarRegistry};
pub use token::{Token, TokenKind};

pub(crate) use expression::Parser;

use jbscript_ast::Program;
use jbscript_diagnostics::{Diagnostic, JB0101, Result, ScriptError};

/// Parser mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Fast mode - fail on first error (for production)
    #[default]
    Fast,
    /// Analysis mode - collect all diagnostics (for IDE/tooling)
    Analysis,
}

/// Parse result with collected diagnostics
pub struct ParseResult {
    /// Parsed program (may be partial in analysis mode)
    pub program: Option<Program>,
    /// Diagnostics in source order; warnings do not block execution
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// Check if parsing succeeded without error-severity diagnostics
    pub fn is_success(&self) -> bool {
        self.program.is_some() && !self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Error-severity diagnostics
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Warning-severity diagnostics
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    /// Convert to a Result, returning the first error if any
    pub fn into_result(self) -> Result<Program> {
        let mut errors: Vec<ScriptError> = self
            .diagnostics
            .iter()
            .filter(|d| d.is_error())
            .cloned()
            .map(ScriptError::from)
            .collect();
        if errors.is_empty() {
            self.program
                .ok_or_else(|| ScriptError::parse(JB0101, "Unexpected end of input"))
        } else if errors.len() == 1 {
            Err(errors.remove(0))
        } else {
            Err(ScriptError::Multiple(errors))
        }
    }
}
