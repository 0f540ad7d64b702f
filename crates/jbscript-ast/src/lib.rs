//! jbscript abstract syntax tree definitions
//!
//! This crate defines the AST for the `<trans>`-scoped transformation script
//! language. The tree is built once by the parser and consumed read-only by
//! the evaluator; every node carries its originating source span.

mod expression;
mod literal;
mod operator;

pub use expression::*;
pub use literal::*;
pub use operator::*;

use jbscript_diagnostics::Span;

/// A node with source span information
pub type Spanned<T> = jbscript_diagnostics::Spanned<T>;

/// Type alias for boxed expressions
pub type BoxExpr = Box<Spanned<Expr>>;

/// Type alias for optional boxed expressions
pub type OptBoxExpr = Option<Box<Spanned<Expr>>>;

/// A plain identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The identifier text
    pub name: String,
}

impl Identifier {
    /// Create a new identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// The parsed live region of a document
///
/// Only tokens between the scope-open and scope-close tags contribute to the
/// body; everything outside is discarded with advisory diagnostics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level expressions in evaluation order
    pub body: Vec<Spanned<Expr>>,
    /// Span of the live region (defaults to 1:1 for an empty document)
    pub span: Span,
}

impl Program {
    /// Create an empty program
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a program from a body, deriving the span from its nodes
    pub fn new(body: Vec<Spanned<Expr>>) -> Self {
        let span = body
            .iter()
            .map(|e| e.span)
            .reduce(Span::merge)
            .unwrap_or_default();
        Self { body, span }
    }

    /// Check if the live region contains no expressions
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
