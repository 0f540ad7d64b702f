//! Front end and static-analysis core for `<trans>`-scoped scripts
//!
//! This crate bundles the pieces the surrounding runtime builds on:
//! - Tokenizing documents into position-tracked tokens
//! - Resolving the `<trans>` live region and parsing it into an AST
//! - Predicting operator results and implicit-coercion diagnostics with the
//!   static type-inference tables
//!
//! # Example
//!
//! ```
//! use jbscript::parse;
//!
//! let script = r#"
//! <trans>
//!   result = Round(123.123456789, -7.7);
//! </trans>
//! "#;
//!
//! let program = parse(script).expect("script parses");
//! assert_eq!(program.body.len(), 1);
//! ```

// Re-export all public APIs from internal crates
pub use jbscript_ast as ast;
pub use jbscript_diagnostics as diagnostics;
pub use jbscript_parser as parser;
pub use jbscript_types as types;

// Convenience re-exports
pub use jbscript_ast::{Expr, Program};
pub use jbscript_diagnostics::{Diagnostic, Position, Result, ScriptError, Span};
pub use jbscript_parser::{
    ParseMode, ParseResult, SystemVarRegistry, parse, parse_with_mode, tokenize,
    tokenize_with_diagnostics,
};
pub use jbscript_types::{TypeInfo, ValueType};
