//! jbscript error types

use crate::{ErrorCode, Span};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the script cannot be safely executed
    Error,
    /// Warning - the script runs but relies on implicit behavior
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with an exact source span
///
/// Produced by the lexer and the parser; the semantic checker attaches the
/// type-inference results with the same shape. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Source span (start/end positions, end inclusive)
    pub span: Span,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            span,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            span,
        }
    }

    /// Check if this diagnostic blocks execution
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} at {}",
            self.severity, self.code, self.message, self.span
        )
    }
}

/// Main jbscript error type
#[derive(Debug, Clone, Error)]
pub enum ScriptError {
    /// Lexical error (scanner)
    #[error("{code}: {message}")]
    Lex {
        code: ErrorCode,
        message: String,
        span: Option<Span>,
    },

    /// Structural error (parser)
    #[error("{code}: {message}")]
    Parse {
        code: ErrorCode,
        message: String,
        span: Option<Span>,
    },

    /// Internal error (caller contract violation surfaced as a value)
    #[error("{code}: {message}")]
    Internal { code: ErrorCode, message: String },

    /// Multiple errors collected in analysis mode
    #[error("Multiple errors: {}", .0.len())]
    Multiple(Vec<ScriptError>),
}

impl ScriptError {
    /// Create a lexical error
    pub fn lex(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Lex {
            code,
            message: message.into(),
            span: None,
        }
    }

    /// Create a lexical error with a span
    pub fn lex_at(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self::Lex {
            code,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Create a structural error
    pub fn parse(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Parse {
            code,
            message: message.into(),
            span: None,
        }
    }

    /// Create a structural error with a span
    pub fn parse_at(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self::Parse {
            code,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Create an internal error
    pub fn internal(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Internal {
            code,
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Lex { code, .. } => *code,
            Self::Parse { code, .. } => *code,
            Self::Internal { code, .. } => *code,
            Self::Multiple(errors) => errors.first().map(|e| e.code()).unwrap_or(ErrorCode::new(0)),
        }
    }

    /// Get the span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Lex { span, .. } => *span,
            Self::Parse { span, .. } => *span,
            _ => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Lex { code, message, span } | Self::Parse { code, message, span } => {
                Diagnostic::error(*code, message.clone(), span.unwrap_or_default())
            }
            Self::Internal { code, message } => {
                Diagnostic::error(*code, message.clone(), Span::default())
            }
            Self::Multiple(errors) => match errors.first() {
                Some(first) => first.to_diagnostic(),
                None => Diagnostic::error(ErrorCode::new(0), "Unknown error", Span::default()),
            },
        }
    }
}

/// Build a `ScriptError` from a diagnostic emitted on the error path
impl From<Diagnostic> for ScriptError {
    fn from(diag: Diagnostic) -> Self {
        if diag.code.is_lexical() {
            ScriptError::Lex {
                code: diag.code,
                message: diag.message,
                span: Some(diag.span),
            }
        } else {
            ScriptError::Parse {
                code: diag.code,
                message: diag.message,
                span: Some(diag.span),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JB0003, JB0102, Position};

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error(
            JB0003,
            "Unterminated string literal",
            Span::new(Position::new(1, 5), Position::new(1, 12)),
        );
        let text = diag.to_string();
        assert!(text.contains("JB0003"));
        assert!(text.contains("1:5"));
        assert!(diag.is_error());
    }

    #[test]
    fn test_error_span_roundtrip() {
        let span = Span::point(Position::new(3, 1));
        let err = ScriptError::parse_at(JB0102, "Missing closing tag", span);
        assert_eq!(err.code(), JB0102);
        assert_eq!(err.span(), Some(span));
        assert_eq!(err.to_diagnostic().span, span);
    }

    #[test]
    fn test_multiple_takes_first_code() {
        let errs = ScriptError::Multiple(vec![
            ScriptError::lex(JB0003, "a"),
            ScriptError::parse(JB0102, "b"),
        ]);
        assert_eq!(errs.code(), JB0003);
    }
}
