//! Per-query result record of the inference engine

use crate::ValueType;
use serde::Serialize;

/// The statically known outcome of applying an operator to operand kinds
///
/// Invariant: exactly one of `kind`/`error` is set, and `warning` is only
/// set alongside `kind`. The constructors are the only way to build one, so
/// the invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    kind: Option<ValueType>,
    warning: Option<String>,
    error: Option<String>,
}

impl TypeInfo {
    /// A legal operation with no coercion
    pub fn of(kind: ValueType) -> Self {
        Self {
            kind: Some(kind),
            warning: None,
            error: None,
        }
    }

    /// A legal operation that performs an implicit runtime coercion
    pub fn warn(kind: ValueType, warning: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            warning: Some(warning.into()),
            error: None,
        }
    }

    /// An operation guaranteed to fail at runtime
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            kind: None,
            warning: None,
            error: Some(error.into()),
        }
    }

    /// Result kind; `None` when the operation is an error
    pub fn kind(&self) -> Option<ValueType> {
        self.kind
    }

    /// Coercion warning, if any
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Hard error, if any
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Check if the operation is guaranteed to fail
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Check if the operation is legal but coercing
    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_field() {
        let ok = TypeInfo::of(ValueType::Number);
        assert_eq!(ok.kind(), Some(ValueType::Number));
        assert!(!ok.is_error() && !ok.has_warning());

        let warn = TypeInfo::warn(ValueType::Bool, "implicit conversion");
        assert_eq!(warn.kind(), Some(ValueType::Bool));
        assert!(warn.has_warning() && !warn.is_error());

        let err = TypeInfo::error("illegal operation");
        assert_eq!(err.kind(), None);
        assert!(err.is_error() && !err.has_warning());
    }
}
