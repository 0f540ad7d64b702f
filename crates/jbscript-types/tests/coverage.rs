//! Exhaustive coverage of the inference tables
//!
//! Covers:
//! - Every kind pair x every binary operator terminates and returns exactly
//!   one of legal-no-warning / legal-with-warning / error
//! - The exactly-one-field invariant of TypeInfo
//! - Determinism of binop/unop
//! - Logical rows never error
//! - Contract violations panic instead of returning diagnostics

use jbscript_types::{ValueType, binop, unop};

const BINARY_OPS: [&str; 14] = [
    "+", "-", "*", "/", "^", "<", ">", "<=", ">=", "==", "!=", "&&", "&", "||",
];

const UNARY_OPS: [&str; 4] = ["!", "-", "++", "--"];

#[test]
fn test_every_cell_returns_exactly_one_outcome() {
    for left in ValueType::INFERABLE {
        for right in ValueType::INFERABLE {
            for op in BINARY_OPS {
                let info = binop(left, op, right);
                match (info.kind(), info.warning(), info.error_message()) {
                    (Some(_), None, None) => {}
                    (Some(_), Some(w), None) => assert!(!w.is_empty()),
                    (None, None, Some(e)) => assert!(!e.is_empty()),
                    other => panic!("{left} {op} {right} returned an invalid shape: {other:?}"),
                }
                assert_eq!(info.is_error(), info.error_message().is_some());
            }
        }
    }
}

#[test]
fn test_every_unary_cell_returns_exactly_one_outcome() {
    for left in ValueType::INFERABLE {
        for op in UNARY_OPS {
            let info = unop(left, op);
            match (info.kind(), info.warning(), info.error_message()) {
                (Some(_), None, None) => {}
                (Some(_), Some(w), None) => assert!(!w.is_empty()),
                (None, None, Some(e)) => assert!(!e.is_empty()),
                other => panic!("{op} {left} returned an invalid shape: {other:?}"),
            }
        }
    }
}

#[test]
fn test_binop_is_deterministic() {
    for left in ValueType::INFERABLE {
        for right in ValueType::INFERABLE {
            for op in BINARY_OPS {
                assert_eq!(binop(left, op, right), binop(left, op, right));
            }
        }
    }
}

#[test]
fn test_unop_is_deterministic() {
    for left in ValueType::INFERABLE {
        for op in UNARY_OPS {
            assert_eq!(unop(left, op), unop(left, op));
        }
    }
}

#[test]
fn test_logical_rows_never_error() {
    for left in ValueType::INFERABLE {
        for right in ValueType::INFERABLE {
            for op in ["&&", "&", "||", "|"] {
                let info = binop(left, op, right);
                assert!(
                    !info.is_error(),
                    "{left} {op} {right} must not be an error"
                );
                assert_eq!(info.kind(), Some(ValueType::Bool));
            }
        }
    }
}

#[test]
fn test_ampersand_and_pipe_alias_double_forms() {
    for left in ValueType::INFERABLE {
        for right in ValueType::INFERABLE {
            assert_eq!(binop(left, "&", right), binop(left, "&&", right));
            assert_eq!(binop(left, "|", right), binop(left, "||", right));
        }
    }
}

#[test]
#[should_panic(expected = "outside the inference operator set")]
fn test_modulo_is_a_contract_violation() {
    binop(ValueType::Number, "%", ValueType::Number);
}

#[test]
#[should_panic(expected = "never produced by the grammar")]
fn test_unary_plus_is_a_contract_violation() {
    unop(ValueType::Number, "+");
}

#[test]
#[should_panic(expected = "reserved kind")]
fn test_reserved_left_kind_panics() {
    binop(ValueType::Type, "+", ValueType::Number);
}

#[test]
#[should_panic(expected = "reserved kind")]
fn test_reserved_right_kind_panics() {
    binop(ValueType::Number, "+", ValueType::Node);
}
