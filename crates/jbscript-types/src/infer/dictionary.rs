//! Inference rules for a dictionary left operand
//!
//! Dictionaries take part in no arithmetic at all. Comparisons coerce the
//! dictionary to false; two constant-false operands make `==` constant.

use super::{
    BinOp, UnOp, both_collapse_equality, broadcast_rhs_array, collapse_to_false, illegal,
    illegal_unary, null_equality, null_ordering, parse_binop, parse_unop,
};
use crate::{TypeInfo, ValueType};

const LEFT: ValueType = ValueType::Dictionary;

/// Infer `dictionary <op> right`
pub fn binop(op: &str, right: ValueType) -> TypeInfo {
    binop_op(parse_binop(op), right)
}

/// Infer `<op> dictionary`
pub fn unop(op: &str) -> TypeInfo {
    unop_op(parse_unop(op))
}

pub(crate) fn binop_op(op: BinOp, right: ValueType) -> TypeInfo {
    match right {
        ValueType::Number => vs_scalar(op, ValueType::Number),
        ValueType::String => vs_scalar(op, ValueType::String),
        ValueType::Bool => vs_scalar(op, ValueType::Bool),
        ValueType::Null => vs_null(op),
        ValueType::Array => broadcast_rhs_array(op),
        ValueType::Dictionary => vs_dictionary(op),
        ValueType::Binary => vs_collapsing(op, ValueType::Binary),
        ValueType::Date => vs_collapsing(op, ValueType::Date),
        ValueType::Type | ValueType::Node => {
            panic!("no inference rules for reserved kind '{right}'")
        }
    }
}

pub(crate) fn unop_op(op: UnOp) -> TypeInfo {
    match op {
        UnOp::Not => TypeInfo::warn(
            ValueType::Bool,
            "the dictionary operand always evaluates to false; '!' is always true",
        ),
        UnOp::Neg => illegal_unary(op, LEFT),
        UnOp::Inc | UnOp::Dec => TypeInfo::error(format!(
            "'{}' requires a numeric operand, found dictionary",
            op.symbol()
        )),
    }
}

fn dictionary_comparison(op: BinOp) -> TypeInfo {
    TypeInfo::warn(
        ValueType::Bool,
        format!(
            "the dictionary operand is implicitly converted to false for '{}'",
            op.symbol()
        ),
    )
}

/// Against number, string and bool the dictionary side collapses to false
fn vs_scalar(op: BinOp, right: ValueType) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, right)
    } else if op.is_logical() {
        collapse_to_false(op, LEFT)
    } else {
        dictionary_comparison(op)
    }
}

fn vs_null(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, ValueType::Null)
    } else if op.is_logical() {
        collapse_to_false(op, LEFT)
    } else if op.is_equality() {
        null_equality(op)
    } else {
        null_ordering(op)
    }
}

fn vs_dictionary(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, ValueType::Dictionary)
    } else if op.is_logical() {
        TypeInfo::warn(
            ValueType::Bool,
            format!(
                "dictionary operands always evaluate to false for '{}'",
                op.symbol()
            ),
        )
    } else if op.is_equality() {
        both_collapse_equality(op, LEFT, ValueType::Dictionary)
    } else {
        dictionary_comparison(op)
    }
}

/// Against another constant-false kind `==`/`!=` are constant
fn vs_collapsing(op: BinOp, right: ValueType) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, right)
    } else if op.is_logical() {
        collapse_to_false(op, LEFT)
    } else if op.is_equality() {
        both_collapse_equality(op, LEFT, right)
    } else {
        dictionary_comparison(op)
    }
}
