//! Inference rules for a binary left operand
//!
//! Raw bytes only support `==`/`!=` against other raw bytes. Comparing
//! binary data with numbers, strings or dates is illegal outright, not
//! merely surprising; bool, null and dictionary comparisons go through the
//! usual constant-false coercion.

use super::{
    BinOp, UnOp, both_collapse_equality, broadcast_rhs_array, collapse_to_false, illegal,
    illegal_unary, null_equality, null_ordering, parse_binop, parse_unop,
};
use crate::{TypeInfo, ValueType};

const LEFT: ValueType = ValueType::Binary;

/// Infer `binary <op> right`
pub fn binop(op: &str, right: ValueType) -> TypeInfo {
    binop_op(parse_binop(op), right)
}

/// Infer `<op> binary`
pub fn unop(op: &str) -> TypeInfo {
    unop_op(parse_unop(op))
}

pub(crate) fn binop_op(op: BinOp, right: ValueType) -> TypeInfo {
    match right {
        ValueType::Number => vs_illegal_comparisons(op, ValueType::Number),
        ValueType::String => vs_illegal_comparisons(op, ValueType::String),
        ValueType::Bool => vs_coercing(op, ValueType::Bool),
        ValueType::Null => vs_null(op),
        ValueType::Array => broadcast_rhs_array(op),
        ValueType::Dictionary => vs_dictionary(op),
        ValueType::Binary => vs_binary(op),
        ValueType::Date => vs_illegal_comparisons(op, ValueType::Date),
        ValueType::Type | ValueType::Node => {
            panic!("no inference rules for reserved kind '{right}'")
        }
    }
}

pub(crate) fn unop_op(op: UnOp) -> TypeInfo {
    match op {
        UnOp::Not => TypeInfo::warn(
            ValueType::Bool,
            "the binary operand always evaluates to false; '!' is always true",
        ),
        UnOp::Neg => illegal_unary(op, LEFT),
        UnOp::Inc | UnOp::Dec => TypeInfo::error(format!(
            "'{}' requires a numeric operand, found binary",
            op.symbol()
        )),
    }
}

fn vs_binary(op: BinOp) -> TypeInfo {
    if op.is_equality() {
        TypeInfo::of(ValueType::Bool)
    } else if op.is_logical() {
        TypeInfo::warn(
            ValueType::Bool,
            format!(
                "binary operands always evaluate to false for '{}'",
                op.symbol()
            ),
        )
    } else {
        illegal(op, LEFT, ValueType::Binary)
    }
}

/// Number, string and date: only the logical row is legal
fn vs_illegal_comparisons(op: BinOp, right: ValueType) -> TypeInfo {
    if op.is_logical() {
        collapse_to_false(op, LEFT)
    } else {
        illegal(op, LEFT, right)
    }
}

fn vs_coercing(op: BinOp, right: ValueType) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, right)
    } else if op.is_logical() {
        collapse_to_false(op, LEFT)
    } else {
        TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the binary operand is implicitly converted to false for '{}'",
                op.symbol()
            ),
        )
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
        collapse_to_false(op, LEFT)
    } else if op.is_equality() {
        both_collapse_equality(op, LEFT, ValueType::Dictionary)
    } else {
        TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the binary operand is implicitly converted to false for '{}'",
                op.symbol()
            ),
        )
    }
}
