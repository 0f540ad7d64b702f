//! Inference rules for an array left operand
//!
//! Arrays broadcast: arithmetic and comparison rows apply per element and
//! return an array, whatever the other operand is. Logical rows collapse the
//! array to false like every other non-scalar kind.

use super::{BinOp, UnOp, parse_binop, parse_unop};
use crate::{TypeInfo, ValueType};

/// Infer `array <op> right`
pub fn binop(op: &str, right: ValueType) -> TypeInfo {
    binop_op(parse_binop(op), right)
}

/// Infer `<op> array`
pub fn unop(op: &str) -> TypeInfo {
    unop_op(parse_unop(op))
}

pub(crate) fn binop_op(op: BinOp, right: ValueType) -> TypeInfo {
    if right.is_reserved() {
        panic!("no inference rules for reserved kind '{right}'");
    }
    if op.is_logical() {
        if right == ValueType::Array {
            return TypeInfo::warn(
                ValueType::Bool,
                format!(
                    "array operands always evaluate to false for '{}'",
                    op.symbol()
                ),
            );
        }
        return TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the array operand always evaluates to false for '{}'",
                op.symbol()
            ),
        );
    }
    if op.is_arithmetic() {
        if right == ValueType::Array {
            return TypeInfo::warn(
                ValueType::Array,
                format!(
                    "'{}' applies element-wise to the paired array elements",
                    op.symbol()
                ),
            );
        }
        return TypeInfo::warn(
            ValueType::Array,
            format!("'{}' applies to each element of the array", op.symbol()),
        );
    }
    TypeInfo::warn(
        ValueType::Array,
        format!(
            "'{}' produces an array of per-element comparison results",
            op.symbol()
        ),
    )
}

pub(crate) fn unop_op(op: UnOp) -> TypeInfo {
    match op {
        UnOp::Not => TypeInfo::warn(
            ValueType::Bool,
            "the array operand always evaluates to false; '!' is always true",
        ),
        UnOp::Neg => TypeInfo::warn(
            ValueType::Array,
            "'-' applies to each element of the array",
        ),
        UnOp::Inc | UnOp::Dec => TypeInfo::warn(
            ValueType::Array,
            format!("'{}' applies to each element of the array", op.symbol()),
        ),
    }
}
