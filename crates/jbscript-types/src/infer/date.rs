//! Inference rules for a date left operand
//!
//! Date subtraction is native: `date - date` is a warning-free number of
//! days, and the comparison column against another date is clean. Offsets
//! by a number of seconds are legal but warn; everything else in the
//! arithmetic rows is illegal.

use super::{
    BinOp, UnOp, both_collapse_equality, broadcast_rhs_array, collapse_to_false, illegal,
    illegal_unary, null_equality, null_ordering, parse_binop, parse_unop,
};
use crate::{TypeInfo, ValueType};

const LEFT: ValueType = ValueType::Date;

/// Infer `date <op> right`
pub fn binop(op: &str, right: ValueType) -> TypeInfo {
    binop_op(parse_binop(op), right)
}

/// Infer `<op> date`
pub fn unop(op: &str) -> TypeInfo {
    unop_op(parse_unop(op))
}

pub(crate) fn binop_op(op: BinOp, right: ValueType) -> TypeInfo {
    match right {
        ValueType::Number => vs_number(op),
        ValueType::String => vs_string(op),
        ValueType::Bool => vs_bool(op),
        ValueType::Null => vs_null(op),
        ValueType::Array => broadcast_rhs_array(op),
        ValueType::Dictionary => vs_dictionary(op),
        ValueType::Binary => vs_binary(op),
        ValueType::Date => vs_date(op),
        ValueType::Type | ValueType::Node => {
            panic!("no inference rules for reserved kind '{right}'")
        }
    }
}

pub(crate) fn unop_op(op: UnOp) -> TypeInfo {
    match op {
        UnOp::Not => TypeInfo::warn(
            ValueType::Bool,
            "the date operand always evaluates to false; '!' is always true",
        ),
        UnOp::Neg => illegal_unary(op, LEFT),
        UnOp::Inc | UnOp::Dec => TypeInfo::error(format!(
            "'{}' requires a numeric operand, found date",
            op.symbol()
        )),
    }
}

fn vs_date(op: BinOp) -> TypeInfo {
    match op {
        // Difference between two dates is a number of days.
        BinOp::Sub => TypeInfo::of(ValueType::Number),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::Date),
        _ if op.is_logical() => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "date operands always evaluate to false for '{}'",
                op.symbol()
            ),
        ),
        _ => TypeInfo::of(ValueType::Bool),
    }
}

fn vs_number(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::warn(
            ValueType::Date,
            "the number operand is added to the date as a number of seconds",
        ),
        BinOp::Sub => TypeInfo::warn(
            ValueType::Date,
            "the number operand is subtracted from the date as a number of seconds",
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::Number),
        _ if op.is_logical() => collapse_to_false(op, LEFT),
        _ => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the date operand is implicitly converted to a number of seconds for '{}'",
                op.symbol()
            ),
        ),
    }
}

fn vs_string(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::warn(
            ValueType::String,
            "the date operand is implicitly converted to a string; '+' performs string concatenation",
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::String),
        _ if op.is_logical() => collapse_to_false(op, LEFT),
        _ => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the string operand is implicitly converted to a date for '{}'",
                op.symbol()
            ),
        ),
    }
}

fn vs_bool(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, ValueType::Bool)
    } else if op.is_logical() {
        collapse_to_false(op, LEFT)
    } else {
        TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the date operand is implicitly converted to false for '{}'",
                op.symbol()
            ),
        )
    }
}

fn vs_null(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add | BinOp::Sub => TypeInfo::warn(
            ValueType::Date,
            format!(
                "the null operand is implicitly treated as 0 seconds for '{}'",
                op.symbol()
            ),
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::Null),
        _ if op.is_logical() => collapse_to_false(op, LEFT),
        _ if op.is_equality() => null_equality(op),
        _ => null_ordering(op),
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
                "the dictionary operand is implicitly converted to false for '{}'",
                op.symbol()
            ),
        )
    }
}

fn vs_binary(op: BinOp) -> TypeInfo {
    if op.is_logical() {
        collapse_to_false(op, ValueType::Binary)
    } else {
        // Binary data cannot be ordered against or compared with a date.
        illegal(op, LEFT, ValueType::Binary)
    }
}
