//! Inference rules for a string left operand
//!
//! `+` is native concatenation and the comparison column is warning-free
//! against another string; every other arithmetic operator is illegal on
//! strings. Truthiness coercion warns even for the same-kind logical cells.

use super::{
    BinOp, UnOp, broadcast_rhs_array, collapse_to_false, illegal, null_equality, null_ordering,
    parse_binop, parse_unop,
};
use crate::{TypeInfo, ValueType};

const LEFT: ValueType = ValueType::String;

/// Infer `string <op> right`
pub fn binop(op: &str, right: ValueType) -> TypeInfo {
    binop_op(parse_binop(op), right)
}

/// Infer `<op> string`
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
            "the string operand is implicitly converted to bool for '!'",
        ),
        UnOp::Neg => TypeInfo::error("a string cannot be negated; convert it to a number first"),
        UnOp::Inc | UnOp::Dec => TypeInfo::error(format!(
            "'{}' requires a numeric operand, found string",
            op.symbol()
        )),
    }
}

fn string_truthiness(op: BinOp) -> TypeInfo {
    TypeInfo::warn(
        ValueType::Bool,
        format!(
            "the string operand is implicitly converted to bool for '{}'",
            op.symbol()
        ),
    )
}

fn vs_string(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::of(ValueType::String),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::String),
        // Same-kind logical still warns: both sides coerce via truthiness.
        _ if op.is_logical() => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "both string operands are implicitly converted to bool for '{}'",
                op.symbol()
            ),
        ),
        _ => TypeInfo::of(ValueType::Bool),
    }
}

fn vs_number(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::warn(
            ValueType::String,
            "the number operand is implicitly converted to a string; '+' performs string concatenation",
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::Number),
        _ if op.is_logical() => string_truthiness(op),
        _ => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the string operand is implicitly converted to a number for '{}'",
                op.symbol()
            ),
        ),
    }
}

fn vs_bool(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::warn(
            ValueType::String,
            "the bool operand is implicitly converted to a string ('1' or '0'); '+' performs string concatenation",
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::Bool),
        _ if op.is_ordering() => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the string and bool operands are implicitly converted to numbers for '{}'",
                op.symbol()
            ),
        ),
        _ => string_truthiness(op),
    }
}

fn vs_null(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::warn(
            ValueType::String,
            "the null operand is implicitly converted to the empty string for '+'",
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::Null),
        _ if op.is_logical() => collapse_to_false(op, ValueType::Null),
        _ if op.is_equality() => null_equality(op),
        _ => null_ordering(op),
    }
}

fn vs_dictionary(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, ValueType::Dictionary)
    } else if op.is_logical() {
        collapse_to_false(op, ValueType::Dictionary)
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
        // Binary data cannot be ordered against or compared with a string.
        illegal(op, LEFT, ValueType::Binary)
    }
}

fn vs_date(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::warn(
            ValueType::String,
            "the date operand is implicitly converted to a string; '+' performs string concatenation",
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::Date),
        _ if op.is_logical() => collapse_to_false(op, ValueType::Date),
        _ => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the string operand is implicitly converted to a date for '{}'",
                op.symbol()
            ),
        ),
    }
}
