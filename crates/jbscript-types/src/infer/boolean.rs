//! Inference rules for a bool left operand
//!
//! Bool is native for equality and logic; ordering two bools is the one
//! instructive user error in the tables, and bool arithmetic is illegal
//! outright.

use super::{
    BinOp, UnOp, broadcast_rhs_array, collapse_to_false, illegal, null_equality, parse_binop,
    parse_unop,
};
use crate::{TypeInfo, ValueType};

const LEFT: ValueType = ValueType::Bool;

/// Infer `bool <op> right`
pub fn binop(op: &str, right: ValueType) -> TypeInfo {
    binop_op(parse_binop(op), right)
}

/// Infer `<op> bool`
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
        UnOp::Not => TypeInfo::of(ValueType::Bool),
        UnOp::Neg => TypeInfo::error("a bool cannot be negated; convert it to a number first"),
        UnOp::Inc | UnOp::Dec => TypeInfo::error(format!(
            "'{}' requires a numeric operand, found bool",
            op.symbol()
        )),
    }
}

fn vs_bool(op: BinOp) -> TypeInfo {
    if op.is_equality() || op.is_logical() {
        TypeInfo::of(ValueType::Bool)
    } else if op.is_ordering() {
        TypeInfo::error(format!(
            "bool operands cannot be ordered with '{}'; convert them to numbers first",
            op.symbol()
        ))
    } else {
        illegal(op, LEFT, ValueType::Bool)
    }
}

fn vs_number(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, ValueType::Number)
    } else if op.is_logical() {
        TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the number operand is implicitly converted to bool (0 = false) for '{}'",
                op.symbol()
            ),
        )
    } else {
        TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the bool operand is implicitly converted to a number (false = 0, true = 1) for '{}'",
                op.symbol()
            ),
        )
    }
}

fn vs_string(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::warn(
            ValueType::String,
            "the bool operand is implicitly converted to a string ('1' or '0'); '+' performs string concatenation",
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::String),
        _ if op.is_ordering() => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the bool and string operands are implicitly converted to numbers for '{}'",
                op.symbol()
            ),
        ),
        _ => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the string operand is implicitly converted to bool for '{}'",
                op.symbol()
            ),
        ),
    }
}

fn vs_null(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, ValueType::Null)
    } else if op.is_logical() {
        collapse_to_false(op, ValueType::Null)
    } else if op.is_equality() {
        null_equality(op)
    } else {
        TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the null operand is implicitly converted to false for '{}'",
                op.symbol()
            ),
        )
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
    if op.is_arithmetic() {
        illegal(op, LEFT, ValueType::Binary)
    } else if op.is_logical() {
        collapse_to_false(op, ValueType::Binary)
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

fn vs_date(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, ValueType::Date)
    } else if op.is_logical() {
        collapse_to_false(op, ValueType::Date)
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
