//! Inference rules for a number left operand
//!
//! Number is the native kind for arithmetic, comparison and truthiness, so
//! the same-kind column is warning-free. Cross-kind cells mostly coerce the
//! other operand toward number semantics; string concatenation and date
//! offsets are the exceptions.

use super::{
    BinOp, UnOp, broadcast_rhs_array, collapse_to_false, illegal, null_equality, parse_binop,
    parse_unop,
};
use crate::{TypeInfo, ValueType};

const LEFT: ValueType = ValueType::Number;

/// Infer `number <op> right`
pub fn binop(op: &str, right: ValueType) -> TypeInfo {
    binop_op(parse_binop(op), right)
}

/// Infer `<op> number`
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
        UnOp::Neg | UnOp::Inc | UnOp::Dec => TypeInfo::of(ValueType::Number),
    }
}

fn vs_number(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        TypeInfo::of(ValueType::Number)
    } else {
        TypeInfo::of(ValueType::Bool)
    }
}

fn vs_string(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::warn(
            ValueType::String,
            "the number operand is implicitly converted to a string; '+' performs string concatenation",
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::String),
        _ if op.is_logical() => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the string operand is implicitly converted to bool for '{}'",
                op.symbol()
            ),
        ),
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
    if op.is_arithmetic() {
        illegal(op, LEFT, ValueType::Bool)
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

fn vs_null(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        // The null operand folds to 0 on the number side of every
        // arithmetic operator, division included.
        TypeInfo::warn(
            ValueType::Number,
            format!(
                "the null operand is implicitly treated as 0 for '{}'",
                op.symbol()
            ),
        )
    } else if op.is_logical() {
        collapse_to_false(op, ValueType::Null)
    } else if op.is_equality() {
        null_equality(op)
    } else {
        TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the null operand is implicitly treated as 0 for '{}'",
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
    if op.is_logical() {
        collapse_to_false(op, ValueType::Binary)
    } else {
        // Binary data cannot be ordered against or compared with a number.
        illegal(op, LEFT, ValueType::Binary)
    }
}

fn vs_date(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::warn(
            ValueType::Date,
            "the number operand is added to the date as a number of seconds",
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::Date),
        _ if op.is_logical() => collapse_to_false(op, ValueType::Date),
        _ => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the date operand is implicitly converted to a number of seconds for '{}'",
                op.symbol()
            ),
        ),
    }
}
