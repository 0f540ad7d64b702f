//! Inference rules for a null left operand
//!
//! Null folds to 0 for `+ - *` against numbers and to the empty string in
//! concatenation, but dividing or exponentiating a null left operand is a
//! hard error. Every comparison involving null is constant at runtime, so
//! even the same-kind cells warn.

use super::{
    BinOp, UnOp, broadcast_rhs_array, collapse_to_false, illegal, null_equality, null_ordering,
    parse_binop, parse_unop,
};
use crate::{TypeInfo, ValueType};

const LEFT: ValueType = ValueType::Null;

/// Infer `null <op> right`
pub fn binop(op: &str, right: ValueType) -> TypeInfo {
    binop_op(parse_binop(op), right)
}

/// Infer `<op> null`
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
            "null always evaluates to false; '!' is always true",
        ),
        UnOp::Neg => TypeInfo::warn(
            ValueType::Number,
            "the null operand is implicitly treated as 0",
        ),
        UnOp::Inc | UnOp::Dec => TypeInfo::warn(
            ValueType::Number,
            format!(
                "the null operand is implicitly treated as 0 for '{}'",
                op.symbol()
            ),
        ),
    }
}

/// `/` and `^` reject a null left operand; `+ - *` fold it to 0
fn fold_arithmetic(op: BinOp, right: ValueType, folded: TypeInfo) -> TypeInfo {
    match op {
        BinOp::Div | BinOp::Pow => illegal(op, LEFT, right),
        _ => folded,
    }
}

fn vs_null(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        fold_arithmetic(
            op,
            ValueType::Null,
            TypeInfo::warn(
                ValueType::Number,
                format!(
                    "both null operands are implicitly treated as 0 for '{}'",
                    op.symbol()
                ),
            ),
        )
    } else if op.is_logical() {
        TypeInfo::warn(
            ValueType::Bool,
            format!(
                "null operands always evaluate to false for '{}'",
                op.symbol()
            ),
        )
    } else if op.is_equality() {
        null_equality(op)
    } else {
        null_ordering(op)
    }
}

fn vs_number(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        fold_arithmetic(
            op,
            ValueType::Number,
            TypeInfo::warn(
                ValueType::Number,
                format!(
                    "the null operand is implicitly treated as 0 for '{}'",
                    op.symbol()
                ),
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

fn vs_string(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::warn(
            ValueType::String,
            "the null operand is implicitly converted to the empty string for '+'",
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::String),
        _ if op.is_logical() => collapse_to_false(op, ValueType::Null),
        _ if op.is_equality() => null_equality(op),
        _ => null_ordering(op),
    }
}

fn vs_bool(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, ValueType::Bool)
    } else if op.is_logical() {
        collapse_to_false(op, ValueType::Null)
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
        collapse_to_false(op, ValueType::Dictionary)
    } else if op.is_equality() {
        null_equality(op)
    } else {
        null_ordering(op)
    }
}

fn vs_binary(op: BinOp) -> TypeInfo {
    if op.is_arithmetic() {
        illegal(op, LEFT, ValueType::Binary)
    } else if op.is_logical() {
        collapse_to_false(op, ValueType::Binary)
    } else if op.is_equality() {
        null_equality(op)
    } else {
        null_ordering(op)
    }
}

fn vs_date(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Add => TypeInfo::warn(
            ValueType::Date,
            "the null operand is implicitly treated as 0 seconds for '+'",
        ),
        _ if op.is_arithmetic() => illegal(op, LEFT, ValueType::Date),
        _ if op.is_logical() => collapse_to_false(op, ValueType::Date),
        _ if op.is_equality() => null_equality(op),
        _ => null_ordering(op),
    }
}
