//! Operator/kind type-inference tables
//!
//! One module per left-operand kind, each exposing `unop(op)` and
//! `binop(op, right)`, plus the top-level dispatchers. The tables reproduce
//! the legacy runtime's implicit-coercion semantics: a legal operation comes
//! back as a kind with an optional coercion warning, an operation guaranteed
//! to fail comes back as an error value. Nothing here executes anything.
//!
//! Operators outside the grammar-derived sets (unary `+`, `%`, anything
//! unrecognized) and queries with a reserved kind are caller contract
//! violations and panic instead of producing a diagnostic.

pub mod array;
pub mod binary;
pub mod boolean;
pub mod date;
pub mod dictionary;
pub mod null;
pub mod number;
pub mod string;

use crate::{TypeInfo, ValueType};

/// The fixed binary operator set covered by the tables
///
/// `&` and `|` are aliases of `&&` and `||`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    And,
    Or,
}

impl BinOp {
    fn from_symbol(op: &str) -> Option<Self> {
        Some(match op {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "^" => Self::Pow,
            "<" => Self::Lt,
            ">" => Self::Gt,
            "<=" => Self::Le,
            ">=" => Self::Ge,
            "==" => Self::Eq,
            "!=" => Self::Ne,
            "&&" | "&" => Self::And,
            "||" | "|" => Self::Or,
            _ => return None,
        })
    }

    pub(crate) const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    pub(crate) const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pow)
    }

    pub(crate) const fn is_ordering(self) -> bool {
        matches!(self, Self::Lt | Self::Gt | Self::Le | Self::Ge)
    }

    pub(crate) const fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::Ne)
    }

    pub(crate) const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

/// The unary operator set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum UnOp {
    Not,
    Neg,
    Inc,
    Dec,
}

impl UnOp {
    pub(crate) const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
            Self::Inc => "++",
            Self::Dec => "--",
        }
    }
}

pub(crate) fn parse_binop(op: &str) -> BinOp {
    BinOp::from_symbol(op)
        .unwrap_or_else(|| panic!("operator '{op}' is outside the inference operator set"))
}

pub(crate) fn parse_unop(op: &str) -> UnOp {
    match op {
        "!" => UnOp::Not,
        "-" => UnOp::Neg,
        "++" => UnOp::Inc,
        "--" => UnOp::Dec,
        "+" => panic!("unary '+' is never produced by the grammar"),
        _ => panic!("operator '{op}' is outside the inference operator set"),
    }
}

/// Infer the result of a binary operation over two operand kinds
///
/// `op` is one of `+ - * / ^ < > <= >= == != && & || |`. Panics on an
/// operator outside that set or a reserved operand kind.
pub fn binop(left: ValueType, op: &str, right: ValueType) -> TypeInfo {
    let op = parse_binop(op);
    match left {
        ValueType::Number => number::binop_op(op, right),
        ValueType::String => string::binop_op(op, right),
        ValueType::Bool => boolean::binop_op(op, right),
        ValueType::Null => null::binop_op(op, right),
        ValueType::Array => array::binop_op(op, right),
        ValueType::Dictionary => dictionary::binop_op(op, right),
        ValueType::Binary => binary::binop_op(op, right),
        ValueType::Date => date::binop_op(op, right),
        ValueType::Type | ValueType::Node => {
            panic!("no inference rules for reserved kind '{left}'")
        }
    }
}

/// Infer the result of a unary operation
///
/// `op` is one of `! - ++ --`; unary `+` is a contract violation because no
/// grammar production emits it.
pub fn unop(left: ValueType, op: &str) -> TypeInfo {
    let op = parse_unop(op);
    match left {
        ValueType::Number => number::unop_op(op),
        ValueType::String => string::unop_op(op),
        ValueType::Bool => boolean::unop_op(op),
        ValueType::Null => null::unop_op(op),
        ValueType::Array => array::unop_op(op),
        ValueType::Dictionary => dictionary::unop_op(op),
        ValueType::Binary => binary::unop_op(op),
        ValueType::Date => date::unop_op(op),
        ValueType::Type | ValueType::Node => {
            panic!("no inference rules for reserved kind '{left}'")
        }
    }
}

// === Shared table fragments ===

/// Hard error for an operator/kind pairing the runtime rejects
pub(crate) fn illegal(op: BinOp, left: ValueType, right: ValueType) -> TypeInfo {
    TypeInfo::error(format!(
        "operator '{}' is not defined for operands of type {left} and {right}",
        op.symbol()
    ))
}

/// Hard error for a unary operator the runtime rejects on this kind
pub(crate) fn illegal_unary(op: UnOp, operand: ValueType) -> TypeInfo {
    TypeInfo::error(format!(
        "operator '{}' is not defined for an operand of type {operand}",
        op.symbol()
    ))
}

/// A right-hand array broadcasts arithmetic and comparison rows
pub(crate) fn broadcast_rhs_array(op: BinOp) -> TypeInfo {
    if op.is_logical() {
        collapse_to_false(op, ValueType::Array)
    } else if op.is_arithmetic() {
        TypeInfo::warn(
            ValueType::Array,
            format!(
                "'{}' applies to each element of the array operand",
                op.symbol()
            ),
        )
    } else {
        TypeInfo::warn(
            ValueType::Array,
            format!(
                "'{}' produces an array of per-element comparison results",
                op.symbol()
            ),
        )
    }
}

/// Logical rows never error: the named operand always coerces to false
pub(crate) fn collapse_to_false(op: BinOp, operand: ValueType) -> TypeInfo {
    TypeInfo::warn(
        ValueType::Bool,
        format!(
            "the {operand} operand always evaluates to false for '{}'",
            op.symbol()
        ),
    )
}

/// Equality against null is constant at runtime
pub(crate) fn null_equality(op: BinOp) -> TypeInfo {
    match op {
        BinOp::Eq => TypeInfo::warn(ValueType::Bool, "'==' with null always evaluates to false"),
        BinOp::Ne => TypeInfo::warn(ValueType::Bool, "'!=' with null always evaluates to true"),
        _ => unreachable!("null_equality only covers '==' and '!='"),
    }
}

/// Ordering against null is constant at runtime
pub(crate) fn null_ordering(op: BinOp) -> TypeInfo {
    TypeInfo::warn(
        ValueType::Bool,
        format!("'{}' with null always evaluates to false", op.symbol()),
    )
}

/// Two operands that both coerce to constant false compare as false == false
pub(crate) fn both_collapse_equality(op: BinOp, left: ValueType, right: ValueType) -> TypeInfo {
    match op {
        BinOp::Eq => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the {left} and {right} operands are implicitly converted to false for '=='; the result is always true"
            ),
        ),
        BinOp::Ne => TypeInfo::warn(
            ValueType::Bool,
            format!(
                "the {left} and {right} operands are implicitly converted to false for '!='; the result is always false"
            ),
        ),
        _ => unreachable!("both_collapse_equality only covers '==' and '!='"),
    }
}
