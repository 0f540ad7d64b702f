//! jbscript type system
//!
//! The static classification of runtime values (`ValueType`) and the
//! operator/kind type-inference tables (`infer`). The engine predicts, for
//! every operator and operand-kind pairing, the runtime result kind plus the
//! implicit-coercion warning or hard error the legacy runtime produces,
//! without executing anything.

pub mod infer;
mod type_info;
mod value_type;

pub use infer::{binop, unop};
pub use type_info::TypeInfo;
pub use value_type::ValueType;
