//! Runtime value classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// The static classification of a runtime value
///
/// Purely a classification used for inference; it never reifies an actual
/// value. `Type` and `Node` are reserved for schema descriptors and tree
/// nodes and have no inference rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Double-precision number
    Number,
    /// Unicode string
    String,
    /// Boolean
    Bool,
    /// Null / void
    Null,
    /// Ordered collection
    Array,
    /// Keyed collection
    Dictionary,
    /// Raw bytes
    Binary,
    /// Calendar timestamp
    Date,
    /// Reserved: schema type descriptor
    Type,
    /// Reserved: document tree node
    Node,
}

impl ValueType {
    /// The eight kinds the inference tables cover
    pub const INFERABLE: [ValueType; 8] = [
        ValueType::Number,
        ValueType::String,
        ValueType::Bool,
        ValueType::Null,
        ValueType::Array,
        ValueType::Dictionary,
        ValueType::Binary,
        ValueType::Date,
    ];

    /// Lowercase name of the kind
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Null => "null",
            Self::Array => "array",
            Self::Dictionary => "dictionary",
            Self::Binary => "binary",
            Self::Date => "date",
            Self::Type => "type",
            Self::Node => "node",
        }
    }

    /// Look up a kind from its name; `void` is accepted as an alias of null
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "number" => Some(Self::Number),
            "string" => Some(Self::String),
            "bool" => Some(Self::Bool),
            "null" | "void" => Some(Self::Null),
            "array" => Some(Self::Array),
            "dictionary" => Some(Self::Dictionary),
            "binary" => Some(Self::Binary),
            "date" => Some(Self::Date),
            "type" => Some(Self::Type),
            "node" => Some(Self::Node),
            _ => None,
        }
    }

    /// Check if this is one of the reserved classifications
    pub const fn is_reserved(&self) -> bool {
        matches!(self, Self::Type | Self::Node)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
