//! jbscript error codes following a structured numbering system
//!
//! Error code ranges:
//! - JB0001-JB0099: Lexical errors and warnings (scanner)
//! - JB0100-JB0199: Structural errors and warnings (parser)
//! - JB0200-JB0299: Semantic diagnostics (type inference)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a lexical diagnostic (0001-0099)
    pub const fn is_lexical(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a structural diagnostic (0100-0199)
    pub const fn is_structural(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a semantic diagnostic (0200-0299)
    pub const fn is_semantic(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JB{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the condition
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

// === Well-known codes ===

// Lexical (0001-0099)
/// Unknown token
pub const JB0001: ErrorCode = ErrorCode::new(1);
/// Undefined token (malformed float literal)
pub const JB0002: ErrorCode = ErrorCode::new(2);
/// Unterminated string literal
pub const JB0003: ErrorCode = ErrorCode::new(3);
/// Duplicate scope-open tag
pub const JB0004: ErrorCode = ErrorCode::new(4);
/// Duplicate scope-close tag
pub const JB0005: ErrorCode = ErrorCode::new(5);
/// Self-closing comment disables the rest of the script
pub const JB0006: ErrorCode = ErrorCode::new(6);

// Structural (0100-0199)
/// Unexpected token
pub const JB0100: ErrorCode = ErrorCode::new(100);
/// Unexpected end of input
pub const JB0101: ErrorCode = ErrorCode::new(101);
/// Missing closing scope tag
pub const JB0102: ErrorCode = ErrorCode::new(102);
/// No scope-open tag in the document
pub const JB0103: ErrorCode = ErrorCode::new(103);
/// Content before the scope-open tag
pub const JB0104: ErrorCode = ErrorCode::new(104);
/// Content after the scope-close tag
pub const JB0105: ErrorCode = ErrorCode::new(105);
/// Invalid assignment target
pub const JB0106: ErrorCode = ErrorCode::new(106);
/// Member access right side must be an identifier
pub const JB0107: ErrorCode = ErrorCode::new(107);
/// Malformed object literal
pub const JB0108: ErrorCode = ErrorCode::new(108);
/// Bare `$` global variable
pub const JB0109: ErrorCode = ErrorCode::new(109);
/// Unrecognized name in the reserved system namespace
pub const JB0110: ErrorCode = ErrorCode::new(110);

// Semantic (0200-0299)
/// Implicit conversion warning
pub const JB0200: ErrorCode = ErrorCode::new(200);
/// Illegal operation for operand types
pub const JB0201: ErrorCode = ErrorCode::new(201);

// Static error info storage
static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

use std::collections::HashMap;
use std::sync::LazyLock;

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Lexical (0001-0099)
    map.insert(1, ErrorInfo::new("Unknown token"));
    map.insert(2, ErrorInfo::new("Undefined token"));
    map.insert(3, ErrorInfo::new("Unterminated string literal"));
    map.insert(
        4,
        ErrorInfo::new("Duplicate scope-open tag")
            .with_help("Only the first <trans> tag is honored"),
    );
    map.insert(
        5,
        ErrorInfo::new("Duplicate scope-close tag")
            .with_help("Only the first </trans> tag is honored"),
    );
    map.insert(
        6,
        ErrorInfo::new("Self-closing comment")
            .with_help("'/*/' disables everything after it; use '/* ... */'"),
    );

    // Structural (0100-0199)
    map.insert(100, ErrorInfo::new("Unexpected token"));
    map.insert(101, ErrorInfo::new("Unexpected end of input"));
    map.insert(102, ErrorInfo::new("Missing closing scope tag"));
    map.insert(103, ErrorInfo::new("No scope-open tag in the document"));
    map.insert(104, ErrorInfo::new("Content before the scope-open tag is ignored"));
    map.insert(105, ErrorInfo::new("Content after the scope-close tag is ignored"));
    map.insert(106, ErrorInfo::new("Invalid assignment target"));
    map.insert(107, ErrorInfo::new("Member access right side must be an identifier"));
    map.insert(108, ErrorInfo::new("Malformed object literal"));
    map.insert(
        109,
        ErrorInfo::new("Bare '$' global variable")
            .with_help("Name the variable, e.g. $my.var"),
    );
    map.insert(
        110,
        ErrorInfo::new("Unrecognized name in the reserved system namespace"),
    );

    // Semantic (0200-0299)
    map.insert(200, ErrorInfo::new("Implicit conversion"));
    map.insert(201, ErrorInfo::new("Illegal operation for operand types"));

    map
});
