//! Expression AST nodes
//!
//! Tree-only ownership: every node owns its children through
//! `Box<Spanned<Expr>>`, no sharing and no cycles.

use crate::{AssignOp, BinaryOp, BoxExpr, Identifier, Literal, OptBoxExpr, Spanned, UnaryOp};

/// All expression kinds the front end knows about
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Variable declaration (built by the runtime's desugaring, not by the
    /// surface grammar)
    VarDeclaration(VarDeclaration),
    /// Assignment (`=`, `+=`, `-=`)
    Assignment(AssignmentExpr),
    /// Binary arithmetic operation
    Binary(BinaryExpr),
    /// Unary prefix operation
    Unary(UnaryExpr),
    /// Call expression (`callee(args, ...)`)
    Call(CallExpr),
    /// Member access (`obj.prop` or `obj[expr]`)
    Member(MemberExpr),
    /// Expression sequence evaluated in order, yielding the last value
    Block(BlockExpr),
    /// Object literal (`{k: v, shorthand}`)
    ObjectLiteral(ObjectLiteral),
    /// Local identifier reference
    Identifier(Identifier),
    /// `$`-prefixed global or system variable reference
    GlobalIdentifier(GlobalIdentifier),
    /// Literal value
    Literal(Literal),
}

impl Expr {
    /// Check if this expression is a legal assignment target
    ///
    /// Target validity is checked after the left side has been parsed as a
    /// general expression.
    pub const fn is_assignable(&self) -> bool {
        matches!(
            self,
            Self::Identifier(_) | Self::GlobalIdentifier(_) | Self::Member(_)
        )
    }
}

/// Variable declaration
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration {
    /// Declared name
    pub name: Identifier,
    /// Whether the binding is constant
    pub constant: bool,
    /// Optional initializer
    pub value: OptBoxExpr,
}

/// Assignment expression
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    /// Assignment target, validated with [`Expr::is_assignable`]
    pub assignee: BoxExpr,
    /// Assignment operator
    pub op: AssignOp,
    /// Assigned value
    pub value: BoxExpr,
}

/// Binary operation expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    /// Left operand
    pub left: BoxExpr,
    /// Operator
    pub op: BinaryOp,
    /// Right operand
    pub right: BoxExpr,
}

/// Unary prefix operation
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    /// Operator
    pub op: UnaryOp,
    /// Operand
    pub operand: BoxExpr,
}

/// Call expression
///
/// Call suffixes nest to the left: `a.b()()` is a call whose callee is the
/// call `a.b()`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// Called expression
    pub callee: BoxExpr,
    /// Arguments in source order
    pub args: Vec<Spanned<Expr>>,
}

/// Member access expression
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    /// Source object
    pub object: BoxExpr,
    /// Accessed property; a bare identifier when `computed` is false
    pub property: BoxExpr,
    /// `obj[expr]` (true) vs `obj.prop` (false)
    pub computed: bool,
}

/// Expression sequence
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr {
    /// Expressions in evaluation order
    pub body: Vec<Spanned<Expr>>,
}

/// Object literal
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteral {
    /// Properties in source order
    pub properties: Vec<Spanned<Property>>,
}

/// One `key: value` (or shorthand `key`) entry of an object literal
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property key
    pub key: String,
    /// Property value; `None` for the shorthand form
    pub value: OptBoxExpr,
}

/// How a `$`-prefixed variable was classified at parse time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalVarKind {
    /// Predefined system variable found in the external registry
    System,
    /// User-defined global variable
    Global,
}

/// A `$`-prefixed variable reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalIdentifier {
    /// Variable name without the `$` sigil (empty for a bare `$`)
    pub name: String,
    /// Classification decided against the system-variable registry
    pub kind: GlobalVarKind,
}

impl GlobalIdentifier {
    /// Create a system-variable reference
    pub fn system(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: GlobalVarKind::System,
        }
    }

    /// Create a user-global reference
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: GlobalVarKind::Global,
        }
    }

    /// Source text of the reference, sigil included
    pub fn source_text(&self) -> String {
        format!("${}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jbscript_diagnostics::Span;

    fn spanned(expr: Expr) -> BoxExpr {
        Box::new(Spanned::new(expr, Span::default()))
    }

    #[test]
    fn test_assignable_targets() {
        assert!(Expr::Identifier(Identifier::new("x")).is_assignable());
        assert!(Expr::GlobalIdentifier(GlobalIdentifier::global("x")).is_assignable());
        let member = Expr::Member(MemberExpr {
            object: spanned(Expr::Identifier(Identifier::new("a"))),
            property: spanned(Expr::Identifier(Identifier::new("b"))),
            computed: false,
        });
        assert!(member.is_assignable());
        assert!(!Expr::Literal(Literal::Integer(1)).is_assignable());
        assert!(
            !Expr::Call(CallExpr {
                callee: spanned(Expr::Identifier(Identifier::new("f"))),
                args: vec![],
            })
            .is_assignable()
        );
    }

    #[test]
    fn test_global_identifier_text() {
        let g = GlobalIdentifier::system("jitterbit.operation.name");
        assert_eq!(g.source_text(), "$jitterbit.operation.name");
        assert_eq!(GlobalIdentifier::global("").source_text(), "$");
    }

    #[test]
    fn test_block_and_declaration_shapes() {
        // Runtime-side desugaring builds these nodes; make sure the shapes
        // compose the same way parser output does.
        let decl = Expr::VarDeclaration(VarDeclaration {
            name: Identifier::new("acc"),
            constant: false,
            value: Some(spanned(Expr::Literal(Literal::Integer(0)))),
        });
        let block = Expr::Block(BlockExpr {
            body: vec![
                Spanned::new(decl, Span::default()),
                Spanned::new(Expr::Identifier(Identifier::new("acc")), Span::default()),
            ],
        });
        match block {
            Expr::Block(b) => assert_eq!(b.body.len(), 2),
            _ => unreachable!(),
        }
    }
}
