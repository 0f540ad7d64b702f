//! Tests for parsing literal values
//!
//! Covers integers, floats (including leading-dot and unary-negated forms),
//! strings and booleans.

use jbscript_ast::{Expr, Literal, Program, UnaryOp};
use jbscript_parser::parse;
use pretty_assertions::assert_eq;

fn parse_body(source: &str) -> Program {
    parse(source).unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
}

fn single_expr(source: &str) -> Expr {
    let program = parse_body(source);
    assert_eq!(program.body.len(), 1, "expected one expression");
    program.body.into_iter().next().expect("expression").inner
}

fn assert_literal(expr: &Expr) -> &Literal {
    match expr {
        Expr::Literal(lit) => lit,
        _ => panic!("expected a literal, got: {expr:?}"),
    }
}

#[test]
fn test_integer_literal() {
    let expr = single_expr("<trans> 42; </trans>");
    assert_eq!(assert_literal(&expr), &Literal::Integer(42));
}

#[test]
fn test_float_literal() {
    let expr = single_expr("<trans> 3.25; </trans>");
    assert_eq!(assert_literal(&expr), &Literal::Float(3.25));
}

#[test]
fn test_leading_dot_float() {
    let expr = single_expr("<trans> .5; </trans>");
    assert_eq!(assert_literal(&expr), &Literal::Float(0.5));
}

#[test]
fn test_oversized_integer_falls_back_to_float() {
    let expr = single_expr("<trans> 99999999999999999999; </trans>");
    assert!(matches!(assert_literal(&expr), Literal::Float(_)));
}

#[test]
fn test_boolean_literals() {
    assert_eq!(
        assert_literal(&single_expr("<trans> true; </trans>")),
        &Literal::Bool(true)
    );
    assert_eq!(
        assert_literal(&single_expr("<trans> false; </trans>")),
        &Literal::Bool(false)
    );
}

#[test]
fn test_string_literal_is_unescaped() {
    let expr = single_expr("<trans> \"a\\tb\"; </trans>");
    assert_eq!(assert_literal(&expr), &Literal::String("a\tb".to_string()));
}

#[test]
fn test_single_quoted_string() {
    let expr = single_expr("<trans> 'hello'; </trans>");
    assert_eq!(
        assert_literal(&expr),
        &Literal::String("hello".to_string())
    );
}

#[test]
fn test_negative_float_argument_is_unary_minus() {
    // Scenario B: `-7.7` must parse as a unary-negated float literal, not a
    // single negative-float token.
    let source = "<trans>\n  result = Round(123.123456789, -7.7);\n</trans>";
    let expr = single_expr(source);

    let assign = match expr {
        Expr::Assignment(assign) => assign,
        other => panic!("expected assignment, got: {other:?}"),
    };
    match &assign.assignee.inner {
        Expr::Identifier(id) => assert_eq!(id.name, "result"),
        other => panic!("expected identifier target, got: {other:?}"),
    }

    let call = match &assign.value.inner {
        Expr::Call(call) => call,
        other => panic!("expected call, got: {other:?}"),
    };
    match &call.callee.inner {
        Expr::Identifier(id) => assert_eq!(id.name, "Round"),
        other => panic!("expected identifier callee, got: {other:?}"),
    }
    assert_eq!(call.args.len(), 2);
    assert_eq!(
        assert_literal(&call.args[0].inner),
        &Literal::Float(123.123456789)
    );

    let negated = match &call.args[1].inner {
        Expr::Unary(unary) => unary,
        other => panic!("expected unary minus, got: {other:?}"),
    };
    assert_eq!(negated.op, UnaryOp::Negate);
    assert_eq!(
        assert_literal(&negated.operand.inner),
        &Literal::Float(7.7)
    );
}
