//! Tests for live-region resolution
//!
//! Covers:
//! - The empty `<trans> </trans>` document
//! - Documents with no scope tags at all
//! - Discarded content before/after the tags
//! - Missing close tag
//! - Duplicate tags

use jbscript_parser::{ParseMode, SystemVarRegistry, parse, parse_with_mode, tokenize};
use jbscript_parser::TokenKind;
use pretty_assertions::assert_eq;

fn analyze(source: &str) -> jbscript_parser::ParseResult {
    parse_with_mode(source, ParseMode::Analysis, SystemVarRegistry::shared())
}

#[test]
fn test_empty_scope_parses_to_empty_program() {
    // Scenario A: exactly the two tag tokens, an empty program.
    let tokens = tokenize("<trans> </trans>").expect("tokenize");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::OpenTransTag, TokenKind::CloseTransTag]
    );

    let program = parse("<trans> </trans>").expect("parse");
    assert!(program.is_empty());
}

#[test]
fn test_document_without_tags_is_an_empty_program_with_warning() {
    let result = analyze("just some text");
    let program = result.program.expect("program");
    assert!(program.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
    let diag = &result.diagnostics[0];
    assert!(!diag.is_error());
    assert!(diag.message.contains("returned as a string"));
}

#[test]
fn test_document_without_tags_parses_ok_in_fast_mode() {
    let program = parse("no tags here").expect("parse");
    assert!(program.is_empty());
}

#[test]
fn test_surrounding_content_is_discarded_with_two_warnings() {
    // Scenario D: prefix and suffix are dropped, the live region parses,
    // one advisory diagnostic per discarded region.
    let result = analyze("header stuff <trans> a = 1; </trans> trailing stuff");
    {
        let warnings: Vec<_> = result.warnings().collect();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].message.contains("before '<trans>'"));
        assert!(warnings[1].message.contains("after '</trans>'"));
    }
    assert_eq!(result.errors().count(), 0);

    let program = result.program.expect("program");
    assert_eq!(program.body.len(), 1);
}

#[test]
fn test_prefix_only_is_a_single_warning() {
    let result = analyze("prefix <trans> a = 1; </trans>");
    assert_eq!(result.warnings().count(), 1);
    assert_eq!(result.program.expect("program").body.len(), 1);
}

#[test]
fn test_missing_close_tag_is_fatal() {
    // Scenario E: a fatal structural diagnostic, an empty program, and our
    // own error type rather than an unrelated failure.
    let err = parse("<trans> a = 1;").expect_err("missing close tag");
    assert!(err.to_string().contains("Missing closing '</trans>' tag"));

    let result = analyze("<trans> a = 1;");
    assert_eq!(result.errors().count(), 1);
    {
        let diag = result.errors().next().expect("diagnostic");
        assert!(diag.message.contains("Missing closing"));
    }
    let program = result.program.expect("program");
    assert!(program.is_empty());
}

#[test]
fn test_missing_close_tag_diagnostic_points_at_end_of_document() {
    let source = "<trans>\n  a = 1;";
    let result = analyze(source);
    let diag = result.errors().next().expect("diagnostic").clone();
    // The last consumed token ends on line 2.
    assert_eq!(diag.span.start.line, 2);
}

#[test]
fn test_duplicate_open_tag_fails_fast_without_sink() {
    let err = parse("<trans> <trans> </trans>").expect_err("duplicate tag");
    assert!(err.to_string().contains("Duplicate '<trans>' tag"));
}

#[test]
fn test_duplicate_tags_are_collected_in_analysis_mode() {
    let result = analyze("<trans> 1; <trans> </trans> </trans>");
    // First open and first close win; the duplicates become diagnostics.
    assert!(result.program.is_some());
    assert_eq!(result.errors().count(), 2);
}

#[test]
fn test_close_before_open_yields_empty_body() {
    let result = analyze("</trans> 1; <trans>");
    let program = result.program.expect("program");
    assert!(program.is_empty());
}
