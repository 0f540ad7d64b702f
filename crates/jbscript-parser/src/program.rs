//! Parse entry points

use crate::{ParseMode, ParseResult, Parser, SystemVarRegistry, lexer};
use jbscript_ast::Program;
use jbscript_diagnostics::Result;

/// Parse a document in fast mode with the default system-variable registry
///
/// Tokenizes internally and fails on the first unrecoverable defect:
/// duplicate scope tags, a missing closing tag, a missing required token, an
/// invalid assignment target, or a non-identifier right side of `.`.
pub fn parse(source: &str) -> Result<Program> {
    let tokens = lexer::tokenize(source)?;
    let mut parser = Parser::new(tokens, ParseMode::Fast, SystemVarRegistry::shared());
    parser.program()
}

/// Parse a document with an explicit mode and registry
///
/// In analysis mode every lexical and structural diagnostic is collected and
/// a partial program is produced; in fast mode the first error ends parsing
/// and is returned as a diagnostic in the result.
pub fn parse_with_mode(
    source: &str,
    mode: ParseMode,
    registry: &SystemVarRegistry,
) -> ParseResult {
    let mut diagnostics = Vec::new();
    let tokens = lexer::tokenize_with_diagnostics(source, &mut diagnostics);
    let mut parser = Parser::new(tokens, mode, registry);
    let program = match parser.program() {
        Ok(program) => Some(program),
        Err(err) => {
            diagnostics.push(err.to_diagnostic());
            None
        }
    };
    diagnostics.extend(parser.take_diagnostics());
    ParseResult {
        program,
        diagnostics,
    }
}
