//! Token stream to AST: the parser stage.

pub mod ast;
mod diagnostic;
mod parser;
mod types;

pub use diagnostic::ParseDiagnostic;
pub use parser::{PResult, Parser};

use corec_lex::{tokenize, LexError};
use corec_util::Diagnostic;

/// Failure from either lexing or parsing a source string, already
/// convertible to a single renderable [`Diagnostic`] (§7: the pipeline
/// reports at most one error per run, whichever stage it came from).
#[derive(Debug, Clone)]
pub enum FrontError {
    Lex(LexError),
    Parse(ParseDiagnostic),
}

impl FrontError {
    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            FrontError::Lex(e) => e.into_diagnostic(),
            FrontError::Parse(d) => d.into_diagnostic(),
        }
    }
}

/// Lexes and parses a whole source string in one call.
pub fn parse_source(source: &str, filename: &str) -> Result<ast::Program, FrontError> {
    let tokens = tokenize(source).map_err(FrontError::Lex)?;
    Parser::new(&tokens, filename).parse().map_err(FrontError::Parse)
}
