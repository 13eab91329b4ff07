use corec_util::{Diagnostic, DiagnosticCode};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected byte {byte:?} at {line}:{column}")]
    UnknownToken { byte: char, line: u32, column: u32 },

    #[error("unterminated string literal starting at {line}:{column}")]
    UnterminatedString { line: u32, column: u32 },
}

impl LexError {
    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            LexError::UnknownToken { byte, line, column } => Diagnostic::error(
                DiagnosticCode::LexUnknownToken,
                format!("unexpected character {byte:?}"),
                "UNKNOWN",
                byte.to_string(),
                line,
                column,
            ),
            LexError::UnterminatedString { line, column } => Diagnostic::error(
                DiagnosticCode::LexUnterminatedString,
                "unterminated string literal",
                "STRING_LITERAL",
                "",
                line,
                column,
            ),
        }
    }
}
