use corec_lex::Token;
use corec_util::{Diagnostic, DiagnosticCode};

/// The parser's single error payload (§4.2). `underline_previous_token_line`
/// is set when the missing token is a terminator better anchored to the end
/// of the previous token than to the current one; `line`/`column` are
/// already resolved to whichever position that implies, so rendering never
/// has to branch on the flag. `code` classifies which §7 error kind this is.
#[derive(Debug, Clone)]
pub struct ParseDiagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    pub token_kind: String,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
    pub filename: String,
    pub underline_previous_token_line: bool,
}

impl ParseDiagnostic {
    pub fn at_token(
        filename: &str,
        code: DiagnosticCode,
        message: impl Into<String>,
        token: &Token,
    ) -> Self {
        ParseDiagnostic {
            code,
            message: message.into(),
            token_kind: token.kind.to_string(),
            lexeme: token.lexeme.as_str().to_owned(),
            line: token.line,
            column: token.column,
            filename: filename.to_owned(),
            underline_previous_token_line: false,
        }
    }

    /// Anchors the diagnostic one column past the previous token's last
    /// byte, on the previous token's line, for a missing terminator.
    pub fn after_previous_token(
        filename: &str,
        code: DiagnosticCode,
        message: impl Into<String>,
        previous: &Token,
    ) -> Self {
        let lexeme = previous.lexeme.as_str();
        ParseDiagnostic {
            code,
            message: message.into(),
            token_kind: previous.kind.to_string(),
            lexeme: lexeme.to_owned(),
            line: previous.line,
            column: previous.column + lexeme.chars().count() as u32,
            filename: filename.to_owned(),
            underline_previous_token_line: true,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(self.code, self.message, self.token_kind, self.lexeme, self.line, self.column)
            .with_underline_previous(self.underline_previous_token_line)
    }
}
