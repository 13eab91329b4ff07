//! Single first-error diagnostic, rendered as a caret-annotated snippet.
//!
//! The pipeline reports at most one error per run (§7): there is no
//! aggregation, no severity filtering, and no recovery. `Diagnostic`
//! therefore carries exactly the fields needed to print that one error.

use std::fmt;

use crate::source_map::SourceFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCode {
    LexUnknownToken,
    LexUnterminatedString,
    ParseExpectedToken,
    ParseLvalueRequired,
    ParseTrailingTokens,
    ParseMalformedInitializer,
    TypeLoweringBadNode,
    SymDuplicateName,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::LexUnknownToken => "LexUnknownToken",
            DiagnosticCode::LexUnterminatedString => "LexUnterminatedString",
            DiagnosticCode::ParseExpectedToken => "ParseExpectedToken",
            DiagnosticCode::ParseLvalueRequired => "ParseLvalueRequired",
            DiagnosticCode::ParseTrailingTokens => "ParseTrailingTokens",
            DiagnosticCode::ParseMalformedInitializer => "ParseMalformedInitializer",
            DiagnosticCode::TypeLoweringBadNode => "TypeLoweringBadNode",
            DiagnosticCode::SymDuplicateName => "SymDuplicateName",
        }
    }
}

/// A fully resolved diagnostic, ready to render. `line`/`column` are
/// already the *position to print* — when a producer wants the
/// `underline_previous_token_line` behavior (§4.2) it resolves that to a
/// concrete line/column itself and sets the flag here only for
/// introspection (tests assert on it; rendering does not branch on it).
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: Level,
    pub code: DiagnosticCode,
    pub message: String,
    pub token_kind: String,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
    pub underline_previous_token_line: bool,
}

impl Diagnostic {
    pub fn error(
        code: DiagnosticCode,
        message: impl Into<String>,
        token_kind: impl Into<String>,
        lexeme: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Diagnostic {
            level: Level::Error,
            code,
            message: message.into(),
            token_kind: token_kind.into(),
            lexeme: lexeme.into(),
            line,
            column,
            underline_previous_token_line: false,
        }
    }

    pub fn with_underline_previous(mut self, flag: bool) -> Self {
        self.underline_previous_token_line = flag;
        self
    }

    /// Renders the `Error: ... / Found Token: ... / <line> / <caret>` block
    /// described in §6, re-reading the offending line from `source`.
    pub fn render(&self, file_name: &str, source: &SourceFile) -> String {
        let line_text = source.line_text(self.line);
        let len = line_text.chars().count() as u32;
        let col = self.column.max(1).min(len + 1);

        let mut caret_prefix = String::new();
        for (i, ch) in line_text.chars().enumerate() {
            if i as u32 >= col - 1 {
                break;
            }
            caret_prefix.push(if ch == '\t' { '\t' } else { ' ' });
        }

        format!(
            "Error: {message}\nFound Token: {kind} (\"{lexeme}\") at {file}:{line}:{col}\n    {text}\n    {prefix}^\n",
            message = self.message,
            kind = self.token_kind,
            lexeme = self.lexeme,
            file = file_name,
            line = self.line,
            col = col,
            text = line_text,
            prefix = caret_prefix,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn render_places_caret_at_column() {
        let source = SourceFile::new(PathBuf::from("t.cx"), "x: i32 = ;\n".to_owned());
        let diag = Diagnostic::error(
            DiagnosticCode::ParseExpectedToken,
            "expected expression",
            "SEMICOLON",
            ";",
            1,
            10,
        );
        let rendered = diag.render("t.cx", &source);
        let caret_line = rendered.lines().nth(3).unwrap();
        assert_eq!(caret_line.len() - 1, caret_line.find('^').unwrap());
    }

    #[test]
    fn render_clamps_column_past_end_of_line() {
        let source = SourceFile::new(PathBuf::from("t.cx"), "x\n".to_owned());
        let diag = Diagnostic::error(
            DiagnosticCode::ParseExpectedToken,
            "expected token",
            "EOF",
            "",
            1,
            99,
        );
        let rendered = diag.render("t.cx", &source);
        assert!(rendered.contains(":1:2"));
    }
}
