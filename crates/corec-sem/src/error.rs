use std::fmt;

use corec_util::{Diagnostic, DiagnosticCode};
use corec_util::Symbol;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Variable,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SymbolKind::Function => "function",
            SymbolKind::Variable => "variable",
        };
        f.write_str(s)
    }
}

/// The one failure global symbol-table construction can produce (§4.4,
/// §7 `SymDuplicateName`): a name bound twice within the same table.
/// Functions and variables occupy disjoint tables, so a function and a
/// variable may legally share a name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("duplicate {kind} '{name}' at {line}:{column}")]
pub struct SemaError {
    pub kind: SymbolKind,
    pub name: Symbol,
    pub line: u32,
    pub column: u32,
}

impl SemaError {
    pub fn duplicate(kind: SymbolKind, name: Symbol, line: u32, column: u32) -> Self {
        SemaError { kind, name, line, column }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(
            DiagnosticCode::SymDuplicateName,
            format!("duplicate {} '{}'", self.kind, self.name),
            "IDENTIFIER",
            self.name.as_str(),
            self.line,
            self.column,
        )
    }
}
