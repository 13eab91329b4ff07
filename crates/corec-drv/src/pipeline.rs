//! Ties the three front-end stages together and times each one,
//! reporting the single first [`Diagnostic`] instead of aggregating.

use std::time::{Duration, Instant};

use corec_lex::Token;
use corec_par::ast::Program;
use corec_sem::ScopeTree;
use corec_util::Diagnostic;

#[derive(Debug, Clone, Copy, Default)]
pub struct Timings {
    pub lex: Duration,
    pub parse: Duration,
    pub sema: Duration,
}

pub struct PipelineOutput {
    pub tokens: Vec<Token>,
    pub program: Program,
    pub scope_tree: ScopeTree,
    pub timings: Timings,
}

/// Runs lexing, parsing, and global-scope construction in sequence,
/// stopping at the first failing stage.
pub fn run_pipeline(source: &str, filename: &str) -> Result<PipelineOutput, Diagnostic> {
    let mut timings = Timings::default();

    let lex_start = Instant::now();
    let tokens = {
        let _span = tracing::info_span!("lex", file = filename).entered();
        corec_lex::tokenize(source).map_err(|e| e.into_diagnostic())?
    };
    timings.lex = lex_start.elapsed();
    tracing::info!(tokens = tokens.len(), "lexed source");

    let parse_start = Instant::now();
    let program = {
        let _span = tracing::info_span!("parse", file = filename).entered();
        corec_par::Parser::new(&tokens, filename).parse().map_err(|e| e.into_diagnostic())?
    };
    timings.parse = parse_start.elapsed();
    tracing::info!(declarations = program.declarations.len(), "parsed program");

    let sema_start = Instant::now();
    let scope_tree = {
        let _span = tracing::info_span!("sema", file = filename).entered();
        corec_sem::build_global_scope(&program).map_err(|e| e.into_diagnostic())?
    };
    timings.sema = sema_start.elapsed();
    tracing::info!("built global scope");

    Ok(PipelineOutput { tokens, program, scope_tree, timings })
}

pub fn print_timings(timings: &Timings) {
    println!("lex    {:>10.3?}", timings.lex);
    println!("parse  {:>10.3?}", timings.parse);
    println!("sema   {:>10.3?}", timings.sema);
    println!(
        "total  {:>10.3?}",
        timings.lex + timings.parse + timings.sema
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_source_runs_all_stages() {
        let out = run_pipeline("x: i32 = 1;", "t.cx").unwrap();
        assert_eq!(out.tokens.last().unwrap().kind, corec_lex::TokenKind::Eof);
        assert_eq!(out.program.declarations.len(), 1);
        assert_eq!(out.scope_tree.global().variables.len(), 1);
    }

    #[test]
    fn lex_error_is_reported_as_a_diagnostic() {
        assert!(run_pipeline("x: i32 = @;", "t.cx").is_err());
    }

    #[test]
    fn parse_error_is_reported_as_a_diagnostic() {
        assert!(run_pipeline("x: i32 = ;", "t.cx").is_err());
    }

    #[test]
    fn duplicate_symbol_is_reported_as_a_diagnostic() {
        assert!(run_pipeline("x: i32 = 1; x: i32 = 2;", "t.cx").is_err());
    }
}
