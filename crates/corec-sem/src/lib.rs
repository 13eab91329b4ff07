//! AST to canonical semantic types and the global symbol table: the
//! third pipeline stage (§4.3, §4.4). Depends on `corec-par` for
//! `AstType`/`Program`; nothing downstream of this crate feeds back into
//! it, so type lowering is free to be the first stage that produces the
//! canonical `Type` defined here.

mod error;
mod scope;
mod types;

pub use error::{SemaError, SymbolKind};
pub use scope::{Scope, ScopeId, ScopeTree, SemaSymbol, SymbolTable};
pub use types::{lower_function_decl, lower_type, Type};

use corec_par::ast::{Decl, Program};

/// Walks a program's top-level declarations in source order, lowering
/// each to a canonical type and binding it in the appropriate table of
/// the global scope. Fails on the first duplicate name (§4.4); whatever
/// scope was built up to that point is dropped with the error.
pub fn build_global_scope(program: &Program) -> Result<ScopeTree, SemaError> {
    let mut tree = ScopeTree::new();
    for decl in &program.declarations {
        match decl {
            Decl::Function(f) => {
                let sem_type = lower_function_decl(f);
                let symbol = SemaSymbol { name: f.name, sem_type, is_const_expr: false };
                tree.current_mut()
                    .functions
                    .insert(symbol)
                    .map_err(|s| SemaError::duplicate(SymbolKind::Function, s.name, f.line, f.column))?;
            }
            Decl::Variable(v) => {
                let sem_type = lower_type(&v.ty);
                let symbol = SemaSymbol { name: v.name, sem_type, is_const_expr: v.is_const };
                tree.current_mut()
                    .variables
                    .insert(symbol)
                    .map_err(|s| SemaError::duplicate(SymbolKind::Variable, s.name, v.line, v.column))?;
            }
        }
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use corec_util::Symbol;

    fn build(src: &str) -> ScopeTree {
        let program = corec_par::parse_source(src, "t.cx").expect("parse");
        build_global_scope(&program).expect("bind")
    }

    #[test]
    fn variable_declaration_yields_one_symbol() {
        let tree = build("x: i32 = 10;");
        let sym = tree.global().variables.lookup(Symbol::intern("x")).unwrap();
        assert_eq!(sym.sem_type.to_string(), "i32");
    }

    #[test]
    fn function_declaration_yields_one_symbol() {
        let tree = build("fn add(a: i32, b: i32) -> i32 { return a + b; }");
        let sym = tree.global().functions.lookup(Symbol::intern("add")).unwrap();
        assert_eq!(sym.sem_type.to_string(), "fn(i32, i32) -> i32");
    }

    #[test]
    fn array_initializer_declaration() {
        let tree = build("arr: i32[5] = { 1, 2, 3, 4, 5 };");
        let sym = tree.global().variables.lookup(Symbol::intern("arr")).unwrap();
        assert_eq!(sym.sem_type.to_string(), "array(5, i32)");
    }

    #[test]
    fn duplicate_function_name_fails() {
        let program =
            corec_par::parse_source("fn f() -> i32 {} fn f() -> i32 {}", "t.cx").unwrap();
        let err = build_global_scope(&program).unwrap_err();
        assert_eq!(err.kind, SymbolKind::Function);
        assert_eq!(err.name.as_str(), "f");
    }

    #[test]
    fn function_and_variable_may_share_a_name() {
        let tree = build("fn f() -> i32 { return 0; } f: i32 = 1;");
        assert!(tree.global().functions.lookup(Symbol::intern("f")).is_some());
        assert!(tree.global().variables.lookup(Symbol::intern("f")).is_some());
    }

    #[test]
    fn duplicate_variable_name_fails() {
        let program = corec_par::parse_source("x: i32 = 1; x: i32 = 2;", "t.cx").unwrap();
        let err = build_global_scope(&program).unwrap_err();
        assert_eq!(err.kind, SymbolKind::Variable);
    }
}
