//! Pretty-printers for the `--tokens`, `--ast`, and `--sym-table` flags.
//! Each is a thin `Display`/`Debug`-driven text dump (§6); none of this
//! output is a stable machine format.

use corec_lex::Token;
use corec_par::ast::Program;
use corec_sem::ScopeTree;

pub fn dump_tokens(tokens: &[Token]) {
    for tok in tokens {
        println!("{:<5}:{:<4} {:<15} {}", tok.line, tok.column, tok.kind, tok.lexeme);
    }
}

pub fn dump_ast(program: &Program) {
    println!("{program:#?}");
}

pub fn dump_sym_table(tree: &ScopeTree) {
    let global = tree.global();
    println!("functions:");
    for sym in global.functions.iter() {
        println!("  {} : {}", sym.name, sym.sem_type);
    }
    println!("variables:");
    for sym in global.variables.iter() {
        println!("  {} : {}", sym.name, sym.sem_type);
    }
}
