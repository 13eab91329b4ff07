//! Symbol tables and the global scope (§4.4).
//!
//! An arena of scopes (one binding map per scope) holding a
//! two-table-per-scope shape: each [`Scope`] holds a
//! disjoint `functions` table and `variables` table. Only the global
//! scope is ever populated by this front end; `enter_scope`/`exit_scope`
//! exist so a future name-resolution pass can push function-body scopes
//! without reshaping this arena.

use indexmap::IndexMap;

use corec_util::{define_idx, Idx, IndexVec, Symbol};

use crate::types::Type;

define_idx! {
    pub struct ScopeId;
}

/// One top-level binding: a name bound to its lowered semantic type.
/// `is_const_expr` is left unfilled (always `false`) by this front end —
/// constant-expression evaluation is a semantic-analysis concern (§1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemaSymbol {
    pub name: Symbol,
    pub sem_type: Type,
    pub is_const_expr: bool,
}

/// A name table with reject-if-present insert semantics (§4.4's
/// "duplicate name fails"). `upsert` is kept for a future pass that
/// needs update semantics; global-scope construction never calls it.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: IndexMap<Symbol, SemaSymbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Inserts `symbol`, or returns it back unchanged if its name is
    /// already bound.
    pub fn insert(&mut self, symbol: SemaSymbol) -> Result<(), SemaSymbol> {
        if self.entries.contains_key(&symbol.name) {
            return Err(symbol);
        }
        self.entries.insert(symbol.name, symbol);
        Ok(())
    }

    /// Inserts `symbol`, replacing any existing binding and returning it.
    pub fn upsert(&mut self, symbol: SemaSymbol) -> Option<SemaSymbol> {
        self.entries.insert(symbol.name, symbol)
    }

    pub fn lookup(&self, name: Symbol) -> Option<&SemaSymbol> {
        self.entries.get(&name)
    }

    pub fn remove(&mut self, name: Symbol) -> Option<SemaSymbol> {
        self.entries.shift_remove(&name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates bindings in insertion (source) order.
    pub fn iter(&self) -> impl Iterator<Item = &SemaSymbol> {
        self.entries.values()
    }
}

#[derive(Debug, Default)]
pub struct Scope {
    pub variables: SymbolTable,
    pub functions: SymbolTable,
    pub parent: Option<ScopeId>,
}

/// Arena of scopes. Only the scope at [`ScopeTree::global_id`] is
/// populated today; `enter_scope`/`exit_scope` are a reserved slot for
/// function-body scopes (§3: "function-body scopes are reserved for
/// future work").
#[derive(Debug)]
pub struct ScopeTree {
    scopes: IndexVec<ScopeId, Scope>,
    current: ScopeId,
}

impl ScopeTree {
    pub fn new() -> Self {
        let mut scopes = IndexVec::new();
        let root = scopes.push(Scope::default());
        ScopeTree { scopes, current: root }
    }

    pub fn global_id(&self) -> ScopeId {
        Idx::new(0)
    }

    pub fn global(&self) -> &Scope {
        &self.scopes[self.global_id()]
    }

    pub fn current(&self) -> &Scope {
        &self.scopes[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Scope {
        &mut self.scopes[self.current]
    }

    pub fn enter_scope(&mut self) -> ScopeId {
        let id = self.scopes.push(Scope { parent: Some(self.current), ..Scope::default() });
        self.current = id;
        id
    }

    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current].parent {
            self.current = parent;
        }
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(name: &str) -> SemaSymbol {
        SemaSymbol {
            name: Symbol::intern(name),
            sem_type: Type::Primitive { name: Symbol::intern("i32"), is_const: false },
            is_const_expr: false,
        }
    }

    #[test]
    fn insert_rejects_duplicate_name() {
        let mut table = SymbolTable::new();
        assert!(table.insert(symbol("x")).is_ok());
        assert!(table.insert(symbol("x")).is_err());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookup_finds_inserted_symbol() {
        let mut table = SymbolTable::new();
        table.insert(symbol("x")).unwrap();
        assert!(table.lookup(Symbol::intern("x")).is_some());
        assert!(table.lookup(Symbol::intern("y")).is_none());
    }

    #[test]
    fn functions_and_variables_are_disjoint_tables() {
        let mut tree = ScopeTree::new();
        tree.current_mut().functions.insert(symbol("f")).unwrap();
        tree.current_mut().variables.insert(symbol("f")).unwrap();
        assert_eq!(tree.current().functions.len(), 1);
        assert_eq!(tree.current().variables.len(), 1);
    }

    #[test]
    fn enter_and_exit_scope_restores_parent() {
        let mut tree = ScopeTree::new();
        let global = tree.global_id();
        tree.enter_scope();
        assert_ne!(tree.current, global);
        tree.exit_scope();
        assert_eq!(tree.current, global);
    }
}
