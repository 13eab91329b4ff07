//! Global string interner.
//!
//! Every identifier, keyword, and punctuation lexeme is interned exactly
//! once and thereafter referred to by a cheap `Copy` handle. The interner
//! is a single process-wide registry, built lazily on first use and never
//! torn down; per §5 this is the one piece of shared state in the pipeline,
//! and it is read-mostly once startup's keyword pre-interning is done.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::RwLock;

/// A handle to an interned string. Cheap to copy, compare, and hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    pub fn intern(text: &str) -> Symbol {
        INTERNER.intern(text)
    }

    pub fn as_str(&self) -> &'static str {
        INTERNER.resolve(*self)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords and primitive type names pre-interned at startup so their ids
/// are stable and lookups never miss the map during lexing of common
/// programs. Kept in one place to match the registry the lexer's
/// fixed-spelling table is built from.
const KNOWN_SYMBOLS: &[&str] = &[
    "fn", "return", "if", "else", "while", "for", "break", "continue",
    "true", "false", "const",
    "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64",
    "f32", "f64", "bool", "char", "void",
];

struct Interner {
    strings: DashMap<&'static str, u32>,
    reverse: RwLock<Vec<&'static str>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
    next_id: AtomicU32,
}

impl Interner {
    fn new() -> Self {
        let interner = Interner {
            strings: DashMap::new(),
            reverse: RwLock::new(Vec::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            next_id: AtomicU32::new(0),
        };
        for &kw in KNOWN_SYMBOLS {
            interner.intern(kw);
        }
        interner
    }

    fn intern(&self, text: &str) -> Symbol {
        if let Some(id) = self.strings.get(text) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Symbol(*id);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let mut reverse = self.reverse.write().unwrap();
        // Re-check under the write lock: another thread may have interned
        // the same text between our `get` above and taking the lock.
        if let Some(id) = self.strings.get(leaked) {
            return Symbol(*id);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        reverse.push(leaked);
        self.strings.insert(leaked, id);
        Symbol(id)
    }

    fn resolve(&self, symbol: Symbol) -> &'static str {
        let reverse = self.reverse.read().unwrap();
        reverse[symbol.0 as usize]
    }
}

static INTERNER: Lazy<Interner> = Lazy::new(Interner::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_same_text_yields_same_symbol() {
        let a = Symbol::intern("frobnicate");
        let b = Symbol::intern("frobnicate");
        assert_eq!(a, b);
    }

    #[test]
    fn interning_different_text_yields_different_symbols() {
        let a = Symbol::intern("alpha_unique");
        let b = Symbol::intern("beta_unique");
        assert_ne!(a, b);
    }

    #[test]
    fn round_trips_through_as_str() {
        let s = Symbol::intern("round_trip_case");
        assert_eq!(s.as_str(), "round_trip_case");
    }

    #[test]
    fn keywords_are_pre_interned() {
        let a = Symbol::intern("fn");
        let b = Symbol::intern("fn");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "fn");
    }
}
