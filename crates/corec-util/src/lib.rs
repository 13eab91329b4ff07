//! Shared plumbing used by every stage of the front end: string interning,
//! source-file line indexing, diagnostic rendering, typed index collections,
//! and the per-crate error types built on top of them.

mod diagnostic;
mod error;
mod index_vec;
mod source_map;
mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticCode, Level};
pub use error::UtilError;
pub use index_vec::{Idx, IndexVec};
pub use source_map::SourceFile;
pub use symbol::Symbol;
