//! AST type nodes to canonical semantic types (§4.3).
//!
//! Lowering cannot fail structurally: a missing base name has no
//! representation to reject (the parser already requires a base-type
//! token), and a non-literal array dimension simply lowers to size 0
//! rather than being rejected — constant folding that could evaluate it
//! is future work (spec §9 item 4).

use std::fmt;

use corec_par::ast::{AstType, AstTypeKind, Expr, FunctionDecl, Literal, Param, TypeSuffix};
use corec_util::Symbol;

/// Canonical semantic type: primitive, pointer, array, or function,
/// arbitrarily nested, each carrying its own `is_const` flag (§3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Primitive { name: Symbol, is_const: bool },
    Pointer { inner: Box<Type>, is_const: bool },
    /// `size` of 0 means unspecified length (a bare `[]` suffix, or a
    /// dimension expression this front end cannot evaluate).
    Array { inner: Box<Type>, size: u64, is_const: bool },
    Function { params: Vec<Type>, ret: Option<Box<Type>>, is_const: bool },
}

impl Type {
    pub fn is_const(&self) -> bool {
        match self {
            Type::Primitive { is_const, .. }
            | Type::Pointer { is_const, .. }
            | Type::Array { is_const, .. }
            | Type::Function { is_const, .. } => *is_const,
        }
    }

    /// Returns `self` with its outermost `is_const` forced to `true` when
    /// `force` is set; otherwise returns `self` unchanged. Used when a
    /// grouped type's own `const` qualifier applies to whatever the
    /// parenthesized type lowers to (§4.3 step 1, "grouped" case).
    fn with_const_forced(mut self, force: bool) -> Self {
        if force {
            match &mut self {
                Type::Primitive { is_const, .. }
                | Type::Pointer { is_const, .. }
                | Type::Array { is_const, .. }
                | Type::Function { is_const, .. } => *is_const = true,
            }
        }
        self
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_const() {
            write!(f, "const ")?;
        }
        match self {
            Type::Primitive { name, .. } => write!(f, "{name}"),
            Type::Pointer { inner, .. } => write!(f, "pointer({inner})"),
            Type::Array { inner, size, .. } => write!(f, "array({size}, {inner})"),
            Type::Function { params, ret, .. } => {
                write!(f, "fn(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ")")?;
                if let Some(ret) = ret {
                    write!(f, " -> {ret}")?;
                }
                Ok(())
            }
        }
    }
}

/// Lowers one syntactic type node into its canonical form (§4.3).
pub fn lower_type(ast: &AstType) -> Type {
    let mut base = match &ast.kind {
        AstTypeKind::Regular { base } => Type::Primitive { name: *base, is_const: ast.is_const },
        AstTypeKind::Function { params, ret } => Type::Function {
            params: params.iter().map(lower_type).collect(),
            ret: ret.as_ref().map(|r| Box::new(lower_type(r))),
            is_const: ast.is_const,
        },
        AstTypeKind::Grouped { inner } => lower_type(inner).with_const_forced(ast.is_const),
    };

    for suffix in &ast.suffixes {
        base = match suffix {
            TypeSuffix::Star => Type::Pointer { inner: Box::new(base), is_const: false },
            TypeSuffix::Dim(dim) => {
                Type::Array { inner: Box::new(base), size: extract_dimension(dim), is_const: false }
            }
        };
    }
    base
}

/// A `[n]` dimension lowers to `n` when the expression is an integer
/// literal; any other expression (or the `[]` sentinel) lowers to 0,
/// "unspecified" (§4.3, §9 item 4).
fn extract_dimension(dim: &Option<Expr>) -> u64 {
    match dim {
        Some(Expr::Literal(Literal::Int(lit))) => lit.value.max(0) as u64,
        _ => 0,
    }
}

/// Lowers a function declaration's signature to `Type::Function` (§4.3,
/// last paragraph) using the same per-parameter lowering as any other
/// function type.
pub fn lower_function_decl(decl: &FunctionDecl) -> Type {
    Type::Function {
        params: decl.params.iter().map(lower_param).collect(),
        ret: decl.return_type.as_ref().map(|t| Box::new(lower_type(t))),
        is_const: false,
    }
}

fn lower_param(param: &Param) -> Type {
    lower_type(&param.ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use corec_par::ast::{Decl, Initializer};

    fn lower_variable_type(src: &str) -> Type {
        let program = corec_par::parse_source(src, "t.cx").expect("parse");
        let Decl::Variable(v) = &program.declarations[0] else { panic!("expected variable decl") };
        lower_type(&v.ty)
    }

    #[test]
    fn primitive_displays_bare_name() {
        let ty = lower_variable_type("x: i32;");
        assert_eq!(ty.to_string(), "i32");
    }

    #[test]
    fn star_then_dim_is_array_of_pointer() {
        // i32*[10] = array(10, pointer(i32)) — star binds first.
        let ty = lower_variable_type("x: i32*[10];");
        assert_eq!(ty.to_string(), "array(10, pointer(i32))");
    }

    #[test]
    fn grouped_array_then_star_is_pointer_to_array() {
        // (i32[10])* = pointer(array(10, i32))
        let ty = lower_variable_type("x: (i32[10])*;");
        assert_eq!(ty.to_string(), "pointer(array(10, i32))");
    }

    #[test]
    fn function_type_returning_array() {
        // fn(i32) -> bool[5] = function returning array(5, bool) — the
        // suffix binds to the return type's own atom, not the whole
        // function type, not the whole function type.
        let ty = lower_variable_type("x: fn(i32) -> bool[5];");
        assert_eq!(ty.to_string(), "fn(i32) -> array(5, bool)");
    }

    #[test]
    fn grouped_function_type_array() {
        // (fn(i32) -> bool)[5] = array(5, function(i32 -> bool))
        let ty = lower_variable_type("x: (fn(i32) -> bool)[5];");
        assert_eq!(ty.to_string(), "array(5, fn(i32) -> bool)");
    }

    #[test]
    fn unspecified_dimension_lowers_to_zero() {
        let ty = lower_variable_type("x: i32[];");
        assert_eq!(ty.to_string(), "array(0, i32)");
    }

    #[test]
    fn non_literal_dimension_lowers_to_zero() {
        let ty = lower_variable_type("x: i32[n];");
        assert_eq!(ty.to_string(), "array(0, i32)");
    }

    #[test]
    fn const_qualifier_is_carried() {
        let ty = lower_variable_type("x: const i32;");
        assert!(ty.is_const());
        assert_eq!(ty.to_string(), "const i32");
    }

    #[test]
    fn function_decl_signature_lowers_to_function_type() {
        let program = corec_par::parse_source(
            "fn add(a: i32, b: i32) -> i32 { return a + b; }",
            "t.cx",
        )
        .expect("parse");
        let Decl::Function(f) = &program.declarations[0] else { panic!("expected function decl") };
        let ty = lower_function_decl(f);
        assert_eq!(ty.to_string(), "fn(i32, i32) -> i32");
    }

    #[test]
    fn initializer_list_does_not_affect_declared_type() {
        let program = corec_par::parse_source("arr: i32[5] = { 1, 2, 3, 4, 5 };", "t.cx").unwrap();
        let Decl::Variable(v) = &program.declarations[0] else { panic!() };
        assert_eq!(lower_type(&v.ty).to_string(), "array(5, i32)");
        assert!(matches!(v.initializer, Some(Initializer::List(_))));
    }
}
