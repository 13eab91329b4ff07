//! The type grammar (§4.2): `Type ::= 'const'? TypeAtom TypeSuffix*`.
//! Suffixes are recorded in the order encountered on one `AstType` record
//! (a single ordered list rather than separate pre-star/dimension/
//! post-star counts — §9 item 6) so lowering can reconstruct the correct
//! nesting with a single left fold.

use corec_lex::TokenKind;

use crate::ast::{AstType, AstTypeKind, TypeSuffix};
use crate::parser::{PResult, Parser};

impl<'a> Parser<'a> {
    pub fn parse_type(&mut self) -> PResult<AstType> {
        let start = *self.current();
        let is_const = self.match_tok(TokenKind::Const).is_some();

        let kind = match self.current().kind {
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_type()?;
                self.expect(TokenKind::RParen, "')'")?;
                AstTypeKind::Grouped { inner: Box::new(inner) }
            }
            TokenKind::Fn => self.parse_function_type()?,
            TokenKind::Identifier
            | TokenKind::I8
            | TokenKind::I16
            | TokenKind::I32
            | TokenKind::I64
            | TokenKind::U8
            | TokenKind::U16
            | TokenKind::U32
            | TokenKind::U64
            | TokenKind::F32
            | TokenKind::F64
            | TokenKind::Bool
            | TokenKind::Char
            | TokenKind::Void => {
                let tok = self.advance();
                AstTypeKind::Regular { base: tok.lexeme }
            }
            _ => return Err(self.expected("type")),
        };

        let suffixes = self.parse_type_suffixes()?;
        Ok(AstType { kind, is_const, suffixes, line: start.line, column: start.column })
    }

    fn parse_function_type(&mut self) -> PResult<AstTypeKind> {
        self.expect(TokenKind::Fn, "'fn'")?;
        self.expect(TokenKind::LParen, "'('")?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                params.push(self.parse_type()?);
                if self.match_tok(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        let ret = if self.match_tok(TokenKind::Arrow).is_some() {
            Some(Box::new(self.parse_type()?))
        } else {
            None
        };
        Ok(AstTypeKind::Function { params, ret })
    }

    fn parse_type_suffixes(&mut self) -> PResult<Vec<TypeSuffix>> {
        let mut suffixes = Vec::new();
        loop {
            if self.match_tok(TokenKind::Star).is_some() {
                suffixes.push(TypeSuffix::Star);
            } else if self.check(TokenKind::LBracket) {
                self.advance();
                let dim = if self.check(TokenKind::RBracket) {
                    None
                } else {
                    Some(self.parse_expression()?)
                };
                self.expect(TokenKind::RBracket, "']'")?;
                suffixes.push(TypeSuffix::Dim(dim));
            } else {
                break;
            }
        }
        Ok(suffixes)
    }
}
