use std::fmt;

use corec_util::Symbol;

/// Closed enumeration of every token kind the lexer can produce. Grouped
/// below in the order the catalog describes them: keywords, primitive type
/// names, punctuation/operators, literal classes, then the two synthetic
/// kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Fn,
    Return,
    If,
    Else,
    While,
    For,
    Break,
    Continue,
    Const,
    True,
    False,

    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Char,
    Void,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Arrow,

    Plus,
    PlusEq,
    PlusPlus,
    Minus,
    MinusEq,
    MinusMinus,
    Star,
    StarEq,
    Slash,
    SlashEq,
    Percent,
    PercentEq,
    Eq,
    EqEq,
    Bang,
    BangEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    AmpAmp,
    Amp,
    PipePipe,

    IntLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,
    Identifier,

    Eof,
    /// A byte that matched no fixed-spelling or pattern-described token.
    Unknown,
}

impl TokenKind {
    /// True for keyword/primitive-name spellings: these require the
    /// identifier-boundary check (the byte after the match must not
    /// continue an identifier) before they can be accepted.
    pub fn is_word_like(self) -> bool {
        !matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Colon
                | TokenKind::Arrow
                | TokenKind::Plus
                | TokenKind::PlusEq
                | TokenKind::PlusPlus
                | TokenKind::Minus
                | TokenKind::MinusEq
                | TokenKind::MinusMinus
                | TokenKind::Star
                | TokenKind::StarEq
                | TokenKind::Slash
                | TokenKind::SlashEq
                | TokenKind::Percent
                | TokenKind::PercentEq
                | TokenKind::Eq
                | TokenKind::EqEq
                | TokenKind::Bang
                | TokenKind::BangEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
                | TokenKind::AmpAmp
                | TokenKind::Amp
                | TokenKind::PipePipe
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::CharLiteral
                | TokenKind::Identifier
                | TokenKind::Eof
                | TokenKind::Unknown
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// One lexical token. `lexeme` is the matched substring, `line`/`column`
/// refer to its first byte (both 1-based, §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Symbol,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: Symbol, line: u32, column: u32) -> Self {
        Token { kind, lexeme, line, column }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
