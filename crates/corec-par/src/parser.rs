//! Recursive-descent parser: `Program ::= Declaration*`, one token of
//! lookahead plus a single `peek(1)` used to disambiguate a variable
//! declaration from an expression statement. No panic-mode recovery — the
//! first error propagates straight out via `?` and the caller discards
//! whatever partial tree was under construction.

use corec_lex::{Token, TokenKind};
use corec_util::DiagnosticCode;

use crate::ast::*;
use crate::diagnostic::ParseDiagnostic;

pub type PResult<T> = Result<T, ParseDiagnostic>;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    filename: String,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], filename: impl Into<String>) -> Self {
        Parser { tokens, pos: 0, filename: filename.into() }
    }

    pub fn parse(mut self) -> PResult<Program> {
        self.parse_program()
    }

    // --- token cursor -------------------------------------------------

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(crate) fn peek_at(&self, offset: usize) -> &Token {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1).min(self.tokens.len() - 1)]
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        let tok = *self.current();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn match_tok(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> PResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.expected(what))
        }
    }

    /// `;` is expected far more often than any other token, and its
    /// diagnostic is the one case anchored to the previous token instead
    /// of the current one.
    pub(crate) fn expect_semicolon(&mut self) -> PResult<Token> {
        if self.check(TokenKind::Semicolon) {
            Ok(self.advance())
        } else {
            let previous = *self.previous();
            Err(ParseDiagnostic::after_previous_token(
                &self.filename,
                DiagnosticCode::ParseExpectedToken,
                "expected ';'",
                &previous,
            ))
        }
    }

    pub(crate) fn expected(&self, what: &str) -> ParseDiagnostic {
        ParseDiagnostic::at_token(
            &self.filename,
            DiagnosticCode::ParseExpectedToken,
            format!("expected {what}"),
            self.current(),
        )
    }

    pub(crate) fn expect_identifier(&mut self) -> PResult<Token> {
        if self.check(TokenKind::Identifier) {
            Ok(self.advance())
        } else {
            Err(self.expected("identifier"))
        }
    }

    // --- top level ------------------------------------------------------

    fn parse_program(&mut self) -> PResult<Program> {
        let mut declarations = Vec::new();
        while !self.is_eof() {
            match self.current().kind {
                TokenKind::Fn => declarations.push(Decl::Function(self.parse_function_decl()?)),
                TokenKind::Identifier => {
                    let decl = self.parse_variable_decl()?;
                    self.expect_semicolon()?;
                    declarations.push(Decl::Variable(decl));
                }
                _ => {
                    return Err(ParseDiagnostic::at_token(
                        &self.filename,
                        DiagnosticCode::ParseTrailingTokens,
                        "unexpected tokens after program end",
                        self.current(),
                    ))
                }
            }
        }
        Ok(Program { declarations })
    }

    fn parse_function_decl(&mut self) -> PResult<FunctionDecl> {
        let fn_tok = self.expect(TokenKind::Fn, "'fn'")?;
        let name_tok = self.expect_identifier()?;
        self.expect(TokenKind::LParen, "'('")?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                params.push(self.parse_param()?);
                if self.match_tok(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        let return_type =
            if self.match_tok(TokenKind::Arrow).is_some() { Some(self.parse_type()?) } else { None };
        let body = self.parse_block()?;
        Ok(FunctionDecl {
            name: name_tok.lexeme,
            params,
            return_type,
            body,
            line: fn_tok.line,
            column: fn_tok.column,
            meta: Default::default(),
        })
    }

    fn parse_param(&mut self) -> PResult<Param> {
        let name_tok = self.expect_identifier()?;
        self.expect(TokenKind::Colon, "':'")?;
        let ty = self.parse_type()?;
        Ok(Param { name: name_tok.lexeme, ty, line: name_tok.line, column: name_tok.column })
    }

    fn parse_variable_decl(&mut self) -> PResult<VariableDecl> {
        let name_tok = self.expect_identifier()?;
        self.expect(TokenKind::Colon, "':'")?;
        let is_const = self.match_tok(TokenKind::Const).is_some();
        let ty = self.parse_type()?;
        let initializer = if self.match_tok(TokenKind::Eq).is_some() {
            Some(self.parse_initializer()?)
        } else {
            None
        };
        Ok(VariableDecl {
            name: name_tok.lexeme,
            is_const,
            ty,
            initializer,
            line: name_tok.line,
            column: name_tok.column,
            meta: Default::default(),
        })
    }

    fn parse_initializer(&mut self) -> PResult<Initializer> {
        if self.check(TokenKind::LBrace) {
            Ok(Initializer::List(self.parse_init_list()?))
        } else {
            Ok(Initializer::Expr(self.parse_expression()?))
        }
    }

    fn parse_init_list(&mut self) -> PResult<InitList> {
        let brace = self.expect(TokenKind::LBrace, "'{'")?;
        let mut elements = Vec::new();
        if self.match_tok(TokenKind::RBrace).is_none() {
            loop {
                elements.push(self.parse_initializer()?);
                if self.match_tok(TokenKind::Comma).is_some() {
                    if self.check(TokenKind::RBrace) {
                        return Err(ParseDiagnostic::at_token(
                            &self.filename,
                            DiagnosticCode::ParseMalformedInitializer,
                            "trailing comma in initializer list",
                            self.current(),
                        ));
                    }
                    continue;
                }
                break;
            }
            self.expect(TokenKind::RBrace, "'}'")?;
        }
        Ok(InitList { elements, line: brace.line, column: brace.column, meta: Default::default() })
    }

    // --- statements -----------------------------------------------------

    pub(crate) fn parse_block(&mut self) -> PResult<Block> {
        let brace = self.expect(TokenKind::LBrace, "'{'")?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_eof() {
            statements.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(Block { statements, line: brace.line, column: brace.column })
    }

    fn parse_statement(&mut self) -> PResult<Stmt> {
        match self.current().kind {
            TokenKind::LBrace => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::If => Ok(Stmt::If(self.parse_if_stmt()?)),
            TokenKind::While => Ok(Stmt::While(self.parse_while_stmt()?)),
            TokenKind::For => Ok(Stmt::For(self.parse_for_stmt()?)),
            TokenKind::Return => Ok(Stmt::Return(self.parse_return_stmt()?)),
            TokenKind::Break => {
                let tok = self.advance();
                self.expect_semicolon()?;
                Ok(Stmt::Break { line: tok.line, column: tok.column })
            }
            TokenKind::Continue => {
                let tok = self.advance();
                self.expect_semicolon()?;
                Ok(Stmt::Continue { line: tok.line, column: tok.column })
            }
            TokenKind::Identifier if self.peek_at(1).kind == TokenKind::Colon => {
                let decl = self.parse_variable_decl()?;
                self.expect_semicolon()?;
                Ok(Stmt::VariableDecl(decl))
            }
            _ => {
                let tok = *self.current();
                let expr = self.parse_expression()?;
                self.expect_semicolon()?;
                Ok(Stmt::Expr(ExprStmt { expr, line: tok.line, column: tok.column }))
            }
        }
    }

    fn parse_if_stmt(&mut self) -> PResult<IfStmt> {
        let if_tok = self.expect(TokenKind::If, "'if'")?;
        self.expect(TokenKind::LParen, "'('")?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')'")?;
        let then_block = self.parse_block()?;
        let else_branch = if self.match_tok(TokenKind::Else).is_some() {
            if self.check(TokenKind::If) {
                Some(Box::new(ElseBranch::If(self.parse_if_stmt()?)))
            } else {
                Some(Box::new(ElseBranch::Block(self.parse_block()?)))
            }
        } else {
            None
        };
        Ok(IfStmt { cond, then_block, else_branch, line: if_tok.line, column: if_tok.column })
    }

    fn parse_while_stmt(&mut self) -> PResult<WhileStmt> {
        let while_tok = self.expect(TokenKind::While, "'while'")?;
        self.expect(TokenKind::LParen, "'('")?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')'")?;
        let body = self.parse_block()?;
        Ok(WhileStmt { cond, body, line: while_tok.line, column: while_tok.column })
    }

    fn parse_for_stmt(&mut self) -> PResult<ForStmt> {
        let for_tok = self.expect(TokenKind::For, "'for'")?;
        self.expect(TokenKind::LParen, "'('")?;

        let init = if self.check(TokenKind::Semicolon) {
            None
        } else if self.check(TokenKind::Identifier) && self.peek_at(1).kind == TokenKind::Colon {
            Some(ForInit::Decl(self.parse_variable_decl()?))
        } else {
            Some(ForInit::Expr(self.parse_expression()?))
        };
        // Exactly one ';' is consumed after ForInit, whichever form it took.
        self.expect_semicolon()?;

        let cond = if self.check(TokenKind::Semicolon) { None } else { Some(self.parse_expression()?) };
        self.expect(TokenKind::Semicolon, "';'")?;

        let step = if self.check(TokenKind::RParen) { None } else { Some(self.parse_expression()?) };
        self.expect(TokenKind::RParen, "')'")?;

        let body = self.parse_block()?;
        Ok(ForStmt { init, cond, step, body, line: for_tok.line, column: for_tok.column })
    }

    fn parse_return_stmt(&mut self) -> PResult<ReturnStmt> {
        let return_tok = self.expect(TokenKind::Return, "'return'")?;
        let value = if self.check(TokenKind::Semicolon) { None } else { Some(self.parse_expression()?) };
        self.expect_semicolon()?;
        Ok(ReturnStmt { value, line: return_tok.line, column: return_tok.column })
    }

    // --- expressions ------------------------------------------------------

    pub(crate) fn parse_expression(&mut self) -> PResult<Expr> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> PResult<Expr> {
        let lhs = self.parse_logical_or()?;
        let Some(op) = self.match_assign_op() else {
            return Ok(lhs);
        };
        if !lhs.is_syntactic_lvalue() {
            let (line, column) = lhs.line_column();
            return Err(ParseDiagnostic {
                code: DiagnosticCode::ParseLvalueRequired,
                message: "lvalue required as assignment target".to_owned(),
                token_kind: self.previous().kind.to_string(),
                lexeme: self.previous().lexeme.as_str().to_owned(),
                line,
                column,
                filename: self.filename.clone(),
                underline_previous_token_line: false,
            });
        }
        let (line, column) = lhs.line_column();
        let value = self.parse_expression()?; // right-associative
        Ok(Expr::Assign(AssignExpr {
            op,
            target: Box::new(lhs),
            value: Box::new(value),
            line,
            column,
            meta: Default::default(),
        }))
    }

    fn match_assign_op(&mut self) -> Option<AssignOp> {
        let op = match self.current().kind {
            TokenKind::Eq => AssignOp::Assign,
            TokenKind::PlusEq => AssignOp::AddAssign,
            TokenKind::MinusEq => AssignOp::SubAssign,
            TokenKind::StarEq => AssignOp::MulAssign,
            TokenKind::SlashEq => AssignOp::DivAssign,
            TokenKind::PercentEq => AssignOp::RemAssign,
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    fn parse_logical_or(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_logical_and()?;
        while self.check(TokenKind::PipePipe) {
            self.advance();
            let rhs = self.parse_logical_and()?;
            lhs = binary(BinOp::Or, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_logical_and(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_equality()?;
        while self.check(TokenKind::AmpAmp) {
            self.advance();
            let rhs = self.parse_equality()?;
            lhs = binary(BinOp::And, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_equality(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_relational()?;
        loop {
            let op = match self.current().kind {
                TokenKind::EqEq => BinOp::Eq,
                TokenKind::BangEq => BinOp::Ne,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_relational()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_relational(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_additive()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Lt => BinOp::Lt,
                TokenKind::LtEq => BinOp::Le,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::GtEq => BinOp::Ge,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_additive()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_additive(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_multiplicative()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_multiplicative(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                TokenKind::Percent => BinOp::Rem,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> PResult<Expr> {
        let op = match self.current().kind {
            TokenKind::Plus => UnOp::Plus,
            TokenKind::Minus => UnOp::Neg,
            TokenKind::Bang => UnOp::Not,
            TokenKind::Star => UnOp::Deref,
            TokenKind::Amp => UnOp::AddrOf,
            TokenKind::PlusPlus => UnOp::PreInc,
            TokenKind::MinusMinus => UnOp::PreDec,
            _ => return self.parse_postfix(),
        };
        let tok = self.advance();
        let operand = self.parse_unary()?;
        Ok(Expr::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
            line: tok.line,
            column: tok.column,
            meta: Default::default(),
        }))
    }

    fn parse_postfix(&mut self) -> PResult<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.current().kind {
                TokenKind::PlusPlus => {
                    self.advance();
                    expr = postfix(PostfixOp::Inc, expr);
                }
                TokenKind::MinusMinus => {
                    self.advance();
                    expr = postfix(PostfixOp::Dec, expr);
                }
                TokenKind::LBracket => {
                    let tok = self.advance();
                    let index = self.parse_expression()?;
                    self.expect(TokenKind::RBracket, "']'")?;
                    expr = Expr::Subscript(SubscriptExpr {
                        base: Box::new(expr),
                        index: Box::new(index),
                        line: tok.line,
                        column: tok.column,
                        meta: Default::default(),
                    });
                }
                TokenKind::LParen => {
                    let tok = self.advance();
                    let args = self.parse_arg_list()?;
                    self.expect(TokenKind::RParen, "')'")?;
                    expr = Expr::Call(CallExpr {
                        callee: Box::new(expr),
                        args,
                        line: tok.line,
                        column: tok.column,
                        meta: Default::default(),
                    });
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_arg_list(&mut self) -> PResult<Vec<Arg>> {
        let mut args = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_arg()?);
            if self.match_tok(TokenKind::Comma).is_none() {
                break;
            }
        }
        Ok(args)
    }

    fn parse_arg(&mut self) -> PResult<Arg> {
        if self.check(TokenKind::LBrace) {
            Ok(Arg::List(self.parse_init_list()?))
        } else {
            Ok(Arg::Expr(self.parse_expression()?))
        }
    }

    fn parse_primary(&mut self) -> PResult<Expr> {
        let tok = *self.current();
        match tok.kind {
            TokenKind::IntLiteral => {
                self.advance();
                let value = tok.lexeme.as_str().parse::<i64>().unwrap_or(0);
                Ok(Expr::Literal(Literal::Int(IntLiteral {
                    value,
                    line: tok.line,
                    column: tok.column,
                    meta: Default::default(),
                })))
            }
            TokenKind::FloatLiteral => {
                self.advance();
                let value = tok.lexeme.as_str().parse::<f64>().unwrap_or(0.0);
                Ok(Expr::Literal(Literal::Float(FloatLiteral {
                    value,
                    line: tok.line,
                    column: tok.column,
                    meta: Default::default(),
                })))
            }
            TokenKind::True | TokenKind::False => {
                self.advance();
                Ok(Expr::Literal(Literal::Bool(BoolLiteral {
                    value: tok.kind == TokenKind::True,
                    line: tok.line,
                    column: tok.column,
                    meta: Default::default(),
                })))
            }
            // §9.2: `Primary` omits string literals in the written grammar,
            // but the lexer emits them and programs use them — accepted
            // here as the open question directs.
            TokenKind::StringLiteral => {
                self.advance();
                Ok(Expr::Literal(Literal::String(StringLiteral {
                    value: tok.lexeme,
                    line: tok.line,
                    column: tok.column,
                    meta: Default::default(),
                })))
            }
            TokenKind::CharLiteral => {
                self.advance();
                Ok(Expr::Literal(Literal::Char(CharLiteral {
                    value: tok.lexeme,
                    line: tok.line,
                    column: tok.column,
                    meta: Default::default(),
                })))
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::Identifier(IdentExpr {
                    name: tok.lexeme,
                    line: tok.line,
                    column: tok.column,
                    meta: Default::default(),
                }))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            _ => Err(self.expected("expression")),
        }
    }
}

fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    let (line, column) = lhs.line_column();
    Expr::Binary(BinaryExpr { op, lhs: Box::new(lhs), rhs: Box::new(rhs), line, column, meta: Default::default() })
}

fn postfix(op: PostfixOp, operand: Expr) -> Expr {
    let (line, column) = operand.line_column();
    Expr::Postfix(PostfixExpr { op, operand: Box::new(operand), line, column, meta: Default::default() })
}
