// File: src/parser.rs
//
// Pratt (operator-precedence) parser for the Monkey programming language.
// Transforms the lexer's token stream into an Abstract Syntax Tree (AST).
//
// Statements are parsed by straightforward recursive descent. Expressions
// use Pratt parsing: every token that can start an expression has a prefix
// parse function, every token that can continue one has an infix parse
// function plus a binding precedence. `parse_expression` keeps consuming
// infix operators while the next token binds tighter than the caller's
// floor, which yields correct precedence and left-associativity without a
// grammar rule per operator.
//
// Parse errors are collected as strings rather than aborting the parse; a
// failed production returns None and the parser resumes at the next
// statement, so one bad line still surfaces diagnostics for the rest.

use crate::ast::{BlockStmt, Expr, Program, Stmt};
use crate::lexer::Lexer;
use crate::token::Token;

/// Binding precedence for infix operators, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    /// == and !=
    Equals,
    /// < and >
    LessGreater,
    /// + and binary -
    Sum,
    /// * and /
    Product,
    /// Unary ! and -
    Prefix,
    /// foo(...)
    Call,
    /// foo[...]
    Index,
}

/// The precedence a token binds with when found in infix position.
/// Tokens that cannot continue an expression bind at Lowest, which ends
/// the enclosing expression.
fn precedence_of(token: &Token) -> Precedence {
    match token {
        Token::Eq | Token::NotEq => Precedence::Equals,
        Token::Lt | Token::Gt => Precedence::LessGreater,
        Token::Plus | Token::Minus => Precedence::Sum,
        Token::Asterisk | Token::Slash => Precedence::Product,
        Token::LParen => Precedence::Call,
        Token::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

/// Parser holds a two-token window over the lexer and accumulates
/// human-readable error strings as it goes.
pub struct Parser {
    lexer: Lexer,
    cur: Token,
    peek: Token,
    errors: Vec<String>,
}

impl Parser {
    /// Creates a parser and primes the two-token lookahead window.
    pub fn new(mut lexer: Lexer) -> Self {
        let cur = lexer.next_token();
        let peek = lexer.next_token();
        Parser { lexer, cur, peek, errors: Vec::new() }
    }

    /// Convenience constructor straight from source text.
    pub fn from_source(source: &str) -> Self {
        Parser::new(Lexer::new(source))
    }

    /// The parse errors collected so far. A non-empty list means the
    /// returned Program is incomplete and should not be evaluated.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn next_token(&mut self) {
        self.cur = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Advances past the next token if it matches, otherwise records an
    /// error and leaves the window untouched. Payload-free tokens only.
    fn expect_peek(&mut self, expected: &Token) -> bool {
        if self.peek == *expected {
            self.next_token();
            true
        } else {
            self.peek_error(expected.kind());
            false
        }
    }

    fn peek_error(&mut self, expected: &str) {
        self.errors.push(format!(
            "expected next token to be {}, got {} instead",
            expected, self.peek
        ));
    }

    /// Parses the entire token stream into a Program, accumulating
    /// diagnostics for every statement that fails to parse.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();
        while self.cur != Token::Eof {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }
        program
    }

    fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// let IDENT = expr [;]
    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let name = match &self.peek {
            Token::Ident(name) => name.clone(),
            _ => {
                self.peek_error("IDENT");
                return None;
            }
        };
        self.next_token(); // onto the identifier

        if !self.expect_peek(&Token::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.next_token();
        }
        Some(Stmt::Let { name, value })
    }

    /// return [expr] [;] - a bare return yields null.
    fn parse_return_statement(&mut self) -> Option<Stmt> {
        if matches!(self.peek, Token::Semicolon | Token::RBrace | Token::Eof) {
            if self.peek == Token::Semicolon {
                self.next_token();
            }
            return Some(Stmt::Return(None));
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.next_token();
        }
        Some(Stmt::Return(Some(value)))
    }

    /// A bare expression in statement position; the trailing semicolon is
    /// optional so the REPL can evaluate `1 + 2` without ceremony.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek == Token::Semicolon {
            self.next_token();
        }
        Some(Stmt::Expr(expr))
    }

    /// Pratt core: parse the prefix position, then fold in infix
    /// operators while the next token outbinds the caller's floor.
    fn parse_expression(&mut self, floor: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix_position()?;

        while self.peek != Token::Semicolon && floor < precedence_of(&self.peek) {
            left = match self.peek {
                Token::Plus
                | Token::Minus
                | Token::Asterisk
                | Token::Slash
                | Token::Eq
                | Token::NotEq
                | Token::Lt
                | Token::Gt => {
                    self.next_token();
                    self.parse_infix_expression(left)?
                }
                Token::LParen => {
                    self.next_token();
                    self.parse_call_expression(left)?
                }
                Token::LBracket => {
                    self.next_token();
                    self.parse_index_expression(left)?
                }
                _ => return Some(left),
            };
        }

        Some(left)
    }

    /// Dispatch table for tokens that can begin an expression.
    fn parse_prefix_position(&mut self) -> Option<Expr> {
        match &self.cur {
            Token::Ident(name) => Some(Expr::Identifier(name.clone())),
            Token::Int(n) => Some(Expr::IntegerLiteral(*n)),
            Token::Str(s) => Some(Expr::StringLiteral(s.clone())),
            Token::True => Some(Expr::BooleanLiteral(true)),
            Token::False => Some(Expr::BooleanLiteral(false)),
            Token::Bang | Token::Minus => self.parse_prefix_expression(),
            Token::LParen => self.parse_grouped_expression(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            other => {
                self.errors
                    .push(format!("no prefix parse function for {} found", other));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let op = self.cur.literal();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix { op, right: Box::new(right) })
    }

    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let op = self.cur.literal();
        let precedence = precedence_of(&self.cur);
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix { left: Box::new(left), op, right: Box::new(right) })
    }

    /// ( expr ) - grouping only changes how the tree is built, the parens
    /// themselves leave no node behind.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek == Token::Else {
            self.next_token();
            if !self.expect_peek(&Token::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// Reads statements until the closing brace (or end of input, for an
    /// unterminated block). Leaves the cursor on the closing brace.
    fn parse_block_statement(&mut self) -> BlockStmt {
        let mut block = BlockStmt::default();
        self.next_token();
        while self.cur != Token::RBrace && self.cur != Token::Eof {
            if let Some(stmt) = self.parse_statement() {
                block.statements.push(stmt);
            }
            self.next_token();
        }
        block
    }

    /// fn ( params ) { body }
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        let params = self.parse_function_parameters()?;
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();
        Some(Expr::FunctionLiteral { params, body })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut params = Vec::new();

        if self.peek == Token::RParen {
            self.next_token();
            return Some(params);
        }

        self.next_token();
        params.push(self.current_identifier()?);

        while self.peek == Token::Comma {
            self.next_token();
            self.next_token();
            params.push(self.current_identifier()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        Some(params)
    }

    fn current_identifier(&mut self) -> Option<String> {
        match &self.cur {
            Token::Ident(name) => Some(name.clone()),
            other => {
                self.errors
                    .push(format!("expected parameter name, got {} instead", other));
                None
            }
        }
    }

    /// Calls parse as an infix operator on '(' so they slot into the
    /// precedence ladder like any other operator.
    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let args = self.parse_expression_list(&Token::RParen)?;
        Some(Expr::Call { function: Box::new(function), args })
    }

    fn parse_index_expression(&mut self, object: Expr) -> Option<Expr> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&Token::RBracket) {
            return None;
        }
        Some(Expr::Index { object: Box::new(object), index: Box::new(index) })
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(&Token::RBracket)?;
        Some(Expr::ArrayLiteral(elements))
    }

    /// Shared comma-separated list parser for call arguments and array
    /// elements. The cursor starts on the opening delimiter.
    fn parse_expression_list(&mut self, end: &Token) -> Option<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek == *end {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek == Token::Comma {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(items)
    }

    /// { key: value, ... } - keys and values are arbitrary expressions;
    /// whether a key is usable is decided at evaluation time.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while self.peek != Token::RBrace {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;
            if !self.expect_peek(&Token::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if self.peek != Token::RBrace && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }
        Some(Expr::HashLiteral(pairs))
    }
}
