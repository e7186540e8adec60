// File: src/token.rs
//
// Token definitions for the Monkey programming language.
// The lexer produces these; the parser consumes them one at a time.

use std::fmt;

/// A single lexical token.
///
/// Identifier, integer, and string tokens carry their literal payload;
/// every other token is fully described by its variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A character the lexer does not recognize
    Illegal(char),
    /// End of input. The lexer keeps returning this once it is reached.
    Eof,

    // Identifiers and literals
    Ident(String),
    Int(i64),
    Str(String),

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    Colon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Token {
    /// Maps an identifier-shaped word to its keyword token, or wraps it
    /// as an `Ident` if it is not a keyword.
    pub fn lookup_ident(word: String) -> Token {
        match word.as_str() {
            "fn" => Token::Function,
            "let" => Token::Let,
            "true" => Token::True,
            "false" => Token::False,
            "if" => Token::If,
            "else" => Token::Else,
            "return" => Token::Return,
            _ => Token::Ident(word),
        }
    }

    /// The literal text this token was lexed from.
    pub fn literal(&self) -> String {
        match self {
            Token::Illegal(c) => c.to_string(),
            Token::Eof => String::new(),
            Token::Ident(name) => name.clone(),
            Token::Int(n) => n.to_string(),
            Token::Str(s) => s.clone(),
            _ => self.kind().to_string(),
        }
    }

    /// A short name for the token's kind, independent of its payload.
    /// Parser diagnostics use this so that `Ident("foo")` reads as `IDENT`.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Illegal(_) => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Ident(_) => "IDENT",
            Token::Int(_) => "INT",
            Token::Str(_) => "STRING",
            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Bang => "!",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Eq => "==",
            Token::NotEq => "!=",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Colon => ":",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::Function => "fn",
            Token::Let => "let",
            Token::True => "true",
            Token::False => "false",
            Token::If => "if",
            Token::Else => "else",
            Token::Return => "return",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}
