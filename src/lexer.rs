// File: src/lexer.rs
//
// Lexical analyzer (tokenizer) for the Monkey programming language.
// Converts source code text into a stream of tokens for parsing.
//
// Supports:
// - Keywords: fn, let, if, else, true, false, return
// - Identifiers ([A-Za-z_]+) and integer literals
// - String literals between double quotes (no escape sequences)
// - Operators: +, -, *, /, !, =, ==, !=, <, >
// - Punctuation: ( ) { } [ ] , ; :

use crate::token::Token;

/// Stateful tokenizer over a source string.
///
/// `next_token` consumes one token per call and keeps returning
/// `Token::Eof` once the input is exhausted. There is no way to rewind.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    /// Creates a lexer positioned at the start of `source`.
    pub fn new(source: &str) -> Self {
        Lexer { chars: source.chars().collect(), pos: 0 }
    }

    /// The character under the cursor, if any input remains.
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// The character one past the cursor, used to resolve two-character
    /// operators like `==` and `!=`.
    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads the maximal run of identifier characters starting at the
    /// cursor and resolves it against the keyword table.
    fn read_identifier(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphabetic() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        Token::lookup_ident(word)
    }

    /// Reads the maximal run of digits. Monkey integers are plain digit
    /// runs, so the parse cannot fail for anything this accepts.
    fn read_number(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        let digits: String = self.chars[start..self.pos].iter().collect();
        Token::Int(digits.parse().unwrap_or(0))
    }

    /// Reads a string literal. The cursor is on the opening quote.
    /// There is no escape processing; an unterminated string silently
    /// consumes the rest of the input.
    fn read_string(&mut self) -> Token {
        self.advance(); // opening quote
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            self.advance();
        }
        let content: String = self.chars[start..self.pos].iter().collect();
        if self.peek() == Some('"') {
            self.advance(); // closing quote
        }
        Token::Str(content)
    }

    /// Produces the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let c = match self.peek() {
            Some(c) => c,
            None => return Token::Eof,
        };

        match c {
            '=' => {
                if self.peek_next() == Some('=') {
                    self.advance();
                    self.advance();
                    Token::Eq
                } else {
                    self.advance();
                    Token::Assign
                }
            }
            '!' => {
                if self.peek_next() == Some('=') {
                    self.advance();
                    self.advance();
                    Token::NotEq
                } else {
                    self.advance();
                    Token::Bang
                }
            }
            '+' => {
                self.advance();
                Token::Plus
            }
            '-' => {
                self.advance();
                Token::Minus
            }
            '*' => {
                self.advance();
                Token::Asterisk
            }
            '/' => {
                self.advance();
                Token::Slash
            }
            '<' => {
                self.advance();
                Token::Lt
            }
            '>' => {
                self.advance();
                Token::Gt
            }
            ',' => {
                self.advance();
                Token::Comma
            }
            ';' => {
                self.advance();
                Token::Semicolon
            }
            ':' => {
                self.advance();
                Token::Colon
            }
            '(' => {
                self.advance();
                Token::LParen
            }
            ')' => {
                self.advance();
                Token::RParen
            }
            '{' => {
                self.advance();
                Token::LBrace
            }
            '}' => {
                self.advance();
                Token::RBrace
            }
            '[' => {
                self.advance();
                Token::LBracket
            }
            ']' => {
                self.advance();
                Token::RBracket
            }
            '"' => self.read_string(),
            c if c.is_ascii_alphabetic() || c == '_' => self.read_identifier(),
            c if c.is_ascii_digit() => self.read_number(),
            other => {
                self.advance();
                Token::Illegal(other)
            }
        }
    }
}

/// Iterating a lexer yields every token up to and including `Eof`, then
/// fuses.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.pos > self.chars.len() {
            return None;
        }
        let token = self.next_token();
        if token == Token::Eof {
            // Step past the end so the next call returns None.
            self.pos = self.chars.len() + 1;
        }
        Some(token)
    }
}
