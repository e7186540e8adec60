// Integration tests for the Monkey lexer
//
// These tests verify tokenization of complete source snippets: keyword
// and operator recognition, literal payloads, two-character operator
// resolution, and end-of-input behavior.

use monkey::lexer::Lexer;
use monkey::token::Token;

fn lex_all(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

#[test]
fn tokenizes_a_representative_program() {
    let source = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
"foobar"
"foo bar"
[1, 2];
{"foo": "bar"}
"#;

    let expected = vec![
        Token::Let,
        Token::Ident("five".to_string()),
        Token::Assign,
        Token::Int(5),
        Token::Semicolon,
        Token::Let,
        Token::Ident("ten".to_string()),
        Token::Assign,
        Token::Int(10),
        Token::Semicolon,
        Token::Let,
        Token::Ident("add".to_string()),
        Token::Assign,
        Token::Function,
        Token::LParen,
        Token::Ident("x".to_string()),
        Token::Comma,
        Token::Ident("y".to_string()),
        Token::RParen,
        Token::LBrace,
        Token::Ident("x".to_string()),
        Token::Plus,
        Token::Ident("y".to_string()),
        Token::Semicolon,
        Token::RBrace,
        Token::Semicolon,
        Token::Let,
        Token::Ident("result".to_string()),
        Token::Assign,
        Token::Ident("add".to_string()),
        Token::LParen,
        Token::Ident("five".to_string()),
        Token::Comma,
        Token::Ident("ten".to_string()),
        Token::RParen,
        Token::Semicolon,
        Token::Bang,
        Token::Minus,
        Token::Slash,
        Token::Asterisk,
        Token::Int(5),
        Token::Semicolon,
        Token::Int(5),
        Token::Lt,
        Token::Int(10),
        Token::Gt,
        Token::Int(5),
        Token::Semicolon,
        Token::If,
        Token::LParen,
        Token::Int(5),
        Token::Lt,
        Token::Int(10),
        Token::RParen,
        Token::LBrace,
        Token::Return,
        Token::True,
        Token::Semicolon,
        Token::RBrace,
        Token::Else,
        Token::LBrace,
        Token::Return,
        Token::False,
        Token::Semicolon,
        Token::RBrace,
        Token::Int(10),
        Token::Eq,
        Token::Int(10),
        Token::Semicolon,
        Token::Int(10),
        Token::NotEq,
        Token::Int(9),
        Token::Semicolon,
        Token::Str("foobar".to_string()),
        Token::Str("foo bar".to_string()),
        Token::LBracket,
        Token::Int(1),
        Token::Comma,
        Token::Int(2),
        Token::RBracket,
        Token::Semicolon,
        Token::LBrace,
        Token::Str("foo".to_string()),
        Token::Colon,
        Token::Str("bar".to_string()),
        Token::RBrace,
        Token::Eof,
    ];

    let mut lexer = Lexer::new(source);
    for (i, want) in expected.iter().enumerate() {
        let got = lexer.next_token();
        assert_eq!(got, *want, "token {} mismatch", i);
    }
}

#[test]
fn two_character_operators_take_the_longer_match() {
    assert_eq!(
        lex_all("== != = !"),
        vec![Token::Eq, Token::NotEq, Token::Assign, Token::Bang, Token::Eof]
    );
    // `===` is `==` followed by `=`, never three `=`.
    assert_eq!(lex_all("==="), vec![Token::Eq, Token::Assign, Token::Eof]);
    assert_eq!(lex_all("!=="), vec![Token::NotEq, Token::Assign, Token::Eof]);
}

#[test]
fn literal_tokens_round_trip_their_text() {
    let inputs = ["counter", "9876", "hello world"];
    let tokens = lex_all("counter 9876 \"hello world\"");
    for (token, want) in tokens.iter().zip(inputs) {
        assert_eq!(token.literal(), want);
    }
}

#[test]
fn keywords_are_not_identifiers() {
    assert_eq!(
        lex_all("fn let true false if else return"),
        vec![
            Token::Function,
            Token::Let,
            Token::True,
            Token::False,
            Token::If,
            Token::Else,
            Token::Return,
            Token::Eof,
        ]
    );
    // Prefixes and underscores stay identifiers.
    assert_eq!(
        lex_all("lets func _if"),
        vec![
            Token::Ident("lets".to_string()),
            Token::Ident("func".to_string()),
            Token::Ident("_if".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn unrecognized_characters_become_illegal_tokens() {
    assert_eq!(lex_all("5 @ 3"), vec![Token::Int(5), Token::Illegal('@'), Token::Int(3), Token::Eof]);
}

#[test]
fn unterminated_string_consumes_to_end_of_input() {
    assert_eq!(
        lex_all("\"never closed"),
        vec![Token::Str("never closed".to_string()), Token::Eof]
    );
}

#[test]
fn eof_is_idempotent() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token(), Token::Int(1));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn iterator_yields_eof_exactly_once() {
    let tokens = lex_all("1 + 2");
    assert_eq!(
        tokens,
        vec![Token::Int(1), Token::Plus, Token::Int(2), Token::Eof]
    );
    assert_eq!(lex_all(""), vec![Token::Eof]);
}
