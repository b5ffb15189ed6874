//! SQL lexer (tokenizer) using nom.
//!
//! Pull-based: each call to [`TokenSource::scan`] yields one raw token,
//! including whitespace runs. The grammar layer never sees whitespace; the
//! token stream filters it out.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{anychar, char, digit1, multispace1},
    IResult,
};

/// Kind tag carried by every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Word token: identifier or keyword (keywords are matched on literal
    /// text by the grammar layer, not here).
    Identifier,
    /// Decimal integer literal. Range checks happen in the grammar layer.
    Number,
    /// Single-quoted string literal; `text` excludes the delimiters.
    String,
    /// The NULL keyword.
    Null,
    /// Whitespace run.
    Space,
    /// Operator or punctuation text.
    Punct,
    /// End of input, with empty literal text.
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn end_of_input() -> Self {
        Token {
            kind: TokenKind::Eof,
            text: String::new(),
        }
    }
}

/// Minimal contract between the lexer and the grammar layer. Any tokenizer
/// producing the same kind taxonomy is interchangeable.
pub trait TokenSource {
    /// Produce the next raw token. Once the input is exhausted this must
    /// keep returning the end-of-input token.
    fn scan(&mut self) -> Token;
}

/// Default tokenizer over an in-memory query string.
pub struct Lexer<'a> {
    rest: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(query: &'a str) -> Self {
        Lexer { rest: query }
    }
}

impl TokenSource for Lexer<'_> {
    fn scan(&mut self) -> Token {
        if self.rest.is_empty() {
            return Token::end_of_input();
        }
        match lex_token(self.rest) {
            Ok((rest, token)) => {
                self.rest = rest;
                token
            }
            // lex_punct accepts any character, so this only fires on an
            // empty remainder
            Err(_) => {
                self.rest = "";
                Token::end_of_input()
            }
        }
    }
}

fn lex_token(input: &str) -> IResult<&str, Token> {
    alt((
        lex_space,
        lex_operator,
        lex_string_literal,
        lex_number,
        lex_word,
        lex_punct,
    ))(input)
}

fn lex_space(input: &str) -> IResult<&str, Token> {
    let (rest, ws) = multispace1(input)?;
    Ok((
        rest,
        Token {
            kind: TokenKind::Space,
            text: ws.to_string(),
        },
    ))
}

/// Comparison operators lex as maximal runs of operator characters, so an
/// unknown combination like `<=>` comes out as one token and is rejected by
/// the expression grammar rather than silently split.
fn lex_operator(input: &str) -> IResult<&str, Token> {
    let (rest, op) = take_while1(|c: char| matches!(c, '=' | '!' | '<' | '>'))(input)?;
    Ok((
        rest,
        Token {
            kind: TokenKind::Punct,
            text: op.to_string(),
        },
    ))
}

fn lex_string_literal(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('\'')(input)?;
    let mut value = String::new();
    let mut chars = input.char_indices();

    loop {
        match chars.next() {
            Some((i, '\'')) => {
                // '' is an escaped quote
                if input[i + 1..].starts_with('\'') {
                    chars.next();
                    value.push('\'');
                } else {
                    return Ok((
                        &input[i + 1..],
                        Token {
                            kind: TokenKind::String,
                            text: value,
                        },
                    ));
                }
            }
            Some((_, c)) => value.push(c),
            // Unterminated literal runs to end of input; the grammar layer
            // fails on whatever it expected next.
            None => {
                return Ok((
                    "",
                    Token {
                        kind: TokenKind::String,
                        text: value,
                    },
                ))
            }
        }
    }
}

fn lex_number(input: &str) -> IResult<&str, Token> {
    let (rest, digits) = digit1(input)?;
    Ok((
        rest,
        Token {
            kind: TokenKind::Number,
            text: digits.to_string(),
        },
    ))
}

fn lex_word(input: &str) -> IResult<&str, Token> {
    let (rest, word) = take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    let kind = if word.eq_ignore_ascii_case("NULL") {
        TokenKind::Null
    } else {
        TokenKind::Identifier
    };
    Ok((
        rest,
        Token {
            kind,
            text: word.to_string(),
        },
    ))
}

/// Fallback: any other single character is punctuation. The lexer itself
/// never errors; the grammar layer rejects tokens it does not expect.
fn lex_punct(input: &str) -> IResult<&str, Token> {
    let (rest, c) = anychar(input)?;
    Ok((
        rest,
        Token {
            kind: TokenKind::Punct,
            text: c.to_string(),
        },
    ))
}
