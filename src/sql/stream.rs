//! One-token-lookahead cursor over a [`TokenSource`].
//!
//! Whitespace tokens from the source are skipped transparently; the grammar
//! layer only ever sees significant tokens.

use crate::error::{ParseError, Result};
use crate::sql::lexer::{Lexer, Token, TokenKind, TokenSource};

pub struct TokenStream<S: TokenSource> {
    source: S,
    current: Token,
}

impl<'a> TokenStream<Lexer<'a>> {
    /// Token stream over a query string, using the default lexer.
    pub fn new(query: &'a str) -> Self {
        TokenStream::from_source(Lexer::new(query))
    }
}

impl<S: TokenSource> TokenStream<S> {
    pub fn from_source(mut source: S) -> Self {
        let current = next_significant(&mut source);
        TokenStream { source, current }
    }

    /// The lookahead token. Idempotent: repeated calls return the same token
    /// until [`advance`](Self::advance) is called.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Consume the current token and load the next non-whitespace token.
    /// A no-op once the end marker is reached.
    pub fn advance(&mut self) {
        if self.current.kind == TokenKind::Eof {
            return;
        }
        self.current = next_significant(&mut self.source);
    }

    /// Consume the current token if its literal matches `expected`
    /// case-insensitively.
    pub fn consume(&mut self, expected: &str) -> Result<()> {
        if !self.current.text.eq_ignore_ascii_case(expected) {
            return Err(ParseError::syntax(format!(
                "expected {}, got {:?}",
                expected, self.current.text
            )));
        }
        self.advance();
        Ok(())
    }

    pub fn consume_identifier(&mut self) -> Result<String> {
        self.consume_kind(TokenKind::Identifier, "identifier")
    }

    pub fn consume_number(&mut self) -> Result<String> {
        self.consume_kind(TokenKind::Number, "number")
    }

    pub fn consume_string(&mut self) -> Result<String> {
        self.consume_kind(TokenKind::String, "string")
    }

    fn consume_kind(&mut self, kind: TokenKind, expected: &str) -> Result<String> {
        if self.current.kind != kind {
            return Err(ParseError::syntax(format!(
                "expected {}, got {:?}",
                expected, self.current.text
            )));
        }
        let text = self.current.text.clone();
        self.advance();
        Ok(text)
    }

    /// True iff the current token is the end marker.
    pub fn is_eof(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }
}

fn next_significant<S: TokenSource>(source: &mut S) -> Token {
    loop {
        let token = source.scan();
        if token.kind != TokenKind::Space {
            return token;
        }
    }
}
