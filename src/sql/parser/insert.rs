//! `INSERT INTO <identifier> VALUES ( <value> {, <value>} ) [;]`

use crate::error::{ParseError, Result};
use crate::sql::ast::{Expr, InsertStatement};
use crate::sql::lexer::{TokenKind, TokenSource};
use crate::sql::stream::TokenStream;

pub(super) fn parse_insert<S: TokenSource>(ts: &mut TokenStream<S>) -> Result<InsertStatement> {
    ts.consume("INSERT")?;
    ts.consume("INTO")?;

    let table_name = ts
        .consume_identifier()
        .map_err(|_| ParseError::syntax("expected table name"))?;

    ts.consume("VALUES")?;
    let values = parse_values_list(ts)?;

    if !ts.is_eof() && ts.current().text != ";" {
        return Err(ParseError::syntax(
            "unexpected token after INSERT statement",
        ));
    }

    Ok(InsertStatement { table_name, values })
}

fn parse_values_list<S: TokenSource>(ts: &mut TokenStream<S>) -> Result<Vec<Expr>> {
    ts.consume("(")?;

    if ts.current().text == ")" {
        return Err(ParseError::syntax(
            "INSERT statement must have at least one value",
        ));
    }

    let mut values = Vec::new();
    loop {
        values.push(parse_value(ts)?);

        if ts.current().text == "," {
            ts.advance();
            continue;
        }
        break;
    }

    ts.consume(")")?;
    Ok(values)
}

/// A single literal: integer, string, or NULL.
fn parse_value<S: TokenSource>(ts: &mut TokenStream<S>) -> Result<Expr> {
    let token = ts.current();
    let value = match token.kind {
        TokenKind::Number => {
            let value: i64 = token
                .text
                .parse()
                .map_err(|_| ParseError::syntax("invalid integer"))?;
            Expr::LiteralInt { value }
        }
        TokenKind::String => Expr::LiteralString {
            value: token.text.clone(),
        },
        TokenKind::Null => Expr::LiteralNull,
        _ => return Err(ParseError::syntax("expected value")),
    };
    ts.advance();
    Ok(value)
}
