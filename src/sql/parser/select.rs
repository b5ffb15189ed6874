//! `SELECT <projection-list> FROM <identifier> [WHERE <expr>] [LIMIT <uint>] [;]`

use crate::error::{ParseError, Result};
use crate::sql::ast::{Expr, ProjectionItem, SelectStatement, TableRef};
use crate::sql::lexer::{TokenKind, TokenSource};
use crate::sql::stream::TokenStream;

use super::expr::parse_expression;

pub(super) fn parse_select<S: TokenSource>(ts: &mut TokenStream<S>) -> Result<SelectStatement> {
    ts.consume("SELECT")?;
    let projections = parse_projection_list(ts)?;
    ts.consume("FROM")?;
    let from = parse_table_name(ts)?;

    let mut selection = None;
    let mut limit = None;

    // Clause loop. A repeated WHERE (before any LIMIT) or a repeated LIMIT
    // overwrites the earlier clause; only the WHERE-before-LIMIT ordering is
    // enforced.
    loop {
        let keyword = ts.current().text.to_uppercase();
        match keyword.as_str() {
            "WHERE" => {
                if limit.is_some() {
                    return Err(ParseError::syntax("WHERE clause must come before LIMIT"));
                }
                ts.advance();
                selection = Some(parse_expression(ts)?);
            }
            "LIMIT" => {
                ts.advance();
                let text = ts
                    .consume_number()
                    .map_err(|_| ParseError::syntax("expected number after LIMIT"))?;
                let value: u64 = text
                    .parse()
                    .map_err(|_| ParseError::syntax("invalid LIMIT value"))?;
                limit = Some(value);
            }
            ";" => break,
            _ => {
                if ts.is_eof() {
                    break;
                }
                return Err(ParseError::syntax("unexpected token after SELECT statement"));
            }
        }
    }

    Ok(SelectStatement {
        projections,
        from,
        selection,
        limit,
    })
}

/// Either a single `*` (which terminates the list) or comma-separated column
/// names.
fn parse_projection_list<S: TokenSource>(ts: &mut TokenStream<S>) -> Result<Vec<ProjectionItem>> {
    let mut projections = Vec::new();

    loop {
        let token = ts.current();

        if token.text == "*" {
            projections.push(ProjectionItem::Wildcard);
            ts.advance();
            return Ok(projections);
        }

        if token.kind == TokenKind::Identifier {
            let name = token.text.clone();
            ts.advance();
            projections.push(ProjectionItem::Expression(Expr::ColumnRef { name }));

            if ts.current().text == "," {
                ts.advance();
                continue;
            }
            return Ok(projections);
        }

        return Err(ParseError::syntax("expected column name or *"));
    }
}

fn parse_table_name<S: TokenSource>(ts: &mut TokenStream<S>) -> Result<TableRef> {
    let name = ts
        .consume_identifier()
        .map_err(|_| ParseError::syntax("expected table name"))?;
    Ok(TableRef { name })
}
