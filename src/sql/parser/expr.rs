//! WHERE-clause expression grammar.

use crate::error::{ParseError, Result};
use crate::sql::ast::{ComparisonOperator, Expr, LogicalOperator};
use crate::sql::lexer::{TokenKind, TokenSource};
use crate::sql::stream::TokenStream;

/// Parse a full expression: a comparison optionally chained with AND/OR by
/// right recursion. Grouping is right-associative and AND/OR share one
/// precedence level, so `a=1 AND b=2 OR c=3` groups as
/// `a=1 AND (b=2 OR c=3)`. Parentheses are not part of the grammar.
pub(super) fn parse_expression<S: TokenSource>(ts: &mut TokenStream<S>) -> Result<Expr> {
    let left = parse_comparison(ts)?;

    let keyword = ts.current().text.to_uppercase();
    let operator = match keyword.as_str() {
        "AND" => LogicalOperator::And,
        "OR" => LogicalOperator::Or,
        _ => return Ok(left),
    };
    ts.advance();

    let right = parse_expression(ts)?;
    Ok(Expr::Logical {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

/// `<identifier> <comparison-op> <operand>`
fn parse_comparison<S: TokenSource>(ts: &mut TokenStream<S>) -> Result<Expr> {
    let column = ts
        .consume_identifier()
        .map_err(|_| ParseError::syntax("expected column name"))?;
    let left = Expr::ColumnRef { name: column };

    let operator = match ComparisonOperator::from_symbol(&ts.current().text) {
        Some(op) => op,
        None => {
            return Err(ParseError::syntax(format!(
                "expected comparison operator (>, <, =, !=, >=, <=) in 'WHERE' clause, got {:?}",
                ts.current().text
            )))
        }
    };
    ts.advance();

    let right = parse_operand(ts)?;
    Ok(Expr::Comparison {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

/// Right-hand side of a comparison: integer literal, string literal, or a
/// column reference.
fn parse_operand<S: TokenSource>(ts: &mut TokenStream<S>) -> Result<Expr> {
    let token = ts.current();
    let operand = match token.kind {
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
        TokenKind::Identifier => Expr::ColumnRef {
            name: token.text.clone(),
        },
        _ => return Err(ParseError::syntax("expected value")),
    };
    ts.advance();
    Ok(operand)
}
