//! SQL parser: converts the token stream into an AST.
//! Hand-written recursive descent, one routine per grammar rule. The first
//! grammar violation aborts the parse; there is no recovery.

use crate::error::{ParseError, Result};
use crate::sql::ast::Statement;
use crate::sql::lexer::TokenSource;
use crate::sql::stream::TokenStream;

mod create;
mod expr;
mod insert;
mod select;

#[cfg(test)]
mod tests;

/// Parse one SQL statement into its AST root.
pub fn parse_query(query: &str) -> Result<Statement> {
    let mut ts = TokenStream::new(query);
    parse_statement(&mut ts)
}

/// Dispatch on the first token's keyword. The decision is final: no
/// backtracking across statement kinds.
pub fn parse_statement<S: TokenSource>(ts: &mut TokenStream<S>) -> Result<Statement> {
    if ts.is_eof() {
        return Err(ParseError::Failed);
    }

    let keyword = ts.current().text.to_uppercase();
    match keyword.as_str() {
        "SELECT" => select::parse_select(ts).map(Statement::Select),
        "CREATE" => create::parse_create_table(ts).map(Statement::CreateTable),
        "INSERT" => insert::parse_insert(ts).map(Statement::Insert),
        _ => Err(ParseError::syntax(format!(
            "unsupported statement type: {:?}",
            ts.current().text
        ))),
    }
}
