//! `CREATE TABLE <identifier> ( <column-def> {, <column-def>} ) [;]`

use crate::error::{ParseError, Result};
use crate::sql::ast::{ColumnDef, ColumnType, CreateTableStatement};
use crate::sql::lexer::TokenSource;
use crate::sql::stream::TokenStream;

pub(super) fn parse_create_table<S: TokenSource>(
    ts: &mut TokenStream<S>,
) -> Result<CreateTableStatement> {
    ts.consume("CREATE")?;
    ts.consume("TABLE")?;

    let table_name = ts
        .consume_identifier()
        .map_err(|_| ParseError::syntax("expected table name"))?;

    ts.consume("(")?;
    let columns = parse_column_definitions(ts)?;
    ts.consume(")")?;

    if !ts.is_eof() && ts.current().text != ";" {
        return Err(ParseError::syntax(
            "unexpected token after CREATE TABLE statement",
        ));
    }

    Ok(CreateTableStatement {
        table_name,
        columns,
    })
}

/// `<identifier> <identifier>` pairs; the second identifier is the column
/// type and must name one of the supported types.
fn parse_column_definitions<S: TokenSource>(ts: &mut TokenStream<S>) -> Result<Vec<ColumnDef>> {
    if ts.current().text == ")" {
        return Err(ParseError::syntax("table must have at least one column"));
    }

    let mut columns = Vec::new();
    loop {
        let name = ts
            .consume_identifier()
            .map_err(|_| ParseError::syntax("expected column name"))?;

        let type_keyword = ts
            .consume_identifier()
            .map_err(|_| ParseError::syntax("expected column type"))?
            .to_uppercase();

        let column_type = ColumnType::from_keyword(&type_keyword).ok_or_else(|| {
            ParseError::syntax(format!("unsupported column type {}", type_keyword))
        })?;

        columns.push(ColumnDef { name, column_type });

        if ts.current().text == "," {
            ts.advance();
            continue;
        }
        break;
    }

    Ok(columns)
}
