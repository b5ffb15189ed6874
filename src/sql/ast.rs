//! AST data model. Nodes are plain data, built bottom-up by the parsers and
//! immutable once constructed.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    Select(SelectStatement),
    CreateTable(CreateTableStatement),
    Insert(InsertStatement),
}

impl Statement {
    /// Indented JSON dump of the tree, used by the CLI's `--debug-ast`
    /// output. Two-space indentation, field names as declared.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectStatement {
    /// Never empty: the projection grammar requires `*` or at least one
    /// column name.
    pub projections: Vec<ProjectionItem>,
    pub from: TableRef,
    pub selection: Option<Expr>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTableStatement {
    pub table_name: String,
    /// Never empty: zero columns is a syntax error.
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertStatement {
    pub table_name: String,
    /// Never empty; each element is a literal expression.
    pub values: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProjectionItem {
    Wildcard,
    Expression(Expr),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDef {
    pub name: String,
    pub column_type: ColumnType,
}

/// The closed set of column types accepted by CREATE TABLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    Int,
    BigInt,
    Text,
}

impl ColumnType {
    /// Look up an upper-cased type keyword. Anything outside the closed set
    /// is rejected.
    pub fn from_keyword(keyword: &str) -> Option<ColumnType> {
        match keyword {
            "INT" => Some(ColumnType::Int),
            "BIGINT" => Some(ColumnType::BigInt),
            "TEXT" => Some(ColumnType::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    ColumnRef {
        name: String,
    },
    LiteralInt {
        value: i64,
    },
    LiteralString {
        value: String,
    },
    LiteralNull,
    Comparison {
        left: Box<Expr>,
        operator: ComparisonOperator,
        right: Box<Expr>,
    },
    Logical {
        left: Box<Expr>,
        operator: LogicalOperator,
        right: Box<Expr>,
    },
}

/// The closed set of comparison operators accepted in WHERE clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl ComparisonOperator {
    pub fn from_symbol(symbol: &str) -> Option<ComparisonOperator> {
        match symbol {
            "=" => Some(ComparisonOperator::Eq),
            "!=" => Some(ComparisonOperator::Ne),
            ">" => Some(ComparisonOperator::Gt),
            ">=" => Some(ComparisonOperator::Ge),
            "<" => Some(ComparisonOperator::Lt),
            "<=" => Some(ComparisonOperator::Le),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicalOperator {
    And,
    Or,
}
