//! minisql: a SQL front end for a small subset of the language.
//!
//! Translates SELECT, CREATE TABLE, and INSERT statements into a typed AST
//! via a hand-written recursive descent parser:
//! - Pull-based lexer behind a minimal `TokenSource` contract
//! - One-token-lookahead `TokenStream` cursor
//! - Per-statement grammars with classified syntax errors
//!
//! Parsing is a pure function of the input text. No execution engine, no
//! catalog, no planning.

pub mod error;
pub mod sql;

pub use crate::error::{ParseError, Result};
pub use crate::sql::ast::Statement;
pub use crate::sql::parser::parse_query;
