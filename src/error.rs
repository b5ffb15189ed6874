use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("failed to parse query")]
    Failed,

    #[error("syntax error in sql query: {0}")]
    Syntax(String),
}

impl ParseError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        ParseError::Syntax(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
