//! Compiler Errors
//!
//! Corresponds to the error helpers in packages/compiler/src/util.ts

use crate::parse_util::ParseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompilerError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompilerError {
    /// A state the compiler should never reach.
    #[error("Internal Error: {0}")]
    Internal(String),

    /// Template or expression syntax error, with the parse errors that caused it.
    #[error("{msg}")]
    Syntax {
        msg: String,
        parse_errors: Vec<ParseError>,
    },

    #[error("Illegal state: {0}")]
    IllegalState(String),
}

impl CompilerError {
    pub fn internal(msg: impl Into<String>) -> Self {
        CompilerError::Internal(msg.into())
    }
}

/// Always fails with an internal error.
pub fn error<T>(msg: &str) -> Result<T> {
    Err(CompilerError::internal(msg))
}

pub fn syntax_error(msg: impl Into<String>, parse_errors: Option<Vec<ParseError>>) -> CompilerError {
    CompilerError::Syntax {
        msg: msg.into(),
        parse_errors: parse_errors.unwrap_or_default(),
    }
}

pub fn is_syntax_error(error: &CompilerError) -> bool {
    matches!(error, CompilerError::Syntax { .. })
}

/// Parse errors attached to a syntax error; empty for every other kind.
pub fn get_parse_errors(error: &CompilerError) -> &[ParseError] {
    match error {
        CompilerError::Syntax { parse_errors, .. } => parse_errors,
        _ => &[],
    }
}
