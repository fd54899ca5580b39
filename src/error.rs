//! Error types raised by the reader and evaluator.
//!
//! Three kinds are distinguished, matching the language's error taxonomy:
//! a [`LispError::Syntax`] error from the scanner/reader or from a special
//! form whose shape is malformed, a [`LispError::Name`] error for an unbound
//! variable or procedure, and a [`LispError::Runtime`] error for a
//! well-formed program that fails during evaluation.

use thiserror::Error;

pub type EvalResult<T> = Result<T, LispError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LispError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("unbound name: {0}")]
    Name(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}

impl LispError {
    pub fn syntax<S: Into<String>>(msg: S) -> Self {
        LispError::Syntax(msg.into())
    }

    pub fn name<S: Into<String>>(msg: S) -> Self {
        LispError::Name(msg.into())
    }

    pub fn runtime<S: Into<String>>(msg: S) -> Self {
        LispError::Runtime(msg.into())
    }
}
