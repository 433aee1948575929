use std::result;

use thiserror::Error as ThisError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated block comment.")]
    UnterminatedBlockComment,
    #[error("Could not convert {0} into a number.")]
    InvalidNumber(String),
}

/// A lexical error. Always recoverable: the scanner reports it and carries on.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("[line {line}] Error: {kind}")]
pub struct Error {
    kind: ErrorKind,
    line: usize,
}

impl Error {
    pub fn lexical(line: usize, kind: ErrorKind) -> Error {
        Error { kind, line }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
