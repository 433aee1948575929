pub mod error;
pub mod keywords;
pub mod report;
pub mod scanner;
pub mod token;

pub use crate::{
    error::{Error, ErrorKind, Result},
    report::{Diagnostics, ErrorSink, Reporter},
    scanner::Scanner,
    token::{Literal, Token, TokenKind},
};

/// Tokenizes `source` in one pass. Lexical errors go to `sink`; scanning
/// continues past them, and the returned tokens always end with `EndOfFile`.
pub fn scan(source: &str, sink: &mut impl ErrorSink) -> Vec<Token> {
    Scanner::new(source).scan_tokens(sink)
}
