use crate::{
    error::{Error, ErrorKind, Result},
    keywords,
    report::ErrorSink,
    token::{Literal, Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use std::str::CharIndices;
use tracing::{debug, trace};

pub struct Scanner<'a> {
    source: &'a str,
    src: PeekMoreIterator<CharIndices<'a>>,
    start: usize,
    current: usize,
    start_line: usize,
    line: usize,
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;

            if let Some(scanned) = self.scan_token() {
                return Some(scanned.map(|(kind, literal)| self.make_token(kind, literal)));
            }
        }
        None
    }
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            src: source.char_indices().peekmore(),
            start: 0,
            current: 0,
            start_line: 1,
            line: 1,
        }
    }

    /// Scans the whole source, reporting lexical errors to `sink` as they
    /// are found. The result always ends with a single `EndOfFile` token.
    /// Invalid input is reported once per character, not per byte: a
    /// multi-byte character such as `€` is skipped whole with one error.
    pub fn scan_tokens(mut self, sink: &mut impl ErrorSink) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut error_count = 0;

        for scanned in self.by_ref() {
            match scanned {
                Ok(token) => {
                    trace!(kind = %token.kind, line = token.line, "token");
                    tokens.push(token);
                },
                Err(e) => {
                    trace!(line = e.line(), "{}", e.message());
                    error_count += 1;
                    sink.report(e);
                },
            }
        }

        tokens.push(Token::eof(self.line));
        debug!(tokens = tokens.len(), errors = error_count, lines = self.line, "scan finished");
        tokens
    }

    /// `None` means the characters consumed produce no token.
    fn scan_token(&mut self) -> Option<Result<(TokenKind, Option<Literal>)>> {
        let c = self.advance()?;

        use TokenKind::*;
        let kind = match c {
            '(' => LeftParen,
            ')' => RightParen,
            '{' => LeftBrace,
            '}' => RightBrace,
            ',' => Comma,
            '.' => Dot,
            '-' => Minus,
            '+' => Plus,
            ';' => Semicolon,
            '%' => Percent,
            '*' => if self.does_next_match('*') { Power } else { Star },
            '/' => {
                if self.does_next_match('*') {
                    return self.skip_block_comment().err().map(Err);
                }
                if self.does_next_match('/') { DoubleSlash } else { Slash }
            },
            '!' => if self.does_next_match('=') { BangEqual } else { Bang },
            '=' => if self.does_next_match('=') { EqualEqual } else { Equal },
            '<' => if self.does_next_match('=') { LessEqual } else { Less },
            '>' => if self.does_next_match('=') { GreaterEqual } else { Greater },
            '#' => {
                self.advance_until(|n| n == '\n');
                return None;
            },
            ' ' | '\r' | '\t' => return None,
            '\n' => {
                self.line += 1;
                return None;
            },
            '"' => return Some(self.extract_string()),
            c if c.is_ascii_digit() => return Some(self.extract_number()),
            c if can_start_identifier(c) => return Some(Ok(self.extract_identifier())),
            c => return Some(Err(self.error(ErrorKind::UnexpectedCharacter(c)))),
        };

        Some(Ok((kind, None)))
    }

    fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        Token::new(kind, self.lexeme(), literal, self.start_line)
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::lexical(self.line, kind)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let (i, c) = self.src.next()?;
        self.current = i + c.len_utf8();
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.peek_nth(0)
    }

    fn peek_nth(&mut self, n: usize) -> Option<char> {
        self.src.peek_nth(n).map(|&(_, c)| c)
    }

    fn does_next_match(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn does_next_pair_match(&mut self, first: char, second: char) -> bool {
        if self.peek() == Some(first) && self.peek_nth(1) == Some(second) {
            self.advance();
            self.advance();
            true
        } else {
            false
        }
    }

    fn extract_string(&mut self) -> Result<(TokenKind, Option<Literal>)> {
        self.advance_until(|n| n == '"');

        match self.advance() {
            None => Err(self.error(ErrorKind::UnterminatedString)),
            Some(_) => { // the closing quote, due to advance_until
                let lexeme = self.lexeme();
                let contents = &lexeme[1..lexeme.len() - 1];
                Ok((TokenKind::String, Some(Literal::String(contents.to_string()))))
            },
        }
    }

    fn extract_number(&mut self) -> Result<(TokenKind, Option<Literal>)> {
        self.advance_until(|n| !n.is_ascii_digit());

        if self.peek() == Some('.') && self.peek_nth(1).map_or(false, |n| n.is_ascii_digit()) {
            self.advance();
            self.advance_until(|n| !n.is_ascii_digit());
        }

        match self.lexeme().parse() {
            Err(_) => Err(self.error(ErrorKind::InvalidNumber(self.lexeme().to_string()))),
            Ok(number) => Ok((TokenKind::Number, Some(Literal::Number(number)))),
        }
    }

    fn extract_identifier(&mut self) -> (TokenKind, Option<Literal>) {
        self.advance_until(|n| !is_part_of_valid_identifier(n));

        let kind = keywords::lookup(self.lexeme()).unwrap_or(TokenKind::Identifier);
        (kind, None)
    }

    /// Called with the opening `/*` already consumed. Nested comments must
    /// each be closed before the outer one is.
    fn skip_block_comment(&mut self) -> Result<()> {
        let mut depth = 1usize;

        while depth > 0 {
            if self.does_next_pair_match('/', '*') {
                depth += 1;
            } else if self.does_next_pair_match('*', '/') {
                depth -= 1;
            } else {
                match self.advance() {
                    Some('\n') => self.line += 1,
                    Some(_) => {},
                    None => return Err(self.error(ErrorKind::UnterminatedBlockComment)),
                }
            }
        }

        Ok(())
    }

    /// Consumes characters up to, but not including, the first one that
    /// satisfies `should_stop`. Newlines passed over are counted.
    fn advance_until(&mut self, should_stop: impl Fn(char) -> bool) {
        while let Some(next) = self.peek() {
            if should_stop(next) {
                break;
            }
            self.advance();
            if next == '\n' {
                self.line += 1;
            }
        }
    }
}

fn can_start_identifier(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_part_of_valid_identifier(c: char) -> bool {
    can_start_identifier(c) || c.is_ascii_digit()
}
