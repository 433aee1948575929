//! Destinations for lexical errors.
//!
//! The scanner never stops on bad input; it hands each error to an
//! [`ErrorSink`] and keeps going. Whoever owns the sink decides what an
//! error means for the run as a whole.

use std::io::Write;

use tracing::warn;

use crate::error::Error;

pub trait ErrorSink {
    fn report(&mut self, error: Error);
}

impl<F: FnMut(Error)> ErrorSink for F {
    fn report(&mut self, error: Error) {
        self(error)
    }
}

/// Collects every reported error. One per scan; there is nothing to reset.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl ErrorSink for Diagnostics {
    fn report(&mut self, error: Error) {
        self.errors.push(error);
    }
}

/// Writes each error to `W` as soon as it is reported.
pub struct Reporter<W> {
    out: W,
    had_error: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, had_error: false }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorSink for Reporter<W> {
    fn report(&mut self, error: Error) {
        self.had_error = true;
        if let Err(e) = writeln!(self.out, "{}", error) {
            warn!("failed to write diagnostic: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn unterminated(line: usize) -> Error {
        Error::lexical(line, ErrorKind::UnterminatedString)
    }

    #[test]
    fn diagnostics_collect_in_order() {
        let mut d = Diagnostics::new();
        assert!(!d.had_error());

        d.report(unterminated(1));
        d.report(unterminated(4));

        assert!(d.had_error());
        assert_eq!(2, d.len());
        let lines: Vec<_> = d.into_errors().iter().map(Error::line).collect();
        assert_eq!(vec![1, 4], lines);
    }

    #[test]
    fn reporter_writes_one_line_per_error() {
        let mut r = Reporter::new(Vec::new());
        r.report(unterminated(3));
        r.report(Error::lexical(5, ErrorKind::UnexpectedCharacter('$')));

        assert!(r.had_error());
        let written = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(
            "[line 3] Error: Unterminated string.\n[line 5] Error: Unexpected character '$'.\n",
            written
        );
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |e: Error| seen.push(e.line());
            sink.report(unterminated(9));
        }
        assert_eq!(vec![9], seen);
    }
}
