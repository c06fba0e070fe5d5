use std::io::{BufRead, Lines};

use crate::error::{Error, Result};

/// Outcome of advancing the cursor
#[derive(Debug, PartialEq)]
pub(crate) enum Line {
    /// Whitespace separated tokens of the next line
    Tokens(Vec<String>),
    /// No more input, only returned where the end of the file is allowed
    EndOfStream,
}

enum State<R> {
    Open(Lines<R>),
    Closed,
}

/// Forward-only line reader
///
/// Owns the underlying source until the end of the stream is reached, after
/// which the source is dropped and any further reads are an error.
pub(crate) struct LineCursor<R> {
    state: State<R>,
    line: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            state: State::Open(reader.lines()),
            line: 0,
        }
    }

    /// Read and tokenise the next line
    ///
    /// Running out of input closes the cursor. This is only valid when
    /// `end_allowed` is set, otherwise it is reported as an unexpected end of
    /// file.
    pub(crate) fn advance(&mut self, end_allowed: bool) -> Result<Line> {
        let State::Open(lines) = &mut self.state else {
            return Err(Error::ClosedStream);
        };

        match lines.next() {
            Some(line) => {
                self.line += 1;
                Ok(Line::Tokens(
                    line?.split_whitespace().map(String::from).collect(),
                ))
            }
            None => {
                self.state = State::Closed;
                if end_allowed {
                    Ok(Line::EndOfStream)
                } else {
                    Err(Error::UnexpectedEndOfFile { line: self.line })
                }
            }
        }
    }

    /// Tokens of the next line, which must exist
    pub(crate) fn next_tokens(&mut self) -> Result<Vec<String>> {
        match self.advance(false)? {
            Line::Tokens(tokens) => Ok(tokens),
            Line::EndOfStream => Err(Error::UnexpectedEndOfFile { line: self.line }),
        }
    }

    /// Number of the last line read, starting from 1
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn tokenises_lines() {
        let mut cursor = LineCursor::new(Cursor::new("a  b\tc\n\n 1.0 \n"));

        assert_eq!(
            cursor.advance(false).unwrap(),
            Line::Tokens(vec!["a".into(), "b".into(), "c".into()])
        );
        assert_eq!(cursor.next_tokens().unwrap(), Vec::<String>::new());
        assert_eq!(cursor.next_tokens().unwrap(), vec!["1.0".to_string()]);
        assert_eq!(cursor.line(), 3);
        assert!(!cursor.is_closed());
    }

    #[test]
    fn allowed_end_closes() {
        let mut cursor = LineCursor::new(Cursor::new("only\n"));
        cursor.next_tokens().unwrap();

        assert_eq!(cursor.advance(true).unwrap(), Line::EndOfStream);
        assert!(cursor.is_closed());
        assert!(matches!(cursor.advance(true), Err(Error::ClosedStream)));
        assert!(matches!(cursor.next_tokens(), Err(Error::ClosedStream)));
    }

    #[test]
    fn unexpected_end() {
        let mut cursor = LineCursor::new(Cursor::new("one\ntwo"));
        cursor.next_tokens().unwrap();
        cursor.next_tokens().unwrap();

        assert!(matches!(
            cursor.next_tokens(),
            Err(Error::UnexpectedEndOfFile { line: 2 })
        ));
        assert!(cursor.is_closed());
    }
}
