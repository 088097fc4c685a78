use std::io::{self, BufRead};

use crate::linked::Queue;
use crate::util::error::ParseTreeError;

/// An iterator over the whitespace-separated tokens of a reader, such as
/// [`Stdin`](std::io::Stdin).
///
/// Lines are only read once all of the tokens from the previous line have been taken, so a tree
/// builder leaves everything after the line holding its last token in the reader. Iteration stops
/// at the end of the input or at the first I/O error, which is kept and can be retrieved with
/// [`take_error`](Tokens::take_error).
pub struct Tokens<R> {
    reader: R,
    pending: Queue<String>,
    error: Option<io::Error>,
}

impl<R: BufRead> Tokens<R> {
    pub const fn new(reader: R) -> Tokens<R> {
        Tokens {
            reader,
            pending: Queue::new(),
            error: None,
        }
    }

    /// Takes the I/O error that ended iteration, if there was one.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Replaces the result of reading from these tokens with the I/O error that interrupted them,
    /// if any.
    pub(crate) fn check<T>(
        mut self,
        result: Result<T, ParseTreeError>,
    ) -> Result<T, ParseTreeError> {
        match self.take_error() {
            Some(error) => Err(error.into()),
            None => result,
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Ok(token) = self.pending.try_pop_front() {
                return Some(token);
            }
            if self.error.is_some() {
                return None;
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_owned)),
                Err(error) => self.error = Some(error),
            }
        }
    }
}
