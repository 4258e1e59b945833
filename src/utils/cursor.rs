// Mon Oct 19 2026 - Alex

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

/// Forward-only cursor over the lines of a text stream.
///
/// Lines that have been advanced past cannot be revisited; lookahead is done
/// with `peek` or by explicitly consuming lines with `advance`/`take`.
pub struct LineCursor<R: BufRead> {
    lines: Lines<R>,
    peeked: Option<String>,
    line_number: usize,
}

impl LineCursor<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            peeked: None,
            line_number: 0,
        }
    }

    /// 1-based number of the line most recently returned by `advance`.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn peek(&mut self) -> io::Result<Option<&str>> {
        if self.peeked.is_none() {
            self.peeked = self.lines.next().transpose()?;
        }
        Ok(self.peeked.as_deref())
    }

    pub fn advance(&mut self) -> io::Result<Option<String>> {
        let next = match self.peeked.take() {
            Some(line) => Some(line),
            None => self.lines.next().transpose()?,
        };

        if next.is_some() {
            self.line_number += 1;
        }
        Ok(next)
    }

    /// Consumes up to `count` lines. Fewer are returned only at end of input.
    pub fn take(&mut self, count: usize) -> io::Result<Vec<String>> {
        let mut taken = Vec::with_capacity(count);
        while taken.len() < count {
            match self.advance()? {
                Some(line) => taken.push(line),
                None => break,
            }
        }
        Ok(taken)
    }

    pub fn is_exhausted(&mut self) -> io::Result<bool> {
        Ok(self.peek()?.is_none())
    }
}
