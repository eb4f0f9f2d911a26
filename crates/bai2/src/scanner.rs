//! Splits a byte stream into logical BAI2 records.
//!
//! A record normally ends with `/`. Some producers end records with a bare
//! newline instead, and free text may run onto the next physical line with
//! no terminator at all. On a newline the scanner peeks at the next three
//! bytes: a known record code followed by a comma means the current record
//! is complete, anything else means the record continues.

use std::io::BufRead;

use crate::{error::Result, record::RecordCode};

const LOOKAHEAD: usize = 3;

/// Streaming scanner over logical records.
///
/// Owns the only read cursor over its source; create one scanner per stream.
///
/// ```
/// use bai2::scanner::RecordScanner;
///
/// let mut scanner = RecordScanner::new("16,409,100,0,,,TEXT/\n88,MORE/".as_bytes());
/// assert_eq!(scanner.next_record().unwrap().as_deref(), Some("16,409,100,0,,,TEXT/"));
/// assert_eq!(scanner.next_record().unwrap().as_deref(), Some("88,MORE/"));
/// assert_eq!(scanner.next_record().unwrap(), None);
/// ```
pub struct RecordScanner<R> {
    reader: R,
    /// Bytes already pulled from `reader` by [`Self::peek`].
    pending: Vec<u8>,
    line: Vec<u8>,
    index: usize,
    finished: bool,
}

impl<R: BufRead> RecordScanner<R> {
    /// Creates a scanner over a buffered source.
    pub fn new(reader: R) -> Self {
        Self { reader, pending: Vec::with_capacity(LOOKAHEAD), line: Vec::new(), index: 0, finished: false }
    }

    /// Number of logical records returned so far; the index of the last one.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.index
    }

    /// Reads the next logical record, trimmed and `/`-terminated.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_record(&mut self) -> Result<Option<String>> {
        self.line.clear();

        while let Some(byte) = self.next_byte()? {
            match byte {
                b'/' => {
                    self.line.push(byte);
                    break;
                }
                b'\n' | b'\r' => {
                    if is_blank(&self.line) {
                        self.line.clear();
                        continue;
                    }
                    if trimmed(&self.line).ends_with(b"/") {
                        break;
                    }
                    if RecordCode::starts_record(self.peek(LOOKAHEAD)?) {
                        self.line.push(b'/');
                        break;
                    }
                    // Record continues on the next physical line.
                }
                _ => self.line.push(byte),
            }
        }

        if is_blank(&self.line) {
            self.finished = true;
            return Ok(None);
        }

        let mut record = String::from_utf8(trimmed(&self.line).to_vec())?;
        if !record.ends_with('/') {
            record.push('/');
        }
        self.index += 1;
        Ok(Some(record))
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        if !self.pending.is_empty() {
            return Ok(Some(self.pending.remove(0)));
        }
        self.read_byte()
    }

    fn peek(&mut self, n: usize) -> Result<&[u8]> {
        while self.pending.len() < n {
            match self.read_byte()? {
                Some(byte) => self.pending.push(byte),
                None => break,
            }
        }
        Ok(&self.pending)
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let buf = self.reader.fill_buf()?;
        let Some(&byte) = buf.first() else {
            return Ok(None);
        };
        self.reader.consume(1);
        Ok(Some(byte))
    }
}

impl<R: BufRead> Iterator for RecordScanner<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

fn trimmed(bytes: &[u8]) -> &[u8] {
    bytes.trim_ascii()
}
