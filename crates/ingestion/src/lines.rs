//! Newline framing over an arbitrarily chunked byte stream.

use bytes::{Bytes, BytesMut};
use sentiment_core::{Error, Result};

/// Accumulates byte chunks and yields complete lines.
///
/// Chunk boundaries carry no meaning: a line may span many chunks and a
/// chunk may hold many lines. Lines are returned without the trailing
/// `\n` or `\r\n`.
#[derive(Debug, Default)]
pub struct LineSplitter {
    buffer: BytesMut,
    /// Bytes before this offset are known to contain no newline.
    scan_from: usize,
    max_line_bytes: Option<usize>,
}

impl LineSplitter {
    /// Create an empty splitter with no line length limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail once a line (complete or still buffering) exceeds `limit` bytes.
    pub fn with_max_line_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_line_bytes = limit;
        self
    }

    /// Append a chunk.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    /// Pop the next complete line, if one is buffered.
    ///
    /// Errors with [`Error::LineTooLong`] when the limit is exceeded.
    pub fn next_line(&mut self) -> Result<Option<Bytes>> {
        let offset = self.buffer[self.scan_from..]
            .iter()
            .position(|&b| b == b'\n');

        match offset {
            Some(i) => {
                let end = self.scan_from + i;
                self.scan_from = 0;
                self.check_length(end)?;

                let mut line = self.buffer.split_to(end + 1);
                line.truncate(end);
                strip_cr(&mut line);
                Ok(Some(line.freeze()))
            }
            None => {
                self.scan_from = self.buffer.len();
                self.check_length(self.buffer.len())?;
                Ok(None)
            }
        }
    }

    /// Take whatever is left once the stream has ended.
    ///
    /// Returns `None` when nothing is buffered.
    pub fn finish(&mut self) -> Option<Bytes> {
        self.scan_from = 0;
        if self.buffer.is_empty() {
            return None;
        }
        let mut line = self.buffer.split();
        strip_cr(&mut line);
        Some(line.freeze())
    }

    /// Number of buffered bytes not yet returned.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    fn check_length(&self, len: usize) -> Result<()> {
        match self.max_line_bytes {
            Some(limit) if len > limit => Err(Error::LineTooLong { limit }),
            _ => Ok(()),
        }
    }
}

fn strip_cr(line: &mut BytesMut) {
    if line.last() == Some(&b'\r') {
        line.truncate(line.len() - 1);
    }
}
