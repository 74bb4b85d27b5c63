//! Lazy record source over a live byte stream.

use crate::decoder::{DecoderStats, RecordDecoder};
use crate::lines::LineSplitter;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use sentiment_core::{Error, MalformedPolicy, Record, Result};
use std::pin::Pin;
use std::time::Duration;

/// Boxed stream of body chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// Pull-based source of records from a newline-delimited JSON stream.
///
/// The sequence is non-restartable: once the stream ends or any error is
/// returned, every later call yields `Ok(None)`.
pub struct StreamSource {
    stream: ByteStream,
    splitter: LineSplitter,
    decoder: RecordDecoder,
    read_timeout: Option<Duration>,
    /// The byte stream reported end of input.
    eof: bool,
    /// No further lines or records will be produced.
    done: bool,
}

impl StreamSource {
    /// Wrap a chunk stream.
    pub fn from_stream(stream: ByteStream, policy: MalformedPolicy) -> Self {
        Self {
            stream,
            splitter: LineSplitter::new(),
            decoder: RecordDecoder::new(policy),
            read_timeout: None,
            eof: false,
            done: false,
        }
    }

    /// Fail `next_line` if no chunk arrives within `timeout`.
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Fail `next_line` once a line grows past `limit` bytes.
    pub fn with_max_line_bytes(mut self, limit: Option<usize>) -> Self {
        self.splitter = LineSplitter::new().with_max_line_bytes(limit);
        self
    }

    /// Wait for the next line. `Ok(None)` once the connection has closed.
    pub async fn next_line(&mut self) -> Result<Option<Bytes>> {
        if self.done {
            return Ok(None);
        }

        loop {
            match self.splitter.next_line() {
                Ok(Some(line)) => return Ok(Some(line)),
                Ok(None) => {}
                Err(e) => {
                    self.done = true;
                    return Err(e);
                }
            }

            if self.eof {
                let rest = self.splitter.finish();
                if rest.is_none() {
                    self.done = true;
                }
                return Ok(rest);
            }

            match self.next_chunk().await {
                Ok(Some(chunk)) => self.splitter.push(&chunk),
                Ok(None) => self.eof = true,
                Err(e) => {
                    self.done = true;
                    return Err(e);
                }
            }
        }
    }

    /// Next record: `Ok(Some)`, `Ok(None)` at end of stream, or an error.
    pub async fn next_record(&mut self) -> Result<Option<Record>> {
        while let Some(line) = self.next_line().await? {
            match self.decoder.decode(&line) {
                Ok(Some(record)) => return Ok(Some(record)),
                Ok(None) => continue,
                Err(e) => {
                    self.done = true;
                    return Err(e);
                }
            }
        }
        Ok(None)
    }

    /// Whether the source is exhausted.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Decoding counters so far.
    pub fn stats(&self) -> &DecoderStats {
        self.decoder.stats()
    }

    async fn next_chunk(&mut self) -> Result<Option<Bytes>> {
        let next = self.stream.next();
        let item = match self.read_timeout {
            Some(limit) => tokio::time::timeout(limit, next)
                .await
                .map_err(|_| Error::timeout(format!("no data received within {limit:?}")))?,
            None => next.await,
        };
        item.transpose()
    }
}
