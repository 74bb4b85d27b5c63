//! Stream ingestion for the stream-sentiment system.
//!
//! This crate handles:
//! - Newline framing over a chunked HTTP body
//! - Record decoding and sequence numbering
//! - Opening the authenticated stream connection
//! - Stream rule registration

pub mod auth;
pub mod client;
pub mod decoder;
pub mod lines;
pub mod rules;
pub mod source;

pub use auth::{BearerAuth, BearerToken, RequestDecorator};
pub use client::StreamClient;
pub use decoder::{DecoderStats, RecordDecoder};
pub use lines::LineSplitter;
pub use rules::{build_rules_payload, AddRules, Rule};
pub use source::{ByteStream, StreamSource};
