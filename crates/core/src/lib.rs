//! Core types and configuration for the stream-sentiment system.
//!
//! This crate provides shared types used across all other crates:
//! - Stream records and sentiment results
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, MalformedPolicy, OutputFormat};
pub use error::{Error, Result};
pub use types::*;
