//! Streaming sentiment pipeline.
//!
//! This crate provides:
//! - The sequential record driver
//! - Console and in-memory sinks
//! - Per-run statistics

pub mod driver;
pub mod sink;
pub mod stats;

pub use driver::Pipeline;
pub use sink::{CollectSink, ConsoleSink, Sink};
pub use stats::PipelineStats;
