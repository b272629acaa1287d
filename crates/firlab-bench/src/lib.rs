#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// benchmark configuration.
pub mod config;

/// error types for the benchmark harness.
pub mod error;

/// correctness and throughput checks.
pub mod harness;

/// fan-out-then-barrier execution of worker rounds.
pub mod rounds;

/// where the benchmark input comes from.
pub mod source;

pub use config::{BenchConfig, InputMode};
pub use error::BenchError;
pub use harness::{throughput, CorrectnessOutputs, CorrectnessReport, FirBench, ThroughputReport};
pub use rounds::{run_rounds, TaskId};
pub use source::{ImageFileSource, InMemorySource, MatrixSource};
