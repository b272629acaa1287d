use serde::Serialize;

use crate::error::BenchError;

/// Largest supported number of worker threads per round.
pub const MAX_THREADS: usize = 99;

/// Number of rounds used when none is given.
pub const DEFAULT_ROUNDS: usize = 10;

/// How the workers of a throughput run obtain their input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Every worker reloads and normalizes the input from its source.
    ///
    /// This measures the end-to-end cost of one filtering operation.
    #[default]
    ReloadPerTask,

    /// The input is loaded once and read by every worker.
    Shared,
}

/// Configuration of a throughput run.
///
/// # Example
///
/// ```
/// use firlab_bench::{BenchConfig, InputMode};
///
/// let config = BenchConfig::new(4, 10).unwrap().with_input_mode(InputMode::Shared);
///
/// assert_eq!(config.num_threads(), 4);
/// assert_eq!(config.num_rounds(), 10);
/// assert_eq!(config.operations(), 40);
///
/// assert!(BenchConfig::new(0, 10).is_err());
/// assert!(BenchConfig::new(100, 10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchConfig {
    num_threads: usize,
    num_rounds: usize,
    input_mode: InputMode,
}

impl BenchConfig {
    /// Create a new configuration with the default [`InputMode`].
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidThreadCount`] if `num_threads` is not in `1..=99`.
    pub fn new(num_threads: usize, num_rounds: usize) -> Result<Self, BenchError> {
        if !(1..=MAX_THREADS).contains(&num_threads) {
            return Err(BenchError::InvalidThreadCount(num_threads));
        }
        Ok(Self {
            num_threads,
            num_rounds,
            input_mode: InputMode::default(),
        })
    }

    /// Set how the workers obtain their input.
    pub fn with_input_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }

    /// Number of worker threads launched per round.
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Number of sequential rounds.
    pub fn num_rounds(&self) -> usize {
        self.num_rounds
    }

    /// How the workers obtain their input.
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Total number of filtering operations of a run.
    pub fn operations(&self) -> usize {
        self.num_threads * self.num_rounds
    }
}
