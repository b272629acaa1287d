/// An error type for the benchmark harness.
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    /// The requested thread count is outside the supported range.
    #[error("The number of threads must be 0<x<100, got {0}")]
    InvalidThreadCount(usize),

    /// The input could not be loaded.
    #[error("Failed to load the input. {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A worker thread could not be spawned.
    #[error("Failed to spawn worker thread. {0}")]
    Spawn(#[from] std::io::Error),

    /// A worker thread panicked.
    #[error("Worker {index} of round {round} panicked")]
    WorkerPanicked {
        /// round of the worker
        round: usize,
        /// index of the worker within its round
        index: usize,
    },
}
