use std::time::{Duration, Instant};

use firlab_filter::{
    metrics::{correlation, normalized_error},
    FirFilter, ReferenceFilter,
};
use firlab_image::Matrix;
use serde::Serialize;

use crate::config::{BenchConfig, InputMode};
use crate::error::BenchError;
use crate::rounds::run_rounds;
use crate::source::MatrixSource;

/// Compute the number of operations per second.
///
/// # Returns
///
/// `operations / elapsed` in seconds, 0 when no operation ran, and infinity
/// when operations ran in no measurable time.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use firlab_bench::throughput;
///
/// assert_eq!(throughput(40, Duration::from_secs(2)), 20.0);
/// assert_eq!(throughput(0, Duration::ZERO), 0.0);
/// ```
pub fn throughput(operations: usize, elapsed: Duration) -> f64 {
    if operations == 0 {
        return 0.0;
    }
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return f64::INFINITY;
    }
    operations as f64 / secs
}

/// Result of comparing the FIR filter against a reference filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrectnessReport {
    /// L2 norm of the difference divided by the number of elements.
    pub normalized_error: f32,
    /// Pearson correlation between both outputs.
    pub correlation: f32,
    /// Rows of the compared matrices.
    pub rows: usize,
    /// Columns of the compared matrices.
    pub cols: usize,
}

/// The matrices produced by a correctness check, along with its report.
#[derive(Debug, Clone)]
pub struct CorrectnessOutputs {
    /// The normalized input.
    pub input: Matrix<f32>,
    /// The output of the FIR filter.
    pub fir: Matrix<f32>,
    /// The output of the reference filter.
    pub reference: Matrix<f32>,
    /// The comparison statistics.
    pub report: CorrectnessReport,
}

/// Result of a throughput run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThroughputReport {
    /// Worker threads per round.
    pub num_threads: usize,
    /// Sequential rounds.
    pub num_rounds: usize,
    /// How the workers obtained their input.
    pub input_mode: InputMode,
    /// Completed filtering operations.
    pub operations: usize,
    /// Wall-clock time from the first launch to the last join.
    pub elapsed: Duration,
    /// Completed filtering operations per second.
    pub ops_per_sec: f64,
}

/// Benchmark of the truncated FIR filter on a single input.
///
/// The workload is the input source and the coefficients. Replacing the
/// coefficients needs exclusive access, so they can not change while a run
/// is in flight.
pub struct FirBench<S> {
    source: S,
    coefficients: Vec<f32>,
}

impl<S: MatrixSource> FirBench<S> {
    /// Create a new benchmark.
    ///
    /// # Arguments
    ///
    /// * `source` - Where the normalized input is loaded from.
    /// * `coefficients` - The taps of the FIR filter.
    pub fn new(source: S, coefficients: Vec<f32>) -> Self {
        Self {
            source,
            coefficients,
        }
    }

    /// The coefficients used by the benchmark.
    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients
    }

    /// Replace the coefficients used by the next runs.
    pub fn set_coefficients(&mut self, coefficients: Vec<f32>) {
        self.coefficients = coefficients;
    }

    /// The source of the input.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn load_input(&self) -> Result<Matrix<f32>, BenchError> {
        self.source
            .load()
            .map_err(|err| BenchError::Source(Box::new(err)))
    }

    /// Compare the FIR filter with a reference filter on the input.
    ///
    /// No threshold is applied; the statistics are returned for the caller to
    /// interpret.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Source`] if the input cannot be loaded.
    pub fn correctness_check<R>(&self, reference: &R) -> Result<CorrectnessReport, BenchError>
    where
        R: ReferenceFilter<f32>,
    {
        Ok(self.correctness_check_with_outputs(reference)?.report)
    }

    /// Same as [`FirBench::correctness_check`] but also returns the compared matrices.
    pub fn correctness_check_with_outputs<R>(
        &self,
        reference: &R,
    ) -> Result<CorrectnessOutputs, BenchError>
    where
        R: ReferenceFilter<f32>,
    {
        let input = self.load_input()?;

        let fir = FirFilter::new(self.coefficients.clone()).filter(&input);
        let reference = reference.filter(&input, self.coefficients.as_slice());

        let report = CorrectnessReport {
            normalized_error: normalized_error(&reference, &fir),
            correlation: correlation(&reference, &fir),
            rows: fir.rows(),
            cols: fir.cols(),
        };

        log::info!(
            "correctness on {}: error {} correlation {}",
            input.size(),
            report.normalized_error,
            report.correlation
        );

        Ok(CorrectnessOutputs {
            input,
            fir,
            reference,
            report,
        })
    }

    /// Measure how many filtering operations complete per second.
    ///
    /// Runs `num_rounds` sequential rounds. Every round launches `num_threads`
    /// workers that each build their own filter, obtain the input according to
    /// the [`InputMode`] and filter it; the round ends when all of them have
    /// joined. The output of each worker is discarded.
    ///
    /// # Errors
    ///
    /// Returns the first error of the failing round; see [`run_rounds`].
    pub fn throughput_check(&self, config: &BenchConfig) -> Result<ThroughputReport, BenchError> {
        let shared = match config.input_mode() {
            InputMode::Shared => Some(self.load_input()?),
            InputMode::ReloadPerTask => None,
        };
        let shared = shared.as_ref();
        let coefficients = self.coefficients.as_slice();

        log::info!(
            "running {} rounds of {} workers ({:?})",
            config.num_rounds(),
            config.num_threads(),
            config.input_mode()
        );

        let start = Instant::now();

        run_rounds(config.num_rounds(), config.num_threads(), |_| {
            let fir = FirFilter::new(coefficients.to_vec());
            let output = match shared {
                Some(input) => fir.filter(input),
                None => fir.filter(&self.load_input()?),
            };
            std::hint::black_box(output);
            Ok(())
        })?;

        let elapsed = start.elapsed();
        let operations = config.operations();

        let report = ThroughputReport {
            num_threads: config.num_threads(),
            num_rounds: config.num_rounds(),
            input_mode: config.input_mode(),
            operations,
            elapsed,
            ops_per_sec: throughput(operations, elapsed),
        };

        log::info!(
            "{} operations in {:?}: {:.2} ops/s",
            report.operations,
            report.elapsed,
            report.ops_per_sec
        );

        Ok(report)
    }
}
