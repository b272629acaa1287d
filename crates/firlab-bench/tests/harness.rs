use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};

use approx::assert_relative_eq;
use firlab_bench::{
    BenchConfig, BenchError, FirBench, ImageFileSource, InMemorySource, InputMode, MatrixSource,
};
use firlab_filter::border::BorderMode;
use firlab_filter::{kernels, Filter2d};
use firlab_image::{Matrix, MatrixSize};

/// Counts how many times the input is loaded.
struct CountingSource {
    matrix: Matrix<f32>,
    loads: AtomicUsize,
}

impl CountingSource {
    fn new(matrix: Matrix<f32>) -> Self {
        Self {
            matrix,
            loads: AtomicUsize::new(0),
        }
    }
}

impl MatrixSource for CountingSource {
    type Error = Infallible;

    fn load(&self) -> Result<Matrix<f32>, Self::Error> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.matrix.clone())
    }
}

fn gradient(size: MatrixSize) -> Matrix<f32> {
    Matrix::from_fn(size, |r, c| ((r * 7 + c * 3) % 256) as f32 / 255.0)
}

#[test]
fn correctness_matches_constant_border() -> Result<(), BenchError> {
    let _ = env_logger::builder().is_test(true).try_init();

    let source = InMemorySource::new(gradient(MatrixSize { rows: 32, cols: 24 }));
    let bench = FirBench::new(source, kernels::constant_kernel(5, 0.5));

    let report = bench.correctness_check(&Filter2d::new(0, BorderMode::Constant))?;

    assert_eq!(report.normalized_error, 0.0);
    assert_relative_eq!(report.correlation, 1.0, epsilon = 1e-5);
    assert_eq!((report.rows, report.cols), (32, 24));
    Ok(())
}

#[test]
fn correctness_reflect_differs_in_trailing_rows() -> Result<(), BenchError> {
    let rows = 32;
    let source = InMemorySource::new(gradient(MatrixSize { rows, cols: 24 }));
    let bench = FirBench::new(source, kernels::constant_kernel(5, 0.5));

    let outputs = bench.correctness_check_with_outputs(&Filter2d::new(0, BorderMode::Reflect101))?;

    assert!(outputs.report.normalized_error > 0.0);
    assert!(outputs.report.correlation > 0.5);
    for r in 0..=rows - 5 {
        assert_eq!(outputs.fir.row(r), outputs.reference.row(r));
    }
    assert_eq!(outputs.input.size(), outputs.fir.size());
    Ok(())
}

#[test]
fn set_coefficients_changes_next_run() -> Result<(), BenchError> {
    let source = InMemorySource::new(gradient(MatrixSize { rows: 8, cols: 4 }));
    let mut bench = FirBench::new(source, vec![1.0]);

    let identity = bench.correctness_check_with_outputs(&Filter2d::default())?;
    assert_eq!(identity.fir, identity.input);

    bench.set_coefficients(vec![]);
    assert!(bench.coefficients().is_empty());

    let zeros = bench.correctness_check_with_outputs(&Filter2d::default())?;
    assert!(zeros.fir.as_slice().iter().all(|&x| x == 0.0));
    Ok(())
}

#[test]
fn throughput_reload_per_task() -> Result<(), BenchError> {
    let source = CountingSource::new(gradient(MatrixSize { rows: 16, cols: 16 }));
    let bench = FirBench::new(source, kernels::constant_kernel(5, 0.5));

    let config = BenchConfig::new(3, 4)?;
    let report = bench.throughput_check(&config)?;

    assert_eq!(bench.source().loads.load(Ordering::SeqCst), 12);
    assert_eq!(report.operations, 12);
    assert_eq!(report.input_mode, InputMode::ReloadPerTask);
    assert!(report.ops_per_sec > 0.0);
    Ok(())
}

#[test]
fn throughput_shared_input() -> Result<(), BenchError> {
    let source = CountingSource::new(gradient(MatrixSize { rows: 16, cols: 16 }));
    let bench = FirBench::new(source, kernels::constant_kernel(5, 0.5));

    let config = BenchConfig::new(5, 2)?.with_input_mode(InputMode::Shared);
    let report = bench.throughput_check(&config)?;

    assert_eq!(bench.source().loads.load(Ordering::SeqCst), 1);
    assert_eq!(report.operations, 10);
    assert_eq!(report.num_threads, 5);
    assert_eq!(report.num_rounds, 2);
    Ok(())
}

#[test]
fn throughput_zero_rounds() -> Result<(), BenchError> {
    let source = CountingSource::new(gradient(MatrixSize { rows: 4, cols: 4 }));
    let bench = FirBench::new(source, vec![0.5; 5]);

    let report = bench.throughput_check(&BenchConfig::new(4, 0)?)?;

    assert_eq!(report.operations, 0);
    assert_eq!(report.ops_per_sec, 0.0);
    assert_eq!(bench.source().loads.load(Ordering::SeqCst), 0);
    Ok(())
}

#[test]
fn image_file_source() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("input.png");

    let size = MatrixSize { rows: 20, cols: 10 };
    let image = Matrix::from_fn(size, |r, c| (r * 10 + c) as u8);
    firlab_io::functional::write_image_gray(&file_path, &image)?;

    let bench = FirBench::new(ImageFileSource::new(&file_path), vec![0.5; 5]);

    let report = bench.correctness_check(&Filter2d::new(0, BorderMode::Constant))?;
    assert_eq!((report.rows, report.cols), (20, 10));
    assert_eq!(report.normalized_error, 0.0);

    let report = bench.throughput_check(&BenchConfig::new(2, 2)?)?;
    assert_eq!(report.operations, 4);
    Ok(())
}

#[test]
fn missing_image_is_reported() -> Result<(), BenchError> {
    let bench = FirBench::new(ImageFileSource::new("does/not/exist.png"), vec![0.5; 5]);

    let res = bench.correctness_check(&Filter2d::default());
    assert!(matches!(res, Err(BenchError::Source(_))));

    let res = bench.throughput_check(&BenchConfig::new(2, 3)?);
    assert!(matches!(res, Err(BenchError::Source(_))));
    Ok(())
}

#[test]
fn reports_serialize() -> Result<(), Box<dyn std::error::Error>> {
    let source = InMemorySource::new(gradient(MatrixSize { rows: 8, cols: 8 }));
    let bench = FirBench::new(source, vec![0.5; 5]);

    let report = bench.throughput_check(&BenchConfig::new(1, 1)?)?;
    let json = serde_json::to_value(report)?;

    assert_eq!(json["operations"], 1);
    assert_eq!(json["input_mode"], "reload_per_task");
    Ok(())
}

#[test]
fn invalid_thread_count() {
    assert!(matches!(
        BenchConfig::new(0, 10),
        Err(BenchError::InvalidThreadCount(0))
    ));
    assert!(matches!(
        BenchConfig::new(100, 10),
        Err(BenchError::InvalidThreadCount(100))
    ));
    assert!(BenchConfig::new(99, 10).is_ok());
}
