use std::path::{Path, PathBuf};
use std::process::ExitCode;

use argh::FromArgs;

use firlab::bench::{config::DEFAULT_ROUNDS, BenchConfig, CorrectnessOutputs, FirBench};
use firlab::bench::{ImageFileSource, InputMode};
use firlab::filter::{border::BorderMode, kernels, Filter2d};
use firlab::image::ops::abs_diff;
use firlab::io::functional as F;

/// Exit status for invalid command line input.
const INVALID_INPUT: i32 = -1;

#[derive(FromArgs, Debug)]
/// Compare the truncated FIR filter with a reference convolution and measure its throughput.
struct Args {
    /// path to the input image
    #[argh(positional)]
    image_path: PathBuf,

    /// number of worker threads per round, 0<x<100
    #[argh(positional)]
    num_threads: i64,

    /// number of sequential rounds
    #[argh(option, short = 'n', default = "DEFAULT_ROUNDS")]
    rounds: usize,

    /// load the image once and share it across the workers
    #[argh(switch)]
    share_input: bool,

    /// directory to write the input, filtered and difference images to
    #[argh(option, short = 'o')]
    output_dir: Option<PathBuf>,

    /// print the reports as json
    #[argh(switch)]
    json: bool,
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().collect();
    let (cmd, rest) = argv.split_first().map_or(("fir_bench", &[][..]), |(cmd, rest)| {
        (cmd.as_str(), rest)
    });
    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

    match Args::from_args(&[cmd], &rest) {
        Ok(args) => args,
        Err(early_exit) => {
            // --help exits cleanly, anything else is a usage error
            if early_exit.status.is_ok() {
                println!("{}", early_exit.output);
                std::process::exit(0);
            }
            eprintln!("{}", early_exit.output);
            eprintln!("Usage: {cmd} <imagePath> <numberOfThreads>");
            std::process::exit(INVALID_INPUT);
        }
    }
}

fn bench_config(args: &Args) -> Option<BenchConfig> {
    let num_threads = usize::try_from(args.num_threads).ok()?;
    let input_mode = if args.share_input {
        InputMode::Shared
    } else {
        InputMode::ReloadPerTask
    };
    BenchConfig::new(num_threads, args.rounds)
        .ok()
        .map(|config| config.with_input_mode(input_mode))
}

fn save_outputs(
    dir: &Path,
    outputs: &CorrectnessOutputs,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;

    F::write_image_gray_f32(dir.join("original.png"), &outputs.input)?;
    F::write_image_gray_f32(dir.join("fir.png"), &outputs.fir)?;
    F::write_image_gray_f32(dir.join("reference.png"), &outputs.reference)?;

    // black where both filters agree
    let diff = abs_diff(&outputs.reference, &outputs.fir)?;
    F::write_image_gray_f32(dir.join("reference_minus_fir.png"), &diff)?;

    log::info!("wrote comparison images to {}", dir.display());
    Ok(())
}

fn run(args: &Args, config: &BenchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let bench = FirBench::new(
        ImageFileSource::new(&args.image_path),
        kernels::constant_kernel(5, 0.5f32),
    );

    // same setup as a default 2D filter: anchor on the first tap, mirrored border
    let reference = Filter2d::new(0, BorderMode::Reflect101);
    let outputs = bench.correctness_check_with_outputs(&reference)?;

    if let Some(dir) = &args.output_dir {
        save_outputs(dir, &outputs)?;
    }

    let throughput = bench.throughput_check(config)?;

    if args.json {
        let report = serde_json::json!({
            "image": args.image_path,
            "coefficients": bench.coefficients(),
            "correctness": outputs.report,
            "throughput": throughput,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(">Normalized error: {}", outputs.report.normalized_error);
    println!(">Correlation: {}", outputs.report.correlation);
    println!(
        ">Throughput: {:.2} img/s ({} images in {:.3}s)",
        throughput.ops_per_sec,
        throughput.operations,
        throughput.elapsed.as_secs_f64()
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = parse_args();

    let Some(config) = bench_config(&args) else {
        eprintln!(
            "The number of threads must be 0<x<100, got {}",
            args.num_threads
        );
        std::process::exit(INVALID_INPUT);
    };

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
