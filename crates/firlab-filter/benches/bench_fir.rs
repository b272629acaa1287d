use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use firlab_filter::border::BorderMode;
use firlab_filter::{kernels, Filter2d, FirFilter, ReferenceFilter};
use firlab_image::{Matrix, MatrixSize};

fn bench_fir(c: &mut Criterion) {
    let mut group = c.benchmark_group("FirFilter");

    for (rows, cols) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for kernel_size in [3, 5, 9, 17].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*rows * *cols * *kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", rows, cols, kernel_size);

            let size = MatrixSize {
                rows: *rows,
                cols: *cols,
            };
            let input = Matrix::from_fn(size, |r, c| ((r * 31 + c * 17) % 255) as f32 / 255.0);
            let coefficients = kernels::constant_kernel(*kernel_size, 0.5f32);

            group.bench_with_input(
                BenchmarkId::new("fir_truncated", &parameter_string),
                &input,
                |b, i| {
                    let fir = FirFilter::new(coefficients.clone());
                    b.iter(|| black_box(fir.filter(i)))
                },
            );

            group.bench_with_input(
                BenchmarkId::new("filter2d_reflect101", &parameter_string),
                &input,
                |b, i| {
                    let reference = Filter2d::new(0, BorderMode::Reflect101);
                    b.iter(|| black_box(reference.filter(i, coefficients.as_slice())))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_fir);
criterion_main!(benches);
