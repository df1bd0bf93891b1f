use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use rs2_window::*;

fn random_values(count: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(0.0..1000.0)).collect()
}

// Worst case for the rescan policy: the maximum is always the oldest item
fn descending_values(count: usize) -> Vec<f64> {
    (0..count).rev().map(|x| x as f64).collect()
}

fn bench_slide(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide");
    let inputs = [
        ("random", random_values(10_000)),
        ("descending", descending_values(10_000)),
    ];

    for capacity in [8usize, 64, 512] {
        for (label, values) in &inputs {
            for strategy in [MaxStrategy::Rescan, MaxStrategy::MonotonicDeque] {
                group.bench_with_input(
                    BenchmarkId::new(format!("{}/{:?}", label, strategy), capacity),
                    &capacity,
                    |b, &capacity| {
                        b.iter(|| {
                            let mut window =
                                SlidingWindow::with_strategy(capacity, strategy).unwrap();
                            for &value in values {
                                black_box(window.slide(value).unwrap());
                            }
                        })
                    },
                );
            }
        }
    }
    group.finish();
}

fn bench_runner(c: &mut Criterion) {
    let values = random_values(10_000);
    c.bench_function("runner_two_windows", |b| {
        b.iter(|| {
            let outputs = process_stream(values.iter().copied(), &[3, 20])
                .unwrap()
                .count();
            black_box(outputs)
        })
    });
}

criterion_group!(benches, bench_slide, bench_runner);
criterion_main!(benches);
