use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use forest_entropy::{Log2Backend, SplitHistograms, WeightedEntropyHistogram};
use std::hint::black_box;

fn labels(n: usize, classes: usize) -> Vec<usize> {
    (0..n).map(|i| (i * 31 + i / 7) % classes).collect()
}

fn bench_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram_updates");
    for backend in [Log2Backend::Fast, Log2Backend::Exact] {
        for classes in [2usize, 10, 100] {
            let data = labels(10_000, classes);
            group.throughput(Throughput::Elements(data.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{backend:?}"), classes),
                &data,
                |b, data| {
                    b.iter(|| {
                        let mut hist = WeightedEntropyHistogram::with_backend(classes, backend);
                        for &label in data {
                            hist.add_one(label).unwrap();
                        }
                        black_box(hist.weighted_entropy())
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_split_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_sweep");
    for classes in [2usize, 10, 100] {
        let data = labels(10_000, classes);
        group.throughput(Throughput::Elements(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(classes), &data, |b, data| {
            let parent = SplitHistograms::from_labels(data, classes).unwrap();
            b.iter(|| {
                let mut split = parent.clone();
                let mut best = f64::INFINITY;
                for &label in data {
                    split.move_left(label).unwrap();
                    best = best.min(split.weighted_entropy());
                }
                black_box(best)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_updates, bench_split_sweep);
criterion_main!(benches);
